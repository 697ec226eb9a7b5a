//! Integration tests for the binary wire format.

use dtext::codec::decode_with_max_depth;
use dtext::{
    Arg, DecodeError, DeferredText, Number, PluralResourceId, Quantity, ResourceId,
    ResourceTable, args, decode, encode,
};
use insta::assert_snapshot;

fn nested(depth: usize) -> DeferredText {
    (0..depth).fold(DeferredText::EMPTY, |inner, _| {
        DeferredText::literal("%s", args![inner])
    })
}

// =========================================================================
// Layout
// =========================================================================

#[test]
fn empty_is_a_single_tag() {
    assert_eq!(encode(&DeferredText::Empty), [0]);
}

#[test]
fn lookup_layout() {
    let text = DeferredText::lookup_with(ResourceId::from_raw(1), args![7]);
    assert_eq!(
        encode(&text),
        [
            2, // lookup
            1, 0, 0, 0, 0, 0, 0, 0, // id
            1, 0, 0, 0, // arg count
            1, // integer
            7, 0, 0, 0, 0, 0, 0, 0,
        ]
    );
}

#[test]
fn plural_layout() {
    let text = DeferredText::plural(PluralResourceId::from_raw(2), Quantity::with_cardinal(-1));
    assert_eq!(
        encode(&text),
        [
            4, // plural
            2, 0, 0, 0, 0, 0, 0, 0, // id
            255, 255, 255, 255, 255, 255, 255, 255, // quantity
            1, // cardinal flag
            0, 0, 0, 0, // arg count
        ]
    );
}

#[test]
fn joined_layout() {
    let text = DeferredText::fragments(["a", "bc"]);
    assert_eq!(
        encode(&text),
        [
            3, // joined
            0, 0, 0, 0, 0, 0, 0, 0, // separator
            2, 0, 0, 0, // part count
            1, 0, 0, 0, b'a', //
            2, 0, 0, 0, b'b', b'c',
        ]
    );
}

#[test]
fn doubles_are_stored_as_bits() {
    let bytes = encode(&DeferredText::literal("%s", args![0.1]));
    let tail: [u8; 8] = bytes[bytes.len() - 8..].try_into().unwrap();
    assert_eq!(f64::from_le_bytes(tail), 0.1);
}

// =========================================================================
// Round Trips
// =========================================================================

#[test]
fn every_variant_round_trips() {
    let values = [
        DeferredText::Empty,
        DeferredText::text("Success Text"),
        DeferredText::literal(
            "Formatted Text with %d and %.4f and %s",
            args![45, 0.345, "everything"],
        ),
        DeferredText::lookup_with(
            "string_with_multiple_variables",
            args!["Variable 1 text", "Variable 2 text", 500],
        ),
        DeferredText::fragments(["Success", "Text"]),
        DeferredText::joined("comma", ["ü", "日本", ""]),
        DeferredText::plural_with(
            "months_with_number_and_parameter",
            Quantity::with_cardinal(3),
            args![12],
        ),
        DeferredText::literal(
            "%s / %s",
            args![
                DeferredText::plural("months", Quantity::new(i64::MIN)),
                DeferredText::literal("%s", args![DeferredText::lookup("inner")]),
            ],
        ),
    ];

    for value in values {
        let decoded = decode(&encode(&value)).unwrap();
        assert_eq!(decoded, value);
    }
}

#[test]
fn special_doubles_round_trip_exactly() {
    for n in [f64::NAN, f64::INFINITY, -0.0, f64::MIN_POSITIVE, 1e300] {
        let value = DeferredText::literal("%s", vec![Arg::Number(Number::Double(n))]);
        let decoded = decode(&encode(&value)).unwrap();
        let Some(Arg::Number(Number::Double(back))) = decoded.args().first().cloned() else {
            panic!("expected a double argument");
        };
        assert_eq!(back.to_bits(), n.to_bits());
    }
}

#[test]
fn round_trip_resolves_identically() {
    let mut table = ResourceTable::new();
    table
        .load_str("en", r#"months = { one: "%d month", other: "%d months" };"#)
        .unwrap();
    let value = DeferredText::plural("months", Quantity::with_cardinal(1));
    let decoded = DeferredText::from_bytes(&value.to_bytes()).unwrap();
    assert_eq!(decoded.resolve(&table), value.resolve(&table));
    assert_eq!(decoded.resolve(&table).unwrap().content, "1 month");
}

// =========================================================================
// Malformed Input
// =========================================================================

#[test]
fn empty_input() {
    assert_eq!(
        decode(&[]),
        Err(DecodeError::UnexpectedEof {
            offset: 0,
            needed: 1,
        })
    );
}

#[test]
fn every_truncation_fails() {
    let bytes = encode(&DeferredText::plural_with(
        "months",
        Quantity::with_cardinal(3),
        args!["x", 1.5, DeferredText::fragments(["a"])],
    ));
    for len in 0..bytes.len() {
        let err = decode(&bytes[..len]).unwrap_err();
        assert!(
            matches!(err, DecodeError::UnexpectedEof { .. }),
            "prefix of {len} bytes gave {err:?}"
        );
        assert!(err.is_malformed());
    }
}

#[test]
fn string_longer_than_input() {
    let err = decode(&[1, 5, 0, 0, 0, b'a']).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnexpectedEof {
            offset: 5,
            needed: 4,
        }
    );
    assert_snapshot!(err.to_string(), @"malformed encoding: unexpected end of input at byte 5, 4 more bytes needed");
}

#[test]
fn huge_count_fails_without_allocating() {
    let mut bytes = vec![3];
    bytes.extend_from_slice(&[0; 8]);
    bytes.extend_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        decode(&bytes),
        Err(DecodeError::UnexpectedEof { offset: 13, .. })
    ));
}

#[test]
fn unknown_text_tag() {
    let err = decode(&[7]).unwrap_err();
    assert_snapshot!(err.to_string(), @"malformed encoding: invalid text tag 7 at byte 0");
}

#[test]
fn unknown_argument_tag() {
    let err = decode(&[1, 0, 0, 0, 0, 1, 0, 0, 0, 9]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidTag {
            what: "argument",
            tag: 9,
            offset: 9,
        }
    );
}

#[test]
fn cardinal_flag_must_be_boolean() {
    let mut bytes = encode(&DeferredText::plural("months", Quantity::new(1)));
    bytes[17] = 2;
    assert_eq!(
        decode(&bytes),
        Err(DecodeError::InvalidBool {
            value: 2,
            offset: 17,
        })
    );
}

#[test]
fn strings_must_be_utf8() {
    let err = decode(&[1, 1, 0, 0, 0, 0xff, 0, 0, 0, 0]).unwrap_err();
    assert_eq!(err, DecodeError::InvalidUtf8 { offset: 5 });
}

#[test]
fn trailing_bytes_are_rejected() {
    let err = decode(&[0, 0, 0]).unwrap_err();
    assert_snapshot!(err.to_string(), @"malformed encoding: 2 trailing bytes after value");
}

#[test]
fn nesting_limit_applies_to_decoding() {
    let deep = encode(&nested(dtext::DEFAULT_MAX_DEPTH + 1));
    let err = decode(&deep).unwrap_err();
    assert_eq!(
        err,
        DecodeError::TooDeep {
            max_depth: dtext::DEFAULT_MAX_DEPTH,
        }
    );
    assert!(!err.is_malformed());

    assert!(decode(&encode(&nested(dtext::DEFAULT_MAX_DEPTH))).is_ok());
}

#[test]
fn custom_decoding_depth() {
    let bytes = encode(&nested(3));
    assert!(decode_with_max_depth(&bytes, 3).is_ok());
    assert_eq!(
        decode_with_max_depth(&bytes, 2),
        Err(DecodeError::TooDeep { max_depth: 2 })
    );
}

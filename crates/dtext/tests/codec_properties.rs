//! Property tests for the codec and number formatting.

use dtext::format::format_number;
use dtext::{
    Arg, DeferredText, Number, NumberStyle, NumberSymbols, PluralResourceId, Quantity,
    ResourceId, ResourceTable, decode, encode,
};
use proptest::collection::vec;
use proptest::prelude::*;

fn arb_arg_leaf() -> impl Strategy<Value = Arg> {
    prop_oneof![
        ".{0,8}".prop_map(Arg::Text),
        any::<i64>().prop_map(|n| Arg::Number(Number::Integer(n))),
        any::<f64>().prop_map(|n| Arg::Number(Number::Double(n))),
    ]
}

fn arb_text() -> impl Strategy<Value = DeferredText> {
    let leaf = prop_oneof![
        Just(DeferredText::Empty),
        ".{0,12}".prop_map(|template| DeferredText::text(template)),
        (any::<u64>(), vec(".{0,6}", 0..4)).prop_map(|(id, parts)| DeferredText::Joined {
            separator: ResourceId::from_raw(id),
            parts,
        }),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        let arg = prop_oneof![arb_arg_leaf(), inner.prop_map(Arg::Nested)];
        prop_oneof![
            (".{0,12}", vec(arg.clone(), 0..4))
                .prop_map(|(template, args)| DeferredText::Literal { template, args }),
            (any::<u64>(), vec(arg.clone(), 0..4)).prop_map(|(id, args)| DeferredText::Lookup {
                id: ResourceId::from_raw(id),
                args,
            }),
            (any::<u64>(), any::<i64>(), any::<bool>(), vec(arg, 0..4)).prop_map(
                |(id, value, use_formatted_cardinal, args)| DeferredText::Plural {
                    id: PluralResourceId::from_raw(id),
                    quantity: Quantity {
                        value,
                        use_formatted_cardinal,
                    },
                    args,
                }
            ),
        ]
    })
}

proptest! {
    #[test]
    fn decode_inverts_encode(value in arb_text()) {
        let decoded = decode(&encode(&value)).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn round_trip_preserves_resolution(value in arb_text()) {
        let table = ResourceTable::new();
        let decoded = decode(&encode(&value)).unwrap();
        prop_assert_eq!(decoded.resolve(&table), value.resolve(&table));
    }

    #[test]
    fn strict_prefixes_never_decode(value in arb_text(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&value);
        let len = cut.index(bytes.len());
        prop_assert!(decode(&bytes[..len]).is_err());
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in vec(any::<u8>(), 0..64)) {
        let _ = decode(&bytes);
    }

    #[test]
    fn grouping_only_inserts_separators(n in any::<i64>()) {
        let grouped = NumberStyle { grouping: true, ..NumberStyle::default() };
        let text = format_number(Number::Integer(n), &grouped, &NumberSymbols::default());
        prop_assert_eq!(text.replace(',', ""), n.to_string());
    }

    #[test]
    fn fixed_precision_matches_std(n in -1.0e12f64..1.0e12, precision in 0usize..8) {
        let style = NumberStyle { precision: Some(precision), ..NumberStyle::default() };
        let text = format_number(Number::Double(n), &style, &NumberSymbols::default());
        prop_assert_eq!(text, format!("{n:.precision$}"));
    }
}

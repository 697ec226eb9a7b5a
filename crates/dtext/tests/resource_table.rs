//! Integration tests for resource files and tables.

use std::io::{Seek, Write};

use dtext::resources::{ResourceBody, parse_resources};
use dtext::{
    DeferredText, LoadError, PluralCategory, PluralResourceId, Quantity, ResourceId,
    ResourceKind, ResourceTable, TextContext, args,
};
use insta::assert_snapshot;
use tempfile::NamedTempFile;

fn lookup(table: &ResourceTable, name: &str) -> Option<String> {
    table
        .lookup_template(ResourceId::from_name(name))
        .map(|template| template.into_owned())
}

// =========================================================================
// Builder and Basic API
// =========================================================================

#[test]
fn table_default_is_english() {
    assert_eq!(ResourceTable::new().language(), "en");
}

#[test]
fn builder_sets_language() {
    let table = ResourceTable::builder().language("ru").build();
    assert_eq!(table.language(), "ru");
    assert_eq!(TextContext::language(&table), "ru");
}

#[test]
fn set_language_switches_bundles() {
    let mut table = ResourceTable::new();
    table.load_str("en", r#"hello = "Hello";"#).unwrap();
    table.load_str("de", r#"hello = "Hallo";"#).unwrap();

    assert_eq!(lookup(&table, "hello").as_deref(), Some("Hello"));
    table.set_language("de");
    assert_eq!(lookup(&table, "hello").as_deref(), Some("Hallo"));
    table.set_language("fr");
    assert_eq!(lookup(&table, "hello"), None);
}

// =========================================================================
// Loading from Strings
// =========================================================================

#[test]
fn load_str_counts_definitions() {
    let mut table = ResourceTable::new();
    let count = table
        .load_str(
            "en",
            r#"
            // A comment
            hello = "Hello!"; // trailing comment
            card = { one: "card", other: "cards" };
            "#,
        )
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(table.len("en"), 2);
    assert_eq!(
        table.names("en"),
        vec![("card", ResourceKind::Plural), ("hello", ResourceKind::String)]
    );
}

#[test]
fn empty_content_loads_nothing() {
    let mut table = ResourceTable::new();
    assert_eq!(table.load_str("en", "  // nothing here\n").unwrap(), 0);
}

#[test]
fn loading_replaces_the_language() {
    let mut table = ResourceTable::new();
    table.load_str("en", r#"hello = "Hello!";"#).unwrap();
    table.load_str("en", r#"goodbye = "Goodbye!";"#).unwrap();

    assert_eq!(lookup(&table, "hello"), None);
    assert_eq!(lookup(&table, "goodbye").as_deref(), Some("Goodbye!"));
}

#[test]
fn failed_load_keeps_previous_bundle() {
    let mut table = ResourceTable::new();
    table.load_str("en", r#"hello = "Hello!";"#).unwrap();
    assert!(table.load_str("en", r#"hello = "Broken"#).is_err());
    assert_eq!(lookup(&table, "hello").as_deref(), Some("Hello!"));
}

#[test]
fn reloading_one_language_keeps_others() {
    let mut table = ResourceTable::new();
    table.load_str("en", r#"hello = "Hello!";"#).unwrap();
    table.load_str("ru", r#"privet = "Привет!";"#).unwrap();
    table.load_str("en", r#"goodbye = "Goodbye!";"#).unwrap();

    table.set_language("ru");
    assert_eq!(lookup(&table, "privet").as_deref(), Some("Привет!"));
}

#[test]
fn string_escapes() {
    let mut table = ResourceTable::new();
    table
        .load_str("en", r#"quoted = "Say \"hi\"\tC:\\path\nnext \u{2192}";"#)
        .unwrap();
    assert_eq!(
        lookup(&table, "quoted").as_deref(),
        Some("Say \"hi\"\tC:\\path\nnext →")
    );
}

#[test]
fn parser_keeps_file_order() {
    let defs = parse_resources(r#"b = "2"; a = { other: "1" };"#).unwrap();
    let names: Vec<_> = defs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["b", "a"]);
    assert!(matches!(defs[1].body, ResourceBody::Plural(ref forms) if forms.len() == 1));
}

// =========================================================================
// Plurals
// =========================================================================

#[test]
fn plural_falls_back_to_other() {
    let mut table = ResourceTable::with_language("ru");
    table
        .load_str("ru", r#"files = { one: "%d файл", other: "%d файлов" };"#)
        .unwrap();

    let id = PluralResourceId::from_name("files");
    assert_eq!(
        table
            .lookup_plural_template(id, PluralCategory::Few)
            .as_deref(),
        Some("%d файлов")
    );
    let text = DeferredText::plural("files", Quantity::with_cardinal(3));
    assert_eq!(text.resolve(&table).unwrap().content, "3 файлов");
}

#[test]
fn insert_programmatic_resources() {
    let mut table = ResourceTable::new();
    table.insert_string("en", "title", "Inbox (%d)").unwrap();
    table
        .insert_plural(
            "en",
            "messages",
            [
                (PluralCategory::One, "%d message"),
                (PluralCategory::Other, "%d messages"),
            ],
        )
        .unwrap();

    let title = DeferredText::lookup_with("title", args![2]);
    assert_eq!(title.resolve(&table).unwrap().content, "Inbox (2)");
    let messages = DeferredText::plural("messages", Quantity::with_cardinal(1));
    assert_eq!(messages.resolve(&table).unwrap().content, "1 message");
}

#[test]
fn kind_distinguishes_strings_and_plurals() {
    let mut table = ResourceTable::new();
    let definitions =
        parse_resources(r#"title = "Inbox"; files = { other: "%d files" };"#).unwrap();
    assert_eq!(table.load_definitions("en", definitions).unwrap(), 2);

    assert_eq!(table.kind("title"), Some(ResourceKind::String));
    assert_eq!(table.kind("files"), Some(ResourceKind::Plural));
    assert_eq!(table.kind("missing"), None);
    assert!(table.contains("files"));
}

#[test]
fn insert_plural_without_forms_is_rejected() {
    let mut table = ResourceTable::new();
    let forms: [(PluralCategory, &str); 0] = [];
    let err = table.insert_plural("en", "messages", forms).unwrap_err();
    assert!(matches!(err, LoadError::EmptyPlural { ref name, .. } if name == "messages"));
    assert_snapshot!(err.to_string(), @"plural resource 'messages' for language 'en' has no forms");
    assert_eq!(table.len("en"), 0);
}

// =========================================================================
// Load Errors
// =========================================================================

#[test]
fn duplicate_names_are_rejected() {
    let mut table = ResourceTable::new();
    let err = table
        .load_str("en", r#"a = "x"; a = { other: "y" };"#)
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"duplicate resource 'a' for language 'en'");
}

#[test]
fn insert_rejects_existing_name() {
    let mut table = ResourceTable::new();
    table.insert_string("en", "a", "x").unwrap();
    assert!(matches!(
        table.insert_string("en", "a", "y"),
        Err(LoadError::DuplicateName { .. })
    ));
}

#[test]
fn unknown_plural_category_points_at_key() {
    let mut table = ResourceTable::new();
    let err = table
        .load_str("en", "ok = \"fine\";\nbad = { one: \"a\", sum: \"b\" };")
        .unwrap_err();
    let LoadError::Parse { line, column, .. } = err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!((line, column), (2, 19));
}

#[test]
fn duplicate_plural_category_is_rejected() {
    let result = parse_resources(r#"x = { one: "a", one: "b" };"#);
    assert!(result.is_err());
}

#[test]
fn empty_plural_block_is_rejected() {
    assert!(parse_resources("x = { };").is_err());
}

#[test]
fn missing_semicolon() {
    let err = parse_resources("a = \"x\"\nb = \"y\";").unwrap_err();
    assert_eq!(err.position(), (2, 1));
}

#[test]
fn unterminated_string() {
    let err = parse_resources(r#"a = "abc"#).unwrap_err();
    assert_eq!(err.position(), (1, 9));
}

#[test]
fn unknown_escape() {
    let err = parse_resources(r#"a = "\q";"#).unwrap_err();
    assert_eq!(err.position(), (1, 7));
}

#[test]
fn garbage_at_top_level() {
    let mut table = ResourceTable::new();
    let err = table.load_str("en", r#"123 = "x";"#).unwrap_err();
    assert_snapshot!(err.to_string(), @"<en>:1:1: unexpected character: '1'");
}

// =========================================================================
// File Loading and Reload
// =========================================================================

#[test]
fn load_file_reads_resources() {
    let mut table = ResourceTable::new();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"hello = "Hello from file!";"#).unwrap();

    assert_eq!(table.load_file("en", file.path()).unwrap(), 1);
    assert_eq!(lookup(&table, "hello").as_deref(), Some("Hello from file!"));
}

#[test]
fn load_file_not_found() {
    let mut table = ResourceTable::new();
    let err = table
        .load_file("en", "/nonexistent/path/strings.res")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn parse_errors_name_the_file() {
    let mut table = ResourceTable::new();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"broken = ;"#).unwrap();

    let err = table.load_file("en", file.path()).unwrap_err();
    let LoadError::Parse { path, line, .. } = err else {
        panic!("expected a parse error");
    };
    assert_eq!(path, file.path());
    assert_eq!(line, 1);
}

#[test]
fn reload_rereads_file() {
    let mut table = ResourceTable::new();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"hello = "Original";"#).unwrap();
    file.flush().unwrap();

    table.load_file("en", file.path()).unwrap();
    assert_eq!(lookup(&table, "hello").as_deref(), Some("Original"));

    file.rewind().unwrap();
    file.as_file_mut().set_len(0).unwrap();
    writeln!(file, r#"hello = "Modified";"#).unwrap();
    file.flush().unwrap();

    assert_eq!(table.reload("en").unwrap(), 1);
    assert_eq!(lookup(&table, "hello").as_deref(), Some("Modified"));
}

#[test]
fn reload_string_loaded_returns_error() {
    let mut table = ResourceTable::new();
    table.load_str("en", r#"hello = "Hello!";"#).unwrap();
    let err = table.reload("en").unwrap_err();
    assert_snapshot!(err.to_string(), @"cannot reload 'en': was loaded from string, not file");
}

#[test]
fn load_str_forgets_previous_file() {
    let mut table = ResourceTable::new();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"hello = "Hello";"#).unwrap();
    table.load_file("en", file.path()).unwrap();

    table.load_str("en", r#"hello = "Replaced";"#).unwrap();
    assert!(matches!(
        table.reload("en"),
        Err(LoadError::NoPathForReload { .. })
    ));
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn suggestions_find_close_names() {
    let mut table = ResourceTable::new();
    table
        .load_str(
            "en",
            r#"
            greeting = "Hi";
            greetings = "Hi all";
            farewell = "Bye";
            "#,
        )
        .unwrap();

    assert_eq!(table.suggestions("greting"), ["greeting", "greetings"]);
    assert!(table.suggestions("unrelated").is_empty());
    assert!(table.suggestions("greeting").contains(&"greetings".to_string()));
    assert!(table.contains("farewell"));
    assert!(!table.contains("farewel"));
}

#[test]
fn short_names_only_match_at_distance_one() {
    let mut table = ResourceTable::new();
    table
        .load_str("en", r#"ok = "OK"; no = "No"; yes = "Yes";"#)
        .unwrap();
    assert_eq!(table.suggestions("on"), ["ok"]);
    assert!(table.suggestions("ye").contains(&"yes".to_string()));
    assert!(table.suggestions("xx").is_empty());
}

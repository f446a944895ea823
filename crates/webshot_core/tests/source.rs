use pretty_assertions::assert_eq;
use webshot_core::parse_work_items;

#[test]
fn trims_lines_and_drops_blanks() {
    let raw = "  https://a.example/one \n\n\t\nhttps://b.example/two\n   \n";
    assert_eq!(
        parse_work_items(raw),
        vec![
            "https://a.example/one".to_string(),
            "https://b.example/two".to_string(),
        ]
    );
}

#[test]
fn preserves_line_order() {
    let raw = "c\na\nb";
    assert_eq!(parse_work_items(raw), vec!["c", "a", "b"]);
}

#[test]
fn empty_input_yields_no_items() {
    assert!(parse_work_items("").is_empty());
    assert!(parse_work_items("\n \n").is_empty());
}

//! Snapshot tests for undermark output.
//!
//! These tests capture the rendered HTML and compare it against inline
//! snapshots. Run with `cargo insta review` to update them.

use undermark::{markdown_to_html, Pipeline};

/// Helper to render a document through a streaming writer.
fn render(input: &str) -> String {
    let mut output = Vec::new();
    Pipeline::default().write_to(input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

// =============================================================================
// Heading Snapshots
// =============================================================================

#[test]
fn test_snapshot_heading_plain() {
    insta::assert_snapshot!(render("# Hello World"), @"<h1>Hello World</h1>");
}

#[test]
fn test_snapshot_heading_nested_strong() {
    let output = render("# Заголовок __с _разными_ символами__");
    insta::assert_snapshot!(output, @"<h1>Заголовок <strong>с <em>разными</em> символами</strong></h1>");
}

#[test]
fn test_snapshot_heading_strong_then_text() {
    let output = render("# __a__ и __b__ конец");
    insta::assert_snapshot!(output, @"<h1><strong>a</strong> и <strong>b</strong> конец</h1>");
}

// =============================================================================
// Paragraph Snapshots
// =============================================================================

#[test]
fn test_snapshot_paragraph_mixed() {
    let output = render("Внутри __двойного _одинарное_ тоже__ работает, а \\_это\\_ нет.");
    insta::assert_snapshot!(output, @"<p>Внутри <strong>двойного </strong><em>одинарное</em><strong> тоже</strong> работает, а _это_ нет.</p>");
}

#[test]
fn test_snapshot_paragraph_keeps_line_breaks() {
    let output = render("первая _строка_\nвторая __строка__");
    insta::assert_snapshot!(output, @r"
    <p>первая <em>строка</em>
    вторая <strong>строка</strong></p>
    ");
}

// =============================================================================
// Document Snapshots
// =============================================================================

#[test]
fn test_snapshot_document() {
    let input = r"# Заметки

Текст, _окруженный_ и __сильный__.

Цифры_12_3 и ра_зных сл_овах остаются как есть.

# Второй __раздел__";

    insta::assert_snapshot!(render(input), @r"
    <h1>Заметки</h1>
    <p>Текст, <em>окруженный</em> и <strong>сильный</strong>.</p>
    <p>Цифры_12_3 и ра_зных сл_овах остаются как есть.</p>
    <h1>Второй <strong>раздел</strong></h1>
    ");
}

#[test]
fn test_snapshot_streaming_matches_string_output() {
    let input = "# __a _b_ c__\n\n__a _b_ c__";
    assert_eq!(render(input), markdown_to_html(input));
    insta::assert_snapshot!(render(input), @r"
    <h1><strong>a <em>b</em> c</strong></h1>
    <p><strong>a </strong><em>b</em><strong> c</strong></p>
    ");
}

// =============================================================================
// Node Dump Snapshots
// =============================================================================

#[test]
fn test_snapshot_node_dump() {
    let blocks = Pipeline::default().parse("a _b_");
    let json = serde_json::to_string_pretty(&blocks).unwrap();
    insta::assert_snapshot!(json, @r#"
    [
      {
        "raw_text": "a _b_",
        "kind": "Paragraph",
        "inlines": [
          {
            "type": "Text",
            "text": "a "
          },
          {
            "type": "Emphasis",
            "text": "b"
          }
        ]
      }
    ]
    "#);
}

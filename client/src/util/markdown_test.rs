use super::*;

#[test]
fn renders_bold_and_lists() {
    let html = render_markdown_html("**RELIANCE** outlook\n\n- support 2400\n- resistance 2600");
    assert!(html.contains("<strong>RELIANCE</strong>"));
    assert!(html.contains("<li>support 2400</li>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hello"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

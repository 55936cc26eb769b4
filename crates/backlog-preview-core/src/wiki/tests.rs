use super::*;

const LINK_ATTRS: &str = "target=\"_blank\" rel=\"noopener noreferrer\" class=\"loom-link-another\"";

#[test]
fn empty_input_renders_empty() {
    assert_eq!(render(""), "");
}

#[test]
fn plain_lines_end_with_break() {
    assert_eq!(render("hello\nworld"), "hello<br>world<br>");
    assert_eq!(render("a\r\nb"), "a<br>b<br>");
}

#[test]
fn markup_is_escaped() {
    assert_eq!(
        render("<script>\"x\" & `y`</script>"),
        "&lt;script&gt;&quot;x&quot; &amp; &#x60;y&#x60;&lt;/script&gt;<br>"
    );
    assert!(matches!(escape_html("nothing to do"), Cow::Borrowed(_)));
}

#[test]
fn table_rows_and_header_cells() {
    assert_eq!(
        render("|\n||aaa|bbb|h\n|ccc||~ddd|"),
        "|<br><table><tbody><tr><th></th><th>aaa</th><th>bbb</th></tr><tr><td>ccc</td><td></td><th>ddd</th></tr></tbody></table>"
    );
}

#[test]
fn table_cells_get_inline_formatting() {
    assert_eq!(
        render("|''a''|b|"),
        "<table><tbody><tr><td><b>a</b></td><td>b</td></tr></tbody></table>"
    );
}

#[test]
fn ordered_list() {
    assert_eq!(render("+ aaa"), "<ol><li> aaa</li></ol>");
}

#[test]
fn nested_ordered_list_closes_every_level() {
    assert_eq!(render("+a\n++b"), "<ol><li>a<ol><li>b</li></ol></li></ol>");
}

#[test]
fn unordered_list_siblings() {
    assert_eq!(render("-a\n-b"), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn unordered_list_nesting_up_and_down() {
    assert_eq!(
        render("-a\n--b\n-c"),
        "<ul><li>a<ul><li>b</li></ul><li>c</li></ul>"
    );
}

#[test]
fn list_closes_before_plain_line() {
    assert_eq!(render("-a\nb"), "<ul><li>a</li></ul>b<br>");
}

#[test]
fn heading_levels() {
    assert_eq!(render("*** これは見出しです。"), "<h3>これは見出しです。</h3>");
    assert_eq!(render("* Top"), "<h1>Top</h1>");
    // No space after the marker: not a heading.
    assert_eq!(render("*Top"), "*Top<br>");
}

#[test]
fn italic_and_bold() {
    assert_eq!(render("これは'''イタリック'''です。"), "これは<i>イタリック</i>です。<br>");
    assert_eq!(render("これは''ボールド''です。"), "これは<b>ボールド</b>です。<br>");
}

#[test]
fn strike_through() {
    assert_eq!(render("%%gone%%"), "<strike>gone</strike><br>");
}

#[test]
fn color_foreground_and_background() {
    assert_eq!(
        render("&color(red) { hi }"),
        "<span style=\"color: red;\">hi</span><br>"
    );
    assert_eq!(
        render("&color(red, #ffffff) { hi }"),
        "<span style=\"color: red;background-color: #ffffff;\">hi</span><br>"
    );
}

#[test]
fn explicit_line_break() {
    assert_eq!(render("a&br;b"), "a<br>b<br>");
}

#[test]
fn quote_lines() {
    assert_eq!(render("> hi\n> there"), "<blockquote> hi<br> there<br></blockquote>");
}

#[test]
fn quote_block() {
    assert_eq!(
        render("\n{quote}\naaa\n{/quote}\n"),
        "<br><br><blockquote>aaa<br></blockquote><br>"
    );
}

#[test]
fn labelled_and_bare_links() {
    let labelled = render("[[Google>https://google.com]]");
    assert_eq!(labelled, render("[[Google:https://google.com]]"));
    assert_eq!(
        labelled,
        format!("<a href=\"https://google.com\" {LINK_ATTRS}>Google</a><br>")
    );
    assert_eq!(
        render("https://google.com"),
        format!("<a href=\"https://google.com\" {LINK_ATTRS}>https://google.com</a><br>")
    );
}

#[test]
fn inline_code() {
    assert_eq!(
        render("aaa{code}bbb{/code}ccc"),
        "aaa<code class=\"prettyprint prettyprinted\" style><span class=\"typ\">bbb</span></code>ccc<br>"
    );
}

#[test]
fn code_block() {
    assert_eq!(
        render("aaa\n{code}\nhoge\nfuga\n{/code}\n"),
        "aaa<pre class=\"loom_code loom_code_cs\">hoge\nfuga</pre><br>"
    );
}

#[test]
fn code_block_is_not_formatted() {
    assert_eq!(
        render("{code}\n''x''\n- item\n{/code}"),
        "<pre class=\"loom_code loom_code_cs\">&#x27;&#x27;x&#x27;&#x27;\n- item</pre><br>"
    );
}

#[test]
fn literal_placeholder_does_not_swallow_code_block() {
    assert_eq!(
        render("\u{E000}\n{code}\nx\n{/code}"),
        "&#xE000;<pre class=\"loom_code loom_code_cs\">x</pre><br>"
    );
}

#[test]
fn mixed_document() {
    insta::assert_snapshot!(
        render("* Notes\n-one\n-two\nplain ''bold''"),
        @"<h1>Notes</h1><ul><li>one</li><li>two</li></ul>plain <b>bold</b><br>"
    );
}

#[test]
fn port_is_total_and_ready() {
    let ready = pollster::block_on(crate::transform::initialize(WikiTransform)).unwrap();
    assert_eq!(ready.transform("").unwrap(), "");
    assert_eq!(ready.transform("**bold**").unwrap(), render("**bold**"));
}

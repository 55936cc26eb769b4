//! Line-level constructs: tables, lists, quotes, headings.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{code\}(.*?)\{/code\}").unwrap());
static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|(.*)\|h?$").unwrap());
static LIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(-+)(.+)").unwrap());
static ORDERED_LIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\++)(.+)").unwrap());
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\*{1,6})\s(.*)").unwrap());
// Source is already escaped, so the quote marker arrives as `&gt;`.
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^&gt;(.*)").unwrap());
static QUOTE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|>)\{quote\}<br>(.*?)>\{/quote\}<br>").unwrap());

pub(super) fn compile_patterns() {
    for re in [
        &INLINE_CODE_RE,
        &TABLE_RE,
        &LIST_RE,
        &ORDERED_LIST_RE,
        &HEADING_RE,
        &QUOTE_RE,
        &QUOTE_BLOCK_RE,
    ] {
        LazyLock::force(re);
    }
}

/// What kind of block a single source line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Plain,
    Table,
    /// Unordered list item at the given nesting depth.
    List(usize),
    OrderedList(usize),
    Quote,
    Heading,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        if TABLE_RE.is_match(line) {
            LineKind::Table
        } else if let Some(caps) = LIST_RE.captures(line) {
            LineKind::List(caps[1].len())
        } else if let Some(caps) = ORDERED_LIST_RE.captures(line) {
            LineKind::OrderedList(caps[1].len())
        } else if QUOTE_RE.is_match(line) {
            LineKind::Quote
        } else if HEADING_RE.is_match(line) {
            LineKind::Heading
        } else {
            LineKind::Plain
        }
    }
}

/// Tags for one flavour of list.
struct ListTags {
    open: &'static str,
    close: &'static str,
}

const UNORDERED: ListTags = ListTags {
    open: "<ul><li>",
    close: "</li></ul>",
};

const ORDERED: ListTags = ListTags {
    open: "<ol><li>",
    close: "</li></ol>",
};

pub(super) fn render_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut previous = LineKind::Plain;

    for line in text.lines() {
        let line = INLINE_CODE_RE.replace_all(
            line,
            "<code class=\"prettyprint prettyprinted\" style><span class=\"typ\">$1</span></code>",
        );
        let current = LineKind::classify(&line);

        if previous != current {
            close_block(&mut out, previous, Some(current));
        }

        match current {
            LineKind::Table => {
                if previous != LineKind::Table {
                    out.push_str("<table><tbody>");
                }
                push_table_row(&mut out, &line);
            }
            LineKind::List(level) => {
                let previous_level = match previous {
                    LineKind::List(p) => Some(p),
                    _ => None,
                };
                open_list_item(&mut out, &UNORDERED, previous_level, level);
                out.push_str(&LIST_RE.replace(&line, "$2"));
            }
            LineKind::OrderedList(level) => {
                let previous_level = match previous {
                    LineKind::OrderedList(p) => Some(p),
                    _ => None,
                };
                open_list_item(&mut out, &ORDERED, previous_level, level);
                out.push_str(&ORDERED_LIST_RE.replace(&line, "$2"));
            }
            LineKind::Quote => {
                if previous != LineKind::Quote {
                    out.push_str("<blockquote>");
                }
                out.push_str(&QUOTE_RE.replace(&line, "$1<br>"));
            }
            LineKind::Heading => {
                out.push_str(&HEADING_RE.replace(&line, |caps: &Captures| {
                    let level = caps[1].len();
                    format!("<h{level}>{}</h{level}>", &caps[2])
                }));
            }
            LineKind::Plain => {
                out.push_str(&line);
                out.push_str("<br>");
            }
        }

        previous = current;
    }

    close_block(&mut out, previous, None);

    QUOTE_BLOCK_RE
        .replace_all(&out, |caps: &Captures| {
            let lead = if &caps[1] == ">" { ">" } else { "" };
            format!("{lead}<br><blockquote>{}></blockquote><br>", &caps[2])
        })
        .into_owned()
}

/// Close whatever `previous` left open before a line of kind `next` (or the
/// end of input when `next` is `None`).
fn close_block(out: &mut String, previous: LineKind, next: Option<LineKind>) {
    match previous {
        LineKind::Table => out.push_str("</tbody></table>"),
        LineKind::List(previous_level) => {
            let keep = match next {
                Some(LineKind::List(level)) => level.min(previous_level),
                _ => 0,
            };
            out.push_str(&UNORDERED.close.repeat(previous_level - keep));
        }
        LineKind::OrderedList(previous_level) => {
            let keep = match next {
                Some(LineKind::OrderedList(level)) => level.min(previous_level),
                _ => 0,
            };
            out.push_str(&ORDERED.close.repeat(previous_level - keep));
        }
        LineKind::Quote => out.push_str("</blockquote>"),
        LineKind::Plain | LineKind::Heading => {}
    }
}

fn open_list_item(out: &mut String, tags: &ListTags, previous_level: Option<usize>, level: usize) {
    let Some(previous_level) = previous_level else {
        out.push_str(tags.open);
        return;
    };
    match level.cmp(&previous_level) {
        Ordering::Greater => out.push_str(&tags.open.repeat(level - previous_level)),
        Ordering::Equal => out.push_str("</li><li>"),
        Ordering::Less => out.push_str("<li>"),
    }
}

/// `|a|b|` row. A trailing `h` makes every cell a header; otherwise a `~`
/// prefix makes a single cell a header.
fn push_table_row(out: &mut String, line: &str) {
    let Some(cells) = TABLE_RE.captures(line).and_then(|caps| caps.get(1)) else {
        return;
    };
    let header_row = line.ends_with('h');
    out.push_str("<tr>");
    for cell in cells.as_str().split('|') {
        if header_row {
            out.push_str("<th>");
            out.push_str(cell);
            out.push_str("</th>");
        } else if let Some(cell) = cell.strip_prefix('~') {
            out.push_str("<th>");
            out.push_str(cell);
            out.push_str("</th>");
        } else {
            out.push_str("<td>");
            out.push_str(cell);
            out.push_str("</td>");
        }
    }
    out.push_str("</tr>");
}

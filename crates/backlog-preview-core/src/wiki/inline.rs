//! Inline constructs, applied to the markup produced by the block pass.
//!
//! Quotes and ampersands have already been escaped, so the patterns match
//! their entity forms.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(&#x27;){3}(.*?)(&#x27;){3}").unwrap());
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(&#x27;){2}(.*?)(&#x27;){2}").unwrap());
static STRIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%%(.*?)%%").unwrap());
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&amp;color\(\s*(.*?)\s*\)\s*\{\s*(.*?)\s*\}").unwrap()
});
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\[\[([^\[\]]+?)(?:&gt;|:))?(https?://[\w!\?/\+\-_~=;\.,\*&@#\$%\(\)']+)(?:\]\])?",
    )
    .unwrap()
});

pub(super) fn compile_patterns() {
    for re in [&ITALIC_RE, &BOLD_RE, &STRIKE_RE, &COLOR_RE, &LINK_RE] {
        LazyLock::force(re);
    }
}

pub(super) fn render_inline(html: &str) -> String {
    // Italic first: `'''` would otherwise be eaten as bold plus a stray quote.
    let html = ITALIC_RE.replace_all(html, "<i>$2</i>");
    let html = BOLD_RE.replace_all(&html, "<b>$2</b>");
    let html = STRIKE_RE.replace_all(&html, "<strike>$1</strike>");
    let html = COLOR_RE.replace_all(&html, |caps: &Captures| {
        format!(
            "<span style=\"{}\">{}</span>",
            color_style(&caps[1]),
            &caps[2]
        )
    });
    let html = LINK_RE.replace_all(&html, |caps: &Captures| {
        let url = &caps[2];
        let label = caps.get(1).map_or(url, |m| m.as_str());
        format!(
            "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"loom-link-another\">{label}</a>"
        )
    });
    html.replace("&amp;br;", "<br>")
}

/// `&color(fg)` or `&color(fg, bg)`.
fn color_style(spec: &str) -> String {
    let mut parts = spec.split(',');
    match (parts.next(), parts.next()) {
        (Some(fg), Some(bg)) => {
            format!("color: {};background-color: {};", fg.trim(), bg.trim())
        }
        _ => format!("color: {spec};"),
    }
}

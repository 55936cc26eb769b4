//! Backlog wiki notation to HTML.
//!
//! Rendering runs in four passes over the escaped source:
//!
//! 1. fenced `{code}` blocks are cut out and replaced by a placeholder
//! 2. `block` classifies each line and emits table/list/quote/heading markup
//! 3. `inline` rewrites emphasis, colors and links inside the emitted markup
//! 4. the stashed code blocks are put back
//!
//! The output mirrors the markup Backlog itself produces (`loom` classes), so
//! the host page's stylesheet applies to the preview unchanged.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::TransformError;
use crate::transform::{Transform, TransformPort};

mod block;
mod inline;

#[cfg(test)]
mod tests;

static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|(?:\n|\r\n|\r))\{code\}(?:\n|\r\n|\r)((?:.|\n|\r\n|\r)*?)(?:\n|\r\n|\r)\{/code\}(?:(?:\n|\r\n|\r)|$)").unwrap()
});

/// Stands in for a stashed code block. A private-use code point, so no block
/// or inline pattern can match it or glue it onto a neighbouring URL.
const CODE_PLACEHOLDER: &str = "\u{E000}";

/// The built-in transformation port.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiTransform;

impl Transform for WikiTransform {
    fn transform(&self, text: &str) -> Result<String, TransformError> {
        Ok(render(text))
    }
}

impl TransformPort for WikiTransform {
    async fn ready(&self) -> Result<(), TransformError> {
        LazyLock::force(&CODE_BLOCK_RE);
        block::compile_patterns();
        inline::compile_patterns();
        Ok(())
    }
}

/// Render Backlog wiki notation to HTML. Never fails.
pub fn render(text: &str) -> String {
    let escaped = escape_html(text);

    let mut code_blocks = VecDeque::new();
    let text = CODE_BLOCK_RE.replace_all(&escaped, |caps: &Captures| {
        code_blocks.push_back(format!(
            "<pre class=\"loom_code loom_code_cs\">{}</pre>",
            &caps[1]
        ));
        CODE_PLACEHOLDER
    });

    let html = block::render_blocks(&text);
    let html = inline::render_inline(&html);

    restore_code_blocks(&html, code_blocks)
}

fn restore_code_blocks(html: &str, mut code_blocks: VecDeque<String>) -> String {
    if code_blocks.is_empty() {
        return html.to_string();
    }
    let mut out = String::with_capacity(html.len());
    for piece in html.split(CODE_PLACEHOLDER) {
        out.push_str(piece);
        if let Some(code) = code_blocks.pop_front() {
            out.push_str(&code);
        }
    }
    out
}

/// Escape the characters that are significant in HTML text and attributes.
///
/// The code block placeholder is escaped too, so it only ever appears where
/// `render` put it.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>', '&', '"', '\'', '`', '\u{E000}']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            '\u{E000}' => out.push_str("&#xE000;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

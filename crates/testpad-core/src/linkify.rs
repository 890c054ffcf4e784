//! Inline link rendering
//!
//! Turns plain text into [`Segment`]s. Two passes, left to right:
//! 1. markdown links `[label](http(s)://...)`
//! 2. bare `http(s)://` tokens, up to the next whitespace, in the text left
//!    between markdown links
//!
//! Only absolute http(s) targets become links. Concatenating the
//! [`Segment::source_text`] of the output reproduces the input exactly.
//! Trailing punctuation after a bare URL stays part of the URL.

use crate::types::Segment;

/// Regex patterns for link detection (compiled once)
mod patterns {
    use std::sync::LazyLock;

    pub static MARKDOWN_LINK: LazyLock<regex::Regex> = LazyLock::new(|| {
        regex::Regex::new(r"\[([^\[\]]+)\]\((https?://[^\s()]+)\)").unwrap()
    });

    pub static BARE_URL: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"https?://\S+").unwrap());
}

/// Split single-line text into text and link segments
///
/// Newlines are treated like any other character; use
/// [`linkify_multiline`] when they should become [`Segment::Break`]s.
pub fn linkify_text(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in patterns::MARKDOWN_LINK.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        push_bare_urls(&text[last..whole.start()], &mut segments);
        segments.push(Segment::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
            source: whole.as_str().to_string(),
        });
        last = whole.end();
    }
    push_bare_urls(&text[last..], &mut segments);

    segments
}

/// Split text line by line, with a [`Segment::Break`] between lines
pub fn linkify_multiline(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            segments.push(Segment::Break);
        }
        segments.extend(linkify_text(line));
    }
    segments
}

/// Concatenate the input text covered by `segments`
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::source_text).collect()
}

/// Second pass: bare URLs inside text that held no markdown link
fn push_bare_urls(text: &str, segments: &mut Vec<Segment>) {
    let mut last = 0;
    for m in patterns::BARE_URL.find_iter(text) {
        push_text(&text[last..m.start()], segments);
        segments.push(Segment::Link {
            label: m.as_str().to_string(),
            url: m.as_str().to_string(),
            source: m.as_str().to_string(),
        });
        last = m.end();
    }
    push_text(&text[last..], segments);
}

fn push_text(text: &str, segments: &mut Vec<Segment>) {
    if !text.is_empty() {
        segments.push(Segment::text(text));
    }
}

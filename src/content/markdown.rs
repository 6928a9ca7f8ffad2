//! Markdown scanning: heading outline and word count.
//!
//! Only what the query layer needs is extracted; turning markdown into HTML
//! is left to the site's renderer.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Heading, Rendered};
use crate::utils::slug::Slugger;

/// ATX heading: up to 3 spaces, 1-6 `#`, whitespace, text, optional closing `#`s.
static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(#{1,6})[ \t]+(.*?)(?:[ \t]+#+)?[ \t]*$").expect("valid heading regex")
});

/// Inline link or image: `[text](url)` / `![alt](src)`.
static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[([^\]]*)\]\([^)]*\)").expect("valid link regex"));

/// Setext underline: a run of `=` or `-` after up to 3 spaces.
static SETEXT_UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(=+|-+)[ \t]*$").expect("valid underline regex"));

/// Block markers that never start a paragraph.
static BLOCK_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-*+][ \t]|\d{1,9}[.)][ \t]|[>|<])").expect("valid block regex")
});

/// Any HTML tag.
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Build the heading outline of a markdown body.
pub fn render(body: &str) -> Rendered {
    Rendered {
        headings: extract_headings(body),
    }
}

/// Collect ATX and setext headings outside fenced code blocks, in document order.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    let mut slugger = Slugger::new();
    let mut fence: Option<(char, usize)> = None;
    // Lines of the paragraph a setext underline would turn into a heading
    let mut paragraph: Vec<&str> = Vec::new();
    let mut headings = Vec::new();

    let mut push = |depth: u8, raw: &str, headings: &mut Vec<Heading>| {
        let text = plain_text(raw);
        if !text.is_empty() {
            headings.push(Heading {
                depth,
                slug: slugger.slug(&text),
                text,
            });
        }
    };

    for line in body.lines() {
        if let Some(marker) = fence_marker(line) {
            fence = match fence {
                None => Some(marker),
                // A fence closes only with the same char and at least the same length
                Some((ch, len)) if marker.0 == ch && marker.1 >= len => None,
                open => open,
            };
            paragraph.clear();
            continue;
        }
        if fence.is_some() {
            continue;
        }

        if !paragraph.is_empty()
            && let Some(depth) = setext_depth(line)
        {
            push(depth, paragraph.join(" ").as_str(), &mut headings);
            paragraph.clear();
            continue;
        }

        if let Some(caps) = ATX_HEADING.captures(line) {
            push(caps[1].len() as u8, &caps[2], &mut headings);
            paragraph.clear();
            continue;
        }

        if line.trim().is_empty() || is_block_start(line) {
            paragraph.clear();
        } else if !paragraph.is_empty() || !is_indented_code(line) {
            paragraph.push(line.trim());
        }
    }

    headings
}

/// Depth of a setext underline: `===` is 1, `---` is 2.
fn setext_depth(line: &str) -> Option<u8> {
    SETEXT_UNDERLINE.captures(line).map(|caps| match &caps[1][..1] {
        "=" => 1,
        _ => 2,
    })
}

/// Lines that end a paragraph: list items, quotes, HTML, tables and
/// underline-like rules.
fn is_block_start(line: &str) -> bool {
    BLOCK_START.is_match(line.trim_start_matches(' ')) || setext_depth(line).is_some()
}

/// 4+ leading spaces outside a paragraph.
fn is_indented_code(line: &str) -> bool {
    line.len() - line.trim_start_matches(' ').len() > 3
}

/// Estimate the number of words in a body, ignoring HTML tags.
pub fn word_count(body: &str) -> usize {
    HTML_TAG.replace_all(body, " ").split_whitespace().count()
}

/// Opening/closing code fence: 3+ backticks or tildes after up to 3 spaces.
fn fence_marker(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    (len >= 3).then_some((ch, len))
}

/// Strip inline markup from heading text.
fn plain_text(raw: &str) -> String {
    let text = INLINE_LINK.replace_all(raw, "$1");
    let text = HTML_TAG.replace_all(&text, "");
    text.chars()
        .filter(|c| !matches!(c, '`' | '*' | '_'))
        .collect::<String>()
        .trim()
        .to_owned()
}

//! `+++` delimited TOML front matter.

/// Front matter delimiter line.
const DELIMITER: &str = "+++";

/// Split a content file into `(front_matter, body)`.
///
/// The file must open with a `+++` line (an optional UTF-8 BOM is allowed)
/// and the block ends at the next line consisting of `+++`. Returns `None`
/// when either delimiter is missing.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = line_spans(content);
    let (_, first) = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }
    let front_start = first.len();

    for (offset, line) in lines {
        if line.trim_end() == DELIMITER {
            let front = &content[front_start..offset];
            let body = &content[offset + line.len()..];
            return Some((front, body));
        }
    }
    None
}

/// Lines with their byte offsets, line terminators included.
fn line_spans(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

/// Next `---` rule or a heading at level 1 or 2.
pub static SECTION_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n(?:---|#{1,2} )").unwrap());

static LABEL_BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?):\*\*").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// A `## TITLE` heading with its primary and fallback search patterns.
pub struct Heading {
    pub title: &'static str,
    primary: Regex,
    fallback: Regex,
}

impl Heading {
    /// Matches a line that is exactly `## TITLE`.
    pub fn new(title: &'static str) -> Self {
        Self::build(title, r"[ \t]*$")
    }

    /// Matches any line that starts with `## TITLE`, e.g. `## TITLE (etapas)`.
    pub fn prefix(title: &'static str) -> Self {
        Self::build(title, r"[^\n]*")
    }

    fn build(title: &'static str, line_tail: &str) -> Self {
        let first_word = title.split_whitespace().next().unwrap_or(title);
        Heading {
            title,
            primary: Regex::new(&format!(r"(?m)^##[ \t]+{}{}", regex::escape(title), line_tail)).unwrap(),
            fallback: Regex::new(&format!(
                r"(?m)^---[ \t]*\n[ \t]*\n(##[ \t]+{}[^\n]*)",
                regex::escape(first_word)
            ))
            .unwrap(),
        }
    }
}

/// Where a heading line sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    /// Offset of the `##` that opens the heading line.
    pub start: usize,
    /// Offset just past the heading text (the line's `\n`, or end of text).
    pub body_start: usize,
}

/// Find a heading; falls back to the first `## WORD…` heading that follows a
/// `---` rule and a blank line.
pub fn locate(doc: &str, heading: &Heading) -> Option<Located> {
    if let Some(m) = heading.primary.find(doc) {
        debug!(section = heading.title, offset = m.start(), "heading found");
        return Some(Located {
            start: m.start(),
            body_start: m.end(),
        });
    }

    let m = heading.fallback.captures(doc)?.get(1)?;
    let line = m.as_str().trim_end();
    if line.trim_start_matches('#').trim() != heading.title {
        warn!(section = heading.title, matched = line, "heading matched by fallback search");
    }
    Some(Located {
        start: m.start(),
        body_start: m.end(),
    })
}

/// Find an inline `**Label:**` marker that ends its line.
pub fn locate_label(doc: &str, label: &Regex) -> Option<Located> {
    let m = label.find(doc)?;
    Some(Located {
        start: m.start(),
        body_start: m.end(),
    })
}

/// Text between `from` and the first `boundary` match, trimmed. A region that
/// never reaches a boundary counts as missing.
pub fn capture_until<'a>(doc: &'a str, from: usize, boundary: &Regex) -> Option<&'a str> {
    let rest = doc.get(from..)?;
    let end = boundary.find(rest)?.start();
    Some(rest[..end].trim())
}

/// Heading body up to the next rule or heading.
pub fn section_body<'a>(doc: &'a str, heading: &Heading) -> Option<&'a str> {
    let at = locate(doc, heading)?;
    capture_until(doc, at.body_start, &SECTION_END)
}

/// Remove `**` pairs, keeping the wrapped text.
pub fn strip_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "$1").into_owned()
}

/// Two passes: `**label:**` becomes `label:`, then any `**text**` becomes `text`.
pub fn strip_emphasis(text: &str) -> String {
    let labels = LABEL_BOLD_RE.replace_all(text, "$1:");
    BOLD_RE.replace_all(&labels, "$1").into_owned()
}

// ── Tests ──

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

// [text](url), optionally an image link ![alt](src). Does not cross lines.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[(.*?)\]\((.*?)\)").unwrap());

/// Placeholder that stands in for a link removed from the text.
pub const ELLIPSIS: &str = "...";

/// The first markdown link of a text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    pub text: &'a str,
    pub url: &'a str,
    /// Written as `![..](..)`.
    pub image: bool,
    /// Byte range of the whole link, `!` included.
    pub span: Range<usize>,
}

/// Find the first `[text](url)` in `text`.
pub fn find_link(text: &str) -> Option<Link<'_>> {
    let caps = LINK_RE.captures(text)?;
    let whole = caps.get(0)?;
    Some(Link {
        image: caps.get(1).is_some_and(|m| !m.is_empty()),
        text: caps.get(2).map_or("", |m| m.as_str()),
        url: caps.get(3).map_or("", |m| m.as_str()),
        span: whole.range(),
    })
}

/// Extract the first link of `text`.
///
/// Returns `(text, url, link_text)`. With `replace`, the link is swapped for
/// `...` in the returned text; otherwise the text comes back as is. Without a
/// link, url and link text are empty.
pub fn extract_link(text: &str, replace: bool) -> (String, String, String) {
    let Some(link) = find_link(text) else {
        return (text.to_string(), String::new(), String::new());
    };

    let out = if replace {
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..link.span.start]);
        out.push_str(ELLIPSIS);
        out.push_str(&text[link.span.end..]);
        out
    } else {
        text.to_string()
    };

    (out, link.url.to_string(), link.text.to_string())
}

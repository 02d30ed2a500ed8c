//! Line scanner that separates front matter from the body.

use tracing::debug;

use super::types::{Entry, FrontMatter};

const DELIMITER: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Outside,
    InFrontMatter,
    Done,
}

/// Split `text` into its front matter and the remaining body.
///
/// The first line must be exactly `---`; the block ends at the next line that
/// is exactly `---`. The body starts right after the closing delimiter line.
/// Without an opening delimiter on the first line, or without a closing one,
/// the result is an empty [`FrontMatter`] and `text` unchanged.
pub fn extract_front_matter(text: &str) -> (FrontMatter, &str) {
    let mut state = Scan::Outside;
    let mut front_matter = FrontMatter::default();
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        offset += line.len();
        state = match (state, is_delimiter(line)) {
            (Scan::Outside, true) => Scan::InFrontMatter,
            (Scan::InFrontMatter, true) => Scan::Done,
            (Scan::InFrontMatter, false) => {
                match parse_entry(line) {
                    Some(entry) => front_matter.entries.push(entry),
                    None => debug!(line = line.trim_end(), "ignoring front matter line"),
                }
                Scan::InFrontMatter
            }
            (Scan::Outside, false) | (Scan::Done, _) => break,
        };
        if state == Scan::Done {
            break;
        }
    }

    if state == Scan::Done {
        (front_matter, &text[offset..])
    } else {
        if state == Scan::InFrontMatter {
            debug!("front matter is never closed, treating document as plain body");
        }
        (FrontMatter::default(), text)
    }
}

/// True for a line consisting solely of `---` (line ending aside).
pub(crate) fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches('\n').trim_end_matches('\r') == DELIMITER
}

/// Parse a `key: value` line. Keys must be a single word, values non-empty.
fn parse_entry(line: &str) -> Option<Entry> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some(Entry { key: key.to_string(), value: value.to_string() })
}

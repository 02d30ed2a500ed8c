const OPEN: &str = "<!--";
const CLOSE: &str = "-->";

/// Remove `<!-- ... -->` comments, delimiters included.
///
/// Each opener is closed by the nearest following `-->`, across lines. A
/// region holding another `<!--` before that closer is nested and kept as it
/// is; scanning resumes after its closer. An unterminated opener keeps the
/// rest of the text. Stray `-->` markers are plain text.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(open) = text[pos..].find(OPEN).map(|i| pos + i) {
        let body = open + OPEN.len();
        let Some(close) = text[body..].find(CLOSE).map(|i| body + i) else {
            break;
        };
        let end = close + CLOSE.len();
        if !text[body..close].contains(OPEN) {
            out.push_str(&text[copied..open]);
            copied = end;
        }
        pos = end;
    }

    out.push_str(&text[copied..]);
    out
}

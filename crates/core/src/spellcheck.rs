//! Front-matter-aware spell-check pass.
//!
//! The checking itself belongs to an external grammar service behind
//! [`Corrector`]. This module decides which lines it gets to see: prose only,
//! never the front matter block or lines that start with a link.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

use crate::frontmatter::parser::is_delimiter;

static LINK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!?\[.*\]\(.*\)").unwrap());

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("file {0} does not exist")]
    NotFound(String),

    #[error("failed to read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    Write(String, #[source] std::io::Error),

    #[error("checker failed on line {line}: {message}")]
    Corrector { line: usize, message: String },
}

/// Something that returns a corrected version of a line of prose.
pub trait Corrector {
    /// Correct one line. Errors are reported as plain messages; the pass
    /// attaches the line number.
    fn correct(&self, line: &str) -> Result<String, String>;
}

/// What a line of a post is, as far as checking goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Delimiter,
    FrontMatter,
    Link,
    Blank,
    Prose,
}

impl LineKind {
    pub fn is_checked(self) -> bool {
        self == LineKind::Prose
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Outside,
    InFrontMatter,
    Done,
}

/// Classify the lines of `text` (split on `\n`).
///
/// Only a leading `---` block is front matter; later `---` lines are
/// thematic breaks and count as prose.
pub fn classify_lines(text: &str) -> Vec<LineKind> {
    let mut state = Scan::Outside;
    text.split('\n')
        .map(|line| {
            let delimiter = is_delimiter(line);
            let (next, kind) = match (state, delimiter) {
                (Scan::Outside, true) => (Scan::InFrontMatter, LineKind::Delimiter),
                (Scan::InFrontMatter, true) => (Scan::Done, LineKind::Delimiter),
                (Scan::InFrontMatter, false) => (Scan::InFrontMatter, LineKind::FrontMatter),
                (Scan::Outside | Scan::Done, _) => (Scan::Done, body_kind(line)),
            };
            state = next;
            kind
        })
        .collect()
}

fn body_kind(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if LINK_LINE_RE.is_match(line) {
        LineKind::Link
    } else {
        LineKind::Prose
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based.
    pub line: usize,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub text: String,
    pub checked: usize,
    pub changes: Vec<LineChange>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Run `corrector` over the prose lines of `text`.
pub fn check_document(
    text: &str,
    corrector: &dyn Corrector,
) -> Result<CheckReport, CheckError> {
    let kinds = classify_lines(text);
    let mut report = CheckReport::default();
    let mut lines = Vec::with_capacity(kinds.len());

    for (idx, (line, kind)) in text.split('\n').zip(kinds).enumerate() {
        if !kind.is_checked() {
            lines.push(line.to_string());
            continue;
        }
        report.checked += 1;
        let corrected = corrector
            .correct(line)
            .map_err(|message| CheckError::Corrector { line: idx + 1, message })?;
        if corrected != line {
            debug!(line = idx + 1, "line corrected");
            report.changes.push(LineChange {
                line: idx + 1,
                before: line.to_string(),
                after: corrected.clone(),
            });
        }
        lines.push(corrected);
    }

    report.text = lines.join("\n");
    Ok(report)
}

/// Check a post on disk, writing corrections back unless `dry_run`.
pub fn check_file(
    path: &Path,
    corrector: &dyn Corrector,
    dry_run: bool,
) -> Result<CheckReport, CheckError> {
    if !path.exists() {
        return Err(CheckError::NotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path)
        .map_err(|e| CheckError::Read(path.display().to_string(), e))?;

    let report = check_document(&text, corrector)?;
    if !dry_run && !report.is_clean() {
        fs::write(path, &report.text)
            .map_err(|e| CheckError::Write(path.display().to_string(), e))?;
        info!(path = %path.display(), changes = report.changes.len(), "corrections written");
    }
    Ok(report)
}

/// Literal find-and-replace rules, applied in order.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionCorrector {
    rules: Vec<(String, String)>,
}

impl SubstitutionCorrector {
    pub fn new(rules: Vec<(String, String)>) -> Self {
        Self { rules }
    }

    /// Rules for a language profile plus extra ones. Swiss Standard German
    /// has no `ß`.
    pub fn for_language(language: &str, extra: &[(String, String)]) -> Self {
        let mut rules = Vec::new();
        if language.eq_ignore_ascii_case("de-CH") {
            rules.push(("ß".to_string(), "ss".to_string()));
        }
        rules.extend(extra.iter().cloned());
        Self { rules }
    }

    pub fn rules(&self) -> &[(String, String)] {
        &self.rules
    }
}

impl Corrector for SubstitutionCorrector {
    fn correct(&self, line: &str) -> Result<String, String> {
        Ok(self.rules.iter().fold(line.to_string(), |acc, (from, to)| {
            if from.is_empty() { acc } else { acc.replace(from.as_str(), to) }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Corrector for Upper {
        fn correct(&self, line: &str) -> Result<String, String> {
            Ok(line.to_uppercase())
        }
    }

    struct Broken;

    impl Corrector for Broken {
        fn correct(&self, _line: &str) -> Result<String, String> {
            Err("service unavailable".into())
        }
    }

    const POST: &str = "---\ntitle: Strasse\n---\nDie Straße.\n\n[Karte](http://x)\n---\nMehr.";

    #[test]
    fn classifies_front_matter_links_and_breaks() {
        use LineKind::*;
        assert_eq!(classify_lines(POST), vec![
            Delimiter,
            FrontMatter,
            Delimiter,
            Prose,
            Blank,
            Link,
            Prose,
            Prose
        ]);
    }

    #[test]
    fn text_without_front_matter_is_all_body() {
        use LineKind::*;
        assert_eq!(classify_lines("a\n---\nb"), vec![Prose, Prose, Prose]);
    }

    #[test]
    fn only_prose_reaches_the_corrector() {
        let report = check_document(POST, &Upper).unwrap();
        assert_eq!(
            report.text,
            "---\ntitle: Strasse\n---\nDIE STRASSE.\n\n[Karte](http://x)\n---\nMEHR."
        );
        assert_eq!(report.checked, 3);
        assert_eq!(report.changes.len(), 2);
        assert_eq!(report.changes[0].line, 4);
    }

    #[test]
    fn corrector_error_carries_line_number() {
        match check_document(POST, &Broken) {
            Err(CheckError::Corrector { line: 4, message }) => {
                assert_eq!(message, "service unavailable");
            }
            other => panic!("expected Corrector error, got {other:?}"),
        }
    }

    #[test]
    fn swiss_rules_replace_eszett() {
        let c = SubstitutionCorrector::for_language("de-CH", &[]);
        assert_eq!(c.correct("Grüße aus der Straße").unwrap(), "Grüsse aus der Strasse");
        let de = SubstitutionCorrector::for_language("de-DE", &[]);
        assert!(de.rules().is_empty());
    }

    #[test]
    fn check_file_writes_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("post.md");
        fs::write(&path, POST).unwrap();
        let c = SubstitutionCorrector::for_language("de-CH", &[]);

        let dry = check_file(&path, &c, true).unwrap();
        assert_eq!(dry.changes.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), POST);

        check_file(&path, &c, false).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Die Strasse."));
    }
}

//! A blog post split into front matter and paragraphs.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{ContentError, split_paragraphs, strip_comments};
use crate::frontmatter::{FrontMatter, extract_front_matter};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub front_matter: FrontMatter,
    /// Body paragraphs in source order, empty ones included.
    pub paragraphs: Vec<String>,
}

impl Post {
    /// Split raw markdown: front matter first, then comments, then paragraphs.
    pub fn parse(raw: &str) -> Self {
        let (front_matter, body) = extract_front_matter(raw);
        let body = strip_comments(body);
        let paragraphs = split_paragraphs(&body);
        debug!(
            entries = front_matter.len(),
            paragraphs = paragraphs.len(),
            "split post"
        );
        Self { front_matter, paragraphs }
    }

    /// Read `path` fully and parse it.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        if !path.exists() {
            return Err(ContentError::NotFound(path.display().to_string()));
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| ContentError::Read(path.display().to_string(), e))?;
        Ok(Self::parse(&raw))
    }

    pub fn title(&self) -> &str {
        self.front_matter.title()
    }

    pub fn thumbnail(&self) -> &str {
        self.front_matter.thumbnail()
    }

    pub fn paragraph(&self, index: usize) -> Result<&str, ContentError> {
        self.paragraphs.get(index).map(String::as_str).ok_or(
            ContentError::ParagraphOutOfRange { index, len: self.paragraphs.len() },
        )
    }

    /// Paragraphs with surrounding whitespace removed, blank ones dropped.
    pub fn meaningful_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.paragraphs.iter().map(|p| p.trim()).filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_without_front_matter() {
        let post = Post::parse("One.\n\nTwo.");
        assert!(post.front_matter.is_empty());
        assert_eq!(post.title(), "");
        assert_eq!(post.thumbnail(), "");
        assert_eq!(post.paragraphs, ["One.", "Two."]);
    }

    #[test]
    fn comments_are_removed_before_splitting() {
        let post = Post::parse("---\ntitle: X\n---\nA<!-- note -->.\n\nB\n\n<!--more-->");
        assert_eq!(post.paragraphs, ["A.", "B", ""]);
    }

    #[test]
    fn nested_comment_does_not_keep_excerpt_separator() {
        let post = Post::parse(
            "---\ntitle: T\n---\nLead <!-- todo <!-- x -->.\n\nBody.\n\n<!--more-->\n",
        );
        assert_eq!(post.paragraphs, ["Lead <!-- todo <!-- x -->.", "Body.", "\n"]);
        let kept: Vec<_> = post.meaningful_paragraphs().collect();
        assert_eq!(kept, ["Lead <!-- todo <!-- x -->.", "Body."]);
    }

    #[test]
    fn paragraph_out_of_range_is_an_error() {
        let post = Post::parse("only one");
        assert_eq!(post.paragraph(0).unwrap(), "only one");
        match post.paragraph(1) {
            Err(ContentError::ParagraphOutOfRange { index: 1, len: 1 }) => {}
            other => panic!("expected ParagraphOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn meaningful_paragraphs_skip_blanks() {
        let post = Post::parse("\nLead.\n\n\n\nRest.\n");
        let kept: Vec<_> = post.meaningful_paragraphs().collect();
        assert_eq!(kept, ["Lead.", "Rest."]);
    }

    #[test]
    fn load_missing_file() {
        let err = Post::load(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }
}

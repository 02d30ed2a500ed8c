//! Composing a Mastodon post from a blog post.
//!
//! The lead paragraph is posted with its link swapped for `...`, followed by
//! the link target on its own and the rest of the post. Sending it is left
//! to whatever client the caller uses.

use tracing::warn;

use crate::content::{ContentError, Post, extract_link};

pub const DEFAULT_ALT_TEXT: &str =
    "Ausschnitt aus Swisstopo, der den Flurnamen {title} zeigt.";
pub const DEFAULT_MAX_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub struct TootOptions {
    /// Alt text for the thumbnail, `{title}` is replaced by the post title.
    pub alt_text: String,
    /// Character limit of the instance.
    pub max_chars: usize,
}

impl Default for TootOptions {
    fn default() -> Self {
        Self { alt_text: DEFAULT_ALT_TEXT.to_string(), max_chars: DEFAULT_MAX_CHARS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toot {
    /// Lead paragraph, link replaced.
    pub lead: String,
    /// Target of the lead's link, empty if it has none.
    pub url: String,
    /// Remaining paragraphs joined by blank lines.
    pub rest: String,
    /// The full text to post.
    pub text: String,
    pub thumbnail: String,
    pub alt_text: String,
}

impl Toot {
    pub fn compose(post: &Post, opts: &TootOptions) -> Result<Self, ContentError> {
        let paragraphs: Vec<&str> = post.meaningful_paragraphs().collect();
        let Some((lead, rest)) = paragraphs.split_first().filter(|(_, r)| !r.is_empty())
        else {
            return Err(ContentError::TooFewParagraphs { found: paragraphs.len() });
        };

        let (lead, url, _) = extract_link(lead, true);
        let rest = rest.join("\n\n");

        let text = if url.is_empty() {
            format!("{lead}\n\n{rest}")
        } else {
            format!("{lead}\n\n{url}\n\n{rest}")
        };

        let title = post.title();
        let alt_text = if title.is_empty() {
            String::new()
        } else {
            opts.alt_text.replace("{title}", title)
        };

        let toot = Self {
            lead,
            url,
            rest,
            text,
            thumbnail: post.thumbnail().to_string(),
            alt_text,
        };

        let len = toot.char_count();
        if len > opts.max_chars {
            warn!(len, max = opts.max_chars, "post is longer than the instance allows");
        }
        Ok(toot)
    }

    /// Length in characters, which is what the instance limit counts.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

//! Markdown content splitting.
//!
//! A post is taken apart in four steps, each usable on its own:
//! front matter ([`extract_front_matter`]), HTML comments ([`strip_comments`]),
//! paragraphs ([`split_paragraphs`]) and the first markdown link of a block
//! ([`extract_link`]). [`Post`] runs them in that order.
//!
//! These are plain string scans, not a markdown parser.

pub mod comments;
pub mod links;
pub mod paragraphs;
pub mod post;

use thiserror::Error;

pub use crate::frontmatter::extract_front_matter;
pub use comments::strip_comments;
pub use links::{Link, extract_link, find_link};
pub use paragraphs::split_paragraphs;
pub use post::Post;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("file {0} does not exist")]
    NotFound(String),

    #[error("failed to read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("paragraph {index} requested, but the post has {len}")]
    ParagraphOutOfRange { index: usize, len: usize },

    #[error("post needs a lead and at least one more paragraph, found {found}")]
    TooFewParagraphs { found: usize },
}

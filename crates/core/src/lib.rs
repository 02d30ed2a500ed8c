#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod config;
pub mod content;
pub mod frontmatter;
pub mod spellcheck;
pub mod stub;
pub mod toot;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

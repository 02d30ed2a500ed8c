//! Front matter extraction.
//!
//! Posts start with a block of `key: value` lines fenced by `---`:
//! ```markdown
//! ---
//! title: "Chräjeloch"
//! thumbnail: images/chräjeloch.png
//! ---
//! ```

pub mod parser;
pub mod types;

pub use parser::extract_front_matter;
pub use types::{Entry, FrontMatter};

//! JSON shapes for `--json` output.

use flurnamen_core::content::Post;
use flurnamen_core::toot::Toot;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PostOutput<'a> {
    pub title: &'a str,
    pub thumbnail: &'a str,
    pub front_matter: Vec<(&'a str, &'a str)>,
    pub paragraphs: &'a [String],
}

impl<'a> From<&'a Post> for PostOutput<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            title: post.title(),
            thumbnail: post.thumbnail(),
            front_matter: post
                .front_matter
                .entries
                .iter()
                .map(|e| (e.key.as_str(), e.value.as_str()))
                .collect(),
            paragraphs: &post.paragraphs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TootOutput<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub url: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub thumbnail: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub alt_text: &'a str,
    pub chars: usize,
    pub max_chars: usize,
}

impl<'a> TootOutput<'a> {
    pub fn new(toot: &'a Toot, max_chars: usize) -> Self {
        Self {
            text: &toot.text,
            url: &toot.url,
            thumbnail: &toot.thumbnail,
            alt_text: &toot.alt_text,
            chars: toot.char_count(),
            max_chars,
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

//! Post stubs: a dated skeleton post to be filled in later.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_URL: &str = "https://draeckgaden.ch";

#[derive(Debug, Error)]
pub enum StubError {
    #[error("flurname must not be empty")]
    EmptyFlurname,

    #[error("flurname '{0}' must not contain path separators")]
    InvalidFlurname(String),

    #[error("post already exists at {0}")]
    AlreadyExists(String),

    #[error("failed to create folder {0}: {1}")]
    CreateDir(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    Write(String, #[source] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct Stub {
    pub flurname: String,
    pub url: String,
    pub date: NaiveDate,
}

impl Stub {
    pub fn new(
        flurname: impl Into<String>,
        url: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, StubError> {
        let flurname = flurname.into().trim().to_string();
        if flurname.is_empty() {
            return Err(StubError::EmptyFlurname);
        }
        if flurname.contains(['/', '\\']) || flurname == ".." {
            return Err(StubError::InvalidFlurname(flurname));
        }
        Ok(Self { flurname, url: url.into(), date })
    }

    /// `YYYY-MM-DD-<flurname>.md`, the Jekyll post naming scheme.
    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.date.format("%Y-%m-%d"), self.flurname)
    }

    pub fn render(&self) -> String {
        let name = &self.flurname;
        let image = name.to_lowercase();
        let url = &self.url;
        format!(
            "---\n\
             title: \"{name}\"\n\
             layout: post\n\
             thumbnail: images/{image}.png\n\
             excerpt_separator: <!--more-->\n\
             ---\n\
             \n\
             Lorem Ipsum [{name}]({url}).\n\
             \n\
             Bla Ba\n\
             \n\
             <!--more-->\n"
        )
    }

    /// Write the stub into `posts_dir`, creating it if needed.
    pub fn write(&self, posts_dir: &Path, overwrite: bool) -> Result<PathBuf, StubError> {
        fs::create_dir_all(posts_dir)
            .map_err(|e| StubError::CreateDir(posts_dir.display().to_string(), e))?;

        let path = posts_dir.join(self.file_name());
        if path.exists() && !overwrite {
            return Err(StubError::AlreadyExists(path.display().to_string()));
        }

        fs::write(&path, self.render())
            .map_err(|e| StubError::Write(path.display().to_string(), e))?;
        info!(path = %path.display(), "stub written");
        Ok(path)
    }
}

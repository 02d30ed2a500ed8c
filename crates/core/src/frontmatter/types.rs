//! Front matter types.

/// A single `key: value` line from a front matter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Front matter of a post, kept in source order.
///
/// Values are stored verbatim (trimmed, quotes included) so the block can be
/// written back unchanged with [`FrontMatter::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub entries: Vec<Entry>,
}

impl FrontMatter {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Value of the first entry with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.value.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Entry { key: key.into(), value: value.into() });
    }

    /// Post title, verbatim.
    pub fn title(&self) -> &str {
        self.get("title").unwrap_or_default()
    }

    /// Thumbnail path: the first whitespace-delimited token of the value.
    pub fn thumbnail(&self) -> &str {
        self.get("thumbnail")
            .and_then(|v| v.split_whitespace().next())
            .unwrap_or_default()
    }

    /// Write the block back out, delimiters included.
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        for e in &self.entries {
            out.push_str(&e.key);
            out.push_str(": ");
            out.push_str(&e.value);
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }
}

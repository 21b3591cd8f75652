//! Raw article persistence
//!
//! Files are named `{date}_{title}_{hash}.html` from scraped text, so both parts
//! are sanitized first. Sanitizing is lossy, so the short URL hash keeps distinct
//! articles in distinct files. When either field is missing, or nothing usable
//! survives sanitization, the name is the URL hash alone.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Longest file stem kept from scraped text (bytes)
const MAX_STEM_BYTES: usize = 150;

/// Hex digits of the URL hash appended to text-derived stems
const SUFFIX_HEX_LEN: usize = 8;

/// Directory receiving one HTML file per fetched article
#[derive(Debug, Clone)]
pub struct ArticleStore {
    dir: PathBuf,
}

impl ArticleStore {
    /// Opens the store, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an article would be written to
    pub fn path_for(&self, url: &str, date: Option<&str>, title: Option<&str>) -> PathBuf {
        self.dir.join(format!("{}.html", file_stem(url, date, title)))
    }

    /// Writes `body` verbatim and returns the file path
    ///
    /// Saving the same URL again overwrites its earlier file.
    pub fn save(
        &self,
        url: &str,
        date: Option<&str>,
        title: Option<&str>,
        body: &str,
    ) -> std::io::Result<PathBuf> {
        let path = self.path_for(url, date, title);
        std::fs::write(&path, body)?;
        Ok(path)
    }
}

/// Deterministic, filesystem-safe stem for an article
fn file_stem(url: &str, date: Option<&str>, title: Option<&str>) -> String {
    let digest = hex::encode(Sha256::digest(url.as_bytes()));

    if let (Some(date), Some(title)) = (date, title) {
        let date = sanitize_component(date);
        let title = sanitize_component(title);
        if !date.is_empty() && !title.is_empty() {
            let readable = truncate(format!("{}_{}", date, title), MAX_STEM_BYTES);
            return format!("{}_{}", readable, &digest[..SUFFIX_HEX_LEN]);
        }
    }

    format!("article_{}", &digest[..16])
}

/// Replaces path-unsafe characters with `_` and collapses runs of them
///
/// Letters (accented included), digits, `-` and `.` are kept. Leading and
/// trailing separators and dots are stripped so the result can never be `.`,
/// `..` or a hidden file.
///
/// # Examples
///
/// ```
/// use news_frontier::article::sanitize_component;
///
/// assert_eq!(sanitize_component("05/08/2024"), "05_08_2024");
/// assert_eq!(sanitize_component("¿Qué pasó? | El Financiero"), "Qué_pasó_El_Financiero");
/// assert_eq!(sanitize_component("../.."), "");
/// ```
pub fn sanitize_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_sep = false;

    for c in raw.chars() {
        if c.is_alphanumeric() || c == '-' || c == '.' {
            out.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }

    out.trim_matches(|c| c == '_' || c == '.').to_string()
}

fn truncate(mut s: String, max_bytes: usize) -> String {
    if s.len() > max_bytes {
        let mut end = max_bytes;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}

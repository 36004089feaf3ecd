use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A single link entry from the catalog source.
///
/// `url` and `icon` are tolerated as absent upstream and default to empty;
/// the remaining fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub url: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub icon: String,
}

/// Errors while obtaining the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: HTTP {0}")]
    Status(u16),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// User-facing rendering for the in-app notice.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Status(code) => {
                format!("Failed to load links: server returned HTTP {}", code)
            }
            CatalogError::Http(e) => format!("Failed to load links: {}", e),
            CatalogError::Parse(e) => format!("Catalog is not valid JSON: {}", e),
            CatalogError::Io(e) => format!("Could not read catalog file: {}", e),
        }
    }
}

/// The loaded entry collection, immutable after startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The fetch-failure fallback.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Distinct categories in first-seen order, with the synthetic "all"
    /// prepended. Computed from the full collection so the control stays
    /// stable while filters change.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![crate::filter::ALL_CATEGORY.to_string()];
        for entry in &self.entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories
    }

    /// Distinct tags across all entries in first-seen order.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        for entry in &self.entries {
            for tag in &entry.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }

    /// Parse a catalog from raw JSON bytes (an array of entries).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let entries: Vec<Entry> = serde_json::from_slice(bytes)?;
        Ok(Self::new(entries))
    }

    /// Load a catalog from a local JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// Fetch the catalog from a remote URL, streaming the body with a
    /// progress bar on stderr. Runs once at startup, before the TUI.
    pub async fn fetch(url: &str) -> Result<Self, CatalogError> {
        let response = reqwest::get(url).await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let pb = match response.content_length() {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{spinner:.green} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("#>-"),
                );
                pb
            }
            None => ProgressBar::new_spinner(),
        };

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            body.extend_from_slice(&chunk);
            pb.set_position(body.len() as u64);
        }
        pb.finish_and_clear();

        Self::from_slice(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "title": "Chess",
            "description": "Play chess online",
            "url": "https://chess.example",
            "category": "games",
            "tags": ["board", "strategy"],
            "icon": "♟"
        },
        {
            "title": "Paint Tool",
            "description": "Draw and sketch",
            "url": "https://paint.example",
            "category": "design",
            "tags": ["art"],
            "icon": "🎨"
        },
        {
            "title": "Go",
            "description": "Ancient board game",
            "url": "https://go.example",
            "category": "games",
            "tags": ["board"],
            "icon": "⚫"
        }
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().title, "Chess");
        assert_eq!(catalog.get(1).unwrap().tags, vec!["art"]);
    }

    #[test]
    fn test_categories_are_first_seen_distinct_with_all() {
        let catalog = Catalog::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.categories(), vec!["all", "games", "design"]);
    }

    #[test]
    fn test_tags_are_first_seen_distinct() {
        let catalog = Catalog::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.tags(), vec!["board", "strategy", "art"]);
    }

    #[test]
    fn test_missing_url_and_icon_default_to_empty() {
        let json = r#"[{
            "title": "Bare",
            "description": "No url or icon",
            "category": "tools",
            "tags": []
        }]"#;
        let catalog = Catalog::from_slice(json.as_bytes()).unwrap();
        let entry = catalog.get(0).unwrap();
        assert_eq!(entry.url, "");
        assert_eq!(entry.icon, "");
    }

    #[test]
    fn test_missing_required_field_fails_parse() {
        let json = r#"[{"title": "Broken", "category": "tools", "tags": []}]"#;
        assert!(matches!(
            Catalog::from_slice(json.as_bytes()),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Catalog::from_slice(b"not json").unwrap_err();
        assert!(err.user_message().contains("not valid JSON"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(err.user_message().contains("Could not read catalog file"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), vec!["all"]);
        assert!(catalog.tags().is_empty());
    }
}

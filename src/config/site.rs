//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::feed::SiteMetadata;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Outputs
    pub feed_path: String,
    pub search_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            content_dir: "src/content".to_string(),
            public_dir: "public".to_string(),

            feed_path: "atom.xml".to_string(),
            search_path: "search.json".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Title and description used for the feed channel
    pub fn site_metadata(&self) -> SiteMetadata {
        SiteMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            language: Some(self.language.clone()).filter(|l| !l.is_empty()),
        }
    }
}

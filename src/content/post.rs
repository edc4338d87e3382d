//! Post models

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::Serialize;

use super::slug::PostSlug;
use crate::error::Result;

/// Front-matter metadata of a post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostData {
    /// Post title
    pub title: String,

    /// Short summary used in listings and feeds
    pub description: String,

    /// Publication date
    pub date: DateTime<FixedOffset>,

    /// Post tags, in authored order
    pub tags: Vec<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl PostData {
    pub fn new(title: impl Into<String>, date: DateTime<FixedOffset>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date,
            tags: Vec::new(),
            extra: IndexMap::new(),
        }
    }
}

/// A post as supplied by the content store, before slug derivation
#[derive(Debug, Clone, PartialEq)]
pub struct RawPost {
    /// File name within the collection, e.g. `2023-01-01-hello.md`
    pub id: String,
    pub data: PostData,
}

/// A blog post with its canonical slug
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: String,
    pub slug: PostSlug,
    pub data: PostData,
}

impl Post {
    /// Derive the slug from the raw post's id
    pub fn from_raw(raw: RawPost) -> Result<Self> {
        let slug = PostSlug::parse(&raw.id)?;
        Ok(Self {
            id: raw.id,
            slug,
            data: raw.data,
        })
    }

    /// Site-relative link, `/YYYY/MM/text/`
    pub fn link(&self) -> String {
        self.slug.link()
    }
}

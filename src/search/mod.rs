//! Tag index for the search page, and the query filter it is browsed with
//!
//! The search page lists every tag with the posts carrying it. A query string
//! of `?tag=<name>` or `?category=<name>` narrows the listing to one entry;
//! no term, or both at once, shows everything.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::content::{slugify_tag, Post};
use crate::error::Result;
use crate::helpers::{date_xml, decode_component};

/// Minimal reference to a post in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRef {
    pub title: String,
    pub link: String,
    pub date: String,
}

impl From<&Post> for PostRef {
    fn from(post: &Post) -> Self {
        Self {
            title: post.data.title.clone(),
            link: post.link(),
            date: date_xml(&post.data.date),
        }
    }
}

/// One tag and the posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    /// Tag as first authored
    pub name: String,
    pub posts: Vec<PostRef>,
}

/// Posts grouped by tag slug
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagIndex {
    tags: BTreeMap<String, TagEntry>,
}

impl TagIndex {
    /// Group posts by slugified tag, keeping the order posts are given in.
    /// Tags that differ only in case or punctuation share one entry.
    pub fn build(posts: &[Post]) -> Self {
        let mut tags: BTreeMap<String, TagEntry> = BTreeMap::new();

        for post in posts {
            for tag in &post.data.tags {
                let key = slugify_tag(tag);
                if key.is_empty() {
                    tracing::warn!("Ignoring empty tag on post {}", post.id);
                    continue;
                }
                let entry = tags.entry(key).or_insert_with(|| TagEntry {
                    name: tag.clone(),
                    posts: Vec::new(),
                });
                // A post listing the same tag twice appears once
                if entry.posts.last().map(|p| p.link != post.link()).unwrap_or(true) {
                    entry.posts.push(PostRef::from(post));
                }
            }
        }

        Self { tags }
    }

    pub fn get(&self, tag: &str) -> Option<&TagEntry> {
        self.tags.get(&slugify_tag(tag))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate entries in slug order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagEntry)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries visible for a query
    pub fn filter(&self, query: &SearchQuery) -> Vec<&TagEntry> {
        match query.term() {
            Some(SearchTerm::Tag(name)) | Some(SearchTerm::Category(name)) => {
                self.get(name).into_iter().collect()
            }
            None => self.tags.values().collect(),
        }
    }

    /// Serialize the index to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write `search.json`, creating parent directories as needed
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        tracing::info!("Generated {:?} ({} tags)", path, self.len());
        Ok(())
    }
}

/// The single filter term of a search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm<'a> {
    Tag(&'a str),
    Category(&'a str),
}

/// Parsed `tag` and `category` parameters of a search page URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub tag: Option<String>,
    pub category: Option<String>,
}

impl SearchQuery {
    /// Parse a query string, with or without its leading `?`. Unknown keys
    /// are ignored; a repeated key keeps its last value.
    pub fn parse(query: &str) -> Self {
        let mut parsed = SearchQuery::default();

        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match decode_component(key).as_str() {
                "tag" => parsed.tag = Some(decode_component(value)),
                "category" => parsed.category = Some(decode_component(value)),
                _ => {}
            }
        }

        parsed
    }

    /// The active filter, if exactly one term was given
    pub fn term(&self) -> Option<SearchTerm<'_>> {
        match (&self.tag, &self.category) {
            (Some(tag), None) => Some(SearchTerm::Tag(tag)),
            (None, Some(category)) => Some(SearchTerm::Category(category)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PostData, RawPost};
    use chrono::{FixedOffset, TimeZone};

    fn post(id: &str, day: u32, tags: &[&str]) -> Post {
        let date = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2022, 3, day, 0, 0, 0)
            .unwrap();
        let mut data = PostData::new(id, date);
        data.tags = tags.iter().map(|t| t.to_string()).collect();
        Post::from_raw(RawPost {
            id: id.to_string(),
            data,
        })
        .unwrap()
    }

    fn posts() -> Vec<Post> {
        vec![
            post("2022-03-01-one.md", 1, &["Rust", "CLI"]),
            post("2022-03-02-two.md", 2, &["rust"]),
            post("2022-03-03-three.md", 3, &["Physics", "physics"]),
        ]
    }

    #[test]
    fn test_build_groups_by_slug() {
        let index = TagIndex::build(&posts());
        assert_eq!(index.len(), 3);

        let rust = index.get("Rust").unwrap();
        assert_eq!(rust.name, "Rust");
        let links: Vec<&str> = rust.posts.iter().map(|p| p.link.as_str()).collect();
        assert_eq!(links, vec!["/2022/03/one/", "/2022/03/two/"]);

        let physics = index.get("physics").unwrap();
        assert_eq!(physics.posts.len(), 1);

        let keys: Vec<&str> = index.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["cli", "physics", "rust"]);
    }

    #[test]
    fn test_parse_query() {
        let q = SearchQuery::parse("?tag=machine%20learning");
        assert_eq!(q.tag.as_deref(), Some("machine learning"));
        assert_eq!(q.term(), Some(SearchTerm::Tag("machine learning")));

        let q = SearchQuery::parse("category=Physics&utm=x");
        assert_eq!(q.term(), Some(SearchTerm::Category("Physics")));

        let q = SearchQuery::parse("tag=c++");
        assert_eq!(q.term(), Some(SearchTerm::Tag("c++")));

        assert_eq!(SearchQuery::parse("").term(), None);
        assert_eq!(SearchQuery::parse("tag=a&category=b").term(), None);
    }

    #[test]
    fn test_filter() {
        let index = TagIndex::build(&posts());

        let all = index.filter(&SearchQuery::default());
        assert_eq!(all.len(), 3);

        let both = index.filter(&SearchQuery::parse("tag=rust&category=cli"));
        assert_eq!(both.len(), 3);

        let rust = index.filter(&SearchQuery::parse("tag=rust"));
        assert_eq!(rust.len(), 1);
        assert_eq!(rust[0].posts.len(), 2);

        assert!(index.filter(&SearchQuery::parse("tag=haskell")).is_empty());
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.json");
        TagIndex::build(&posts()).write_to(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["cli"]["name"], "CLI");
        assert_eq!(value["cli"]["posts"][0]["link"], "/2022/03/one/");
        assert_eq!(value["cli"]["posts"][0]["date"], "2022-03-01T00:00:00+00:00");
    }
}

//! Slug derivation from date-prefixed post file names

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

lazy_static! {
    static ref POST_ID: Regex =
        Regex::new(r"^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})-(?P<slug>.+)\.mdx?$")
            .expect("post id pattern is valid");
}

/// Canonical URL path segment of a post, `YYYY/MM/text`
///
/// The day in the file name is matched but not kept; month and day ranges
/// are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostSlug {
    pub year: String,
    pub month: String,
    pub text: String,
}

impl PostSlug {
    /// Parse a post id such as `2023-01-01-hello.md`
    pub fn parse(id: &str) -> Result<Self> {
        let caps = POST_ID.captures(id).ok_or_else(|| Error::MalformedPostId {
            id: id.to_string(),
        })?;
        Ok(Self {
            year: caps["year"].to_string(),
            month: caps["month"].to_string(),
            text: caps["slug"].to_string(),
        })
    }

    /// Site-relative link, `/YYYY/MM/text/`
    pub fn link(&self) -> String {
        format!("/{}/", self)
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.text)
    }
}

/// Lower-case URL slug for a tag
pub fn slugify_tag(tag: &str) -> String {
    ::slug::slugify(tag)
}

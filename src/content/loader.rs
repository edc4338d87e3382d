//! Post loader - fetches the blog collection, derives slugs and orders by date

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::store::{CollectionKind, ContentStore};
use super::Post;
use crate::error::{Error, Result};

/// Direction to order posts by publication date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrdering {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}

impl DateOrdering {
    fn compare(self, left: &Post, right: &Post) -> Ordering {
        match self {
            DateOrdering::Asc => left.data.date.cmp(&right.data.date),
            DateOrdering::Desc => right.data.date.cmp(&left.data.date),
        }
    }
}

impl FromStr for DateOrdering {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "asc" => Ok(DateOrdering::Asc),
            "desc" => Ok(DateOrdering::Desc),
            other => Err(format!("unknown ordering `{}`, expected asc or desc", other)),
        }
    }
}

impl fmt::Display for DateOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrdering::Asc => f.write_str("asc"),
            DateOrdering::Desc => f.write_str("desc"),
        }
    }
}

/// Load every blog post with its slug, sorted by date.
///
/// One malformed post id aborts the whole load. The sort is stable, so posts
/// sharing a timestamp keep the order the store returned them in, whichever
/// direction is requested.
pub async fn get_posts<S: ContentStore>(store: &S, ordering: DateOrdering) -> Result<Vec<Post>> {
    let raw = store
        .collection(CollectionKind::Blog)
        .await
        .map_err(Error::Store)?;

    let mut posts = raw
        .into_iter()
        .map(Post::from_raw)
        .collect::<Result<Vec<_>>>()?;

    posts.sort_by(|a, b| ordering.compare(a, b));

    tracing::debug!("Loaded {} posts ({})", posts.len(), ordering);
    Ok(posts)
}

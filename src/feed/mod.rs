//! RSS 2.0 feed built from the date-ordered post list

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use rss::validation::Validate;
use rss::{CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, ItemBuilder};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::{get_posts, ContentStore, DateOrdering, Post};
use crate::error::{Error, Result};
use crate::helpers::{date_rfc2822, full_url_for};

/// Fixed channel metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub language: Option<String>,
}

/// Per-build context; `site` is the base URL links are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedContext {
    pub site: String,
}

/// A post projected for syndication
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub date: DateTime<FixedOffset>,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
    pub pub_date: DateTime<FixedOffset>,
    /// Site-relative, `/YYYY/MM/text/`
    pub link: String,
}

impl From<&Post> for FeedItem {
    fn from(post: &Post) -> Self {
        let data = post.data.clone();
        Self {
            pub_date: data.date,
            link: post.link(),
            title: data.title,
            description: data.description,
            date: data.date,
            tags: data.tags,
            extra: data.extra,
        }
    }
}

/// A built feed, ready to be serialized
#[derive(Debug, Clone)]
pub struct FeedDocument {
    channel: Channel,
}

impl FeedDocument {
    /// Build and validate the channel from items already in feed order
    pub fn build(metadata: &SiteMetadata, context: &FeedContext, items: &[FeedItem]) -> Result<Self> {
        let entries: Vec<rss::Item> = items
            .iter()
            .map(|item| {
                let link = full_url_for(&context.site, &item.link);
                let categories = item
                    .tags
                    .iter()
                    .map(|tag| CategoryBuilder::default().name(tag.clone()).build())
                    .collect::<Vec<_>>();

                ItemBuilder::default()
                    .title(Some(item.title.clone()))
                    .link(Some(link.clone()))
                    .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
                    .description(Some(item.description.clone()).filter(|d| !d.is_empty()))
                    .pub_date(Some(date_rfc2822(&item.pub_date)))
                    .categories(categories)
                    .build()
            })
            .collect();

        let channel = ChannelBuilder::default()
            .title(metadata.title.clone())
            .link(full_url_for(&context.site, "/"))
            .description(metadata.description.clone())
            .language(metadata.language.clone())
            .generator(Some(format!("dateline {}", env!("CARGO_PKG_VERSION"))))
            .items(entries)
            .build();

        channel
            .validate()
            .map_err(|e| Error::Feed(e.to_string()))?;

        Ok(Self { channel })
    }

    /// The underlying RSS channel
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Number of entries in the feed
    pub fn len(&self) -> usize {
        self.channel.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.items().is_empty()
    }

    /// Serialize to an XML string
    pub fn to_xml(&self) -> String {
        self.channel.to_string()
    }

    /// Write the XML document, creating parent directories as needed
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_xml())?;
        tracing::info!("Generated {:?} ({} entries)", path, self.len());
        Ok(())
    }
}

/// Load posts oldest first and build the feed from them.
///
/// Loader and validation failures propagate unchanged.
pub async fn build_feed<S: ContentStore>(
    store: &S,
    metadata: &SiteMetadata,
    context: &FeedContext,
) -> Result<FeedDocument> {
    let posts = get_posts(store, DateOrdering::Asc).await?;
    let items: Vec<FeedItem> = posts.iter().map(FeedItem::from).collect();
    FeedDocument::build(metadata, context, &items)
}

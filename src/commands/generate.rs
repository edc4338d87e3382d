//! Generate the feed and search index

use anyhow::{Context, Result};

use crate::content::{get_posts, DateOrdering};
use crate::feed::{build_feed, FeedContext};
use crate::search::TagIndex;
use crate::Site;

/// Generate every output
pub async fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    feed(site).await?;
    search(site).await?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());
    Ok(())
}

/// Write the RSS feed to `<public_dir>/<feed_path>`
pub async fn feed(site: &Site) -> Result<()> {
    let context = FeedContext {
        site: site.config.url.clone(),
    };
    let document = build_feed(&site.store(), &site.config.site_metadata(), &context)
        .await
        .context("failed to build feed")?;

    let output_path = site.public_dir.join(&site.config.feed_path);
    document.write_to(&output_path)?;
    Ok(())
}

/// Write the tag index to `<public_dir>/<search_path>`
pub async fn search(site: &Site) -> Result<()> {
    let posts = get_posts(&site.store(), DateOrdering::Desc)
        .await
        .context("failed to load posts for search index")?;

    let index = TagIndex::build(&posts);
    let output_path = site.public_dir.join(&site.config.search_path);
    index.write_to(&output_path)?;
    Ok(())
}

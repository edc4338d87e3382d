//! List site content

use anyhow::Result;

use crate::content::{get_posts, DateOrdering};
use crate::helpers::short_date;
use crate::search::TagIndex;
use crate::Site;

/// Print posts in the requested order
pub async fn posts(site: &Site, ordering: DateOrdering) -> Result<()> {
    let posts = get_posts(&site.store(), ordering).await?;
    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}]",
            short_date(&post.data.date),
            post.data.title,
            post.link()
        );
    }
    Ok(())
}

/// Print tags with their post counts, most used first
pub async fn tags(site: &Site) -> Result<()> {
    let posts = get_posts(&site.store(), DateOrdering::Asc).await?;
    let index = TagIndex::build(&posts);

    let mut tags: Vec<_> = index
        .iter()
        .map(|(slug, entry)| (slug, entry.name.as_str(), entry.posts.len()))
        .collect();
    tags.sort_by(|a, b| b.2.cmp(&a.2));

    println!("Tags ({}):", tags.len());
    for (slug, name, count) in tags {
        println!("  {} ({}) [{}]", name, count, slug);
    }
    Ok(())
}

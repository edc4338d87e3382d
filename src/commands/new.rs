//! Create a new post

use anyhow::{bail, Result};
use chrono::{DateTime, FixedOffset};
use std::fs;
use std::path::PathBuf;

use crate::content::{CollectionKind, PostSlug};
use crate::Site;

/// Create `<content_dir>/blog/YYYY-MM-DD-<slug>.md` with front-matter filled in
pub fn create_post(
    site: &Site,
    title: &str,
    date: DateTime<FixedOffset>,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let slug = slug
        .map(slug::slugify)
        .unwrap_or_else(|| slug::slugify(title));
    if slug.is_empty() {
        bail!("cannot derive a slug from title {:?}", title);
    }

    let filename = format!("{}-{}.md", date.format("%Y-%m-%d"), slug);
    // Whatever we write must load back
    PostSlug::parse(&filename)?;

    let target_dir = site.content_dir.join(CollectionKind::Blog.dir_name());
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(&filename);
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndescription: ''\ndate: {}\ntags: []\n---\n\n",
        serde_yaml::to_string(title)?.trim_end(),
        date.format("%Y-%m-%dT%H:%M:%S%:z"),
    );
    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);
    Ok(file_path)
}

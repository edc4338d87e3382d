//! Content store - supplies raw post records by collection kind

use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, PostData, RawPost};

/// Kinds of content a store can be queried for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Blog,
}

impl CollectionKind {
    /// Directory name of the collection below the content root
    pub fn dir_name(self) -> &'static str {
        match self {
            CollectionKind::Blog => "blog",
        }
    }
}

/// Read-only source of posts. Records come back in no particular order.
#[allow(async_fn_in_trait)]
pub trait ContentStore {
    async fn collection(&self, kind: CollectionKind) -> Result<Vec<RawPost>>;
}

/// Loads collections from `<content_dir>/<kind>/*.{md,mdx}`
pub struct FsContentStore {
    content_dir: PathBuf,
}

impl FsContentStore {
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    async fn load_entry(&self, path: &Path) -> Result<RawPost> {
        let id = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("file name is not valid UTF-8"))?
            .to_string();

        let content = tokio::fs::read_to_string(path).await?;
        let (fm, _body) = FrontMatter::parse(&content)?;

        let raw_date = fm.date.clone().ok_or_else(|| anyhow!("missing `date`"))?;
        let date = fm
            .parse_date()
            .ok_or_else(|| anyhow!("unrecognised date `{}`", raw_date))?;
        let title = fm.title.ok_or_else(|| anyhow!("missing `title`"))?;

        Ok(RawPost {
            id,
            data: PostData {
                title,
                description: fm.description.unwrap_or_default(),
                date,
                tags: fm.tags,
                extra: fm.extra,
            },
        })
    }
}

impl ContentStore for FsContentStore {
    async fn collection(&self, kind: CollectionKind) -> Result<Vec<RawPost>> {
        let dir = self.content_dir.join(kind.dir_name());
        if !dir.is_dir() {
            bail!("collection directory {:?} does not exist", dir);
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.with_context(|| format!("failed to read {:?}", dir))?;
            let path = entry.path();
            if !path.is_file() || !is_post_file(path) {
                continue;
            }
            let post = self
                .load_entry(path)
                .await
                .with_context(|| format!("failed to load post {:?}", path))?;
            posts.push(post);
        }

        tracing::debug!("Loaded {} entries from {:?}", posts.len(), dir);
        Ok(posts)
    }
}

/// In-memory store, handy for callers that already hold their posts
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    blog: Vec<RawPost>,
}

impl MemoryContentStore {
    pub fn new(blog: Vec<RawPost>) -> Self {
        Self { blog }
    }
}

impl ContentStore for MemoryContentStore {
    async fn collection(&self, kind: CollectionKind) -> Result<Vec<RawPost>> {
        match kind {
            CollectionKind::Blog => Ok(self.blog.clone()),
        }
    }
}

/// Check if a file is a markdown or MDX source. Works on raw name bytes so
/// that names which are not UTF-8 still reach the loader and fail there.
fn is_post_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .map(|n| n.as_encoded_bytes().starts_with(b"."))
        .unwrap_or(true);
    !hidden
        && path
            .extension()
            .map(|e| e == "md" || e == "mdx")
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[tokio::test]
    async fn test_fs_store_reads_blog_collection() {
        let root = tempfile::tempdir().unwrap();
        let blog = root.path().join("blog");
        fs::create_dir_all(&blog).unwrap();

        write_post(
            &blog,
            "2023-01-01-hello.md",
            "---\ntitle: Hello\ndescription: First\ndate: 2023-01-01\ntags: [intro, meta]\n---\nHi\n",
        );
        write_post(
            &blog,
            "2023-06-15-world.mdx",
            "---\ntitle: World\ndate: 2023-06-15T12:00:00Z\n---\nThere\n",
        );
        write_post(&blog, "notes.txt", "not a post");
        write_post(&blog, ".2023-01-02-hidden.md", "---\ntitle: x\n---\n");

        let store = FsContentStore::new(root.path());
        let mut posts = store.collection(CollectionKind::Blog).await.unwrap();
        posts.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "2023-01-01-hello.md");
        assert_eq!(posts[0].data.title, "Hello");
        assert_eq!(posts[0].data.description, "First");
        assert_eq!(posts[0].data.tags, vec!["intro", "meta"]);
        assert_eq!(posts[1].id, "2023-06-15-world.mdx");
        assert_eq!(posts[1].data.description, "");
    }

    #[tokio::test]
    async fn test_fs_store_missing_dir_is_error() {
        let root = tempfile::tempdir().unwrap();
        let store = FsContentStore::new(root.path());
        let err = store.collection(CollectionKind::Blog).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_fs_store_empty_dir_is_empty() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("blog")).unwrap();
        let store = FsContentStore::new(root.path());
        let posts = store.collection(CollectionKind::Blog).await.unwrap();
        assert!(posts.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_fs_store_rejects_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = tempfile::tempdir().unwrap();
        let blog = root.path().join("blog");
        fs::create_dir_all(&blog).unwrap();
        let name = OsStr::from_bytes(b"2023-01-01-caf\xe9.md");
        fs::write(
            blog.join(name),
            "---\ntitle: Cafe\ndate: 2023-01-01\n---\n",
        )
        .unwrap();

        let store = FsContentStore::new(root.path());
        let err = store.collection(CollectionKind::Blog).await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("failed to load post"));
        assert!(message.contains("not valid UTF-8"));
    }

    #[test]
    fn test_is_post_file() {
        assert!(is_post_file(Path::new("blog/2023-01-01-a.md")));
        assert!(is_post_file(Path::new("blog/2023-01-01-a.mdx")));
        assert!(!is_post_file(Path::new("blog/.2023-01-01-a.md")));
        assert!(!is_post_file(Path::new("blog/2023-01-01-a.md.bak")));
        assert!(!is_post_file(Path::new("blog/notes.txt")));
    }

    #[tokio::test]
    async fn test_fs_store_missing_date_names_file() {
        let root = tempfile::tempdir().unwrap();
        let blog = root.path().join("blog");
        fs::create_dir_all(&blog).unwrap();
        write_post(&blog, "2023-01-01-undated.md", "---\ntitle: Undated\n---\n");

        let store = FsContentStore::new(root.path());
        let err = store.collection(CollectionKind::Blog).await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("2023-01-01-undated.md"));
        assert!(message.contains("missing `date`"));
    }

    #[tokio::test]
    async fn test_fs_store_keeps_malformed_ids() {
        // Id validation belongs to the loader, the store passes files through
        let root = tempfile::tempdir().unwrap();
        let blog = root.path().join("blog");
        fs::create_dir_all(&blog).unwrap();
        write_post(&blog, "about.md", "---\ntitle: About\ndate: 2020-01-01\n---\n");

        let store = FsContentStore::new(root.path());
        let posts = store.collection(CollectionKind::Blog).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "about.md");
    }
}

//! Content module - posts, slugs and the content store

mod frontmatter;
pub mod loader;
mod post;
pub mod slug;
pub mod store;
mod xref;

pub use frontmatter::{parse_date_string, FrontMatter};
pub use loader::{get_posts, DateOrdering};
pub use post::{Post, PostData, RawPost};
pub use slug::{slugify_tag, PostSlug};
pub use store::{CollectionKind, ContentStore, FsContentStore, MemoryContentStore};
pub use xref::post_url;

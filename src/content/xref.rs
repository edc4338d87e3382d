//! Cross references between posts

use super::Post;
use crate::error::{Error, Result};

/// Link of the post whose slug text is `slug`, for `{% post_url %}`-style
/// references inside post bodies
pub fn post_url(posts: &[Post], slug: &str) -> Result<String> {
    posts
        .iter()
        .find(|p| p.slug.text == slug)
        .map(Post::link)
        .ok_or_else(|| Error::PostNotFound {
            slug: slug.to_string(),
        })
}

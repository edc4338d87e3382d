//! Helper functions shared by the feed and search outputs

mod date;
mod url;

pub use date::*;
pub use url::*;

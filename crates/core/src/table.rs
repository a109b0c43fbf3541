//! Reading the delimited post table
//!
//! Expected header: `postId, repostId, followers`. Fields may carry
//! surrounding whitespace, trimmed before numeric parsing. A `repostId`
//! of `-1` marks original content.

use crate::error::ReachError;
use crate::post::{Post, PostId, ORIGINAL_SENTINEL};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Raw table row before sentinel mapping and sign checks
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "postId")]
    post_id: PostId,
    #[serde(rename = "repostId")]
    repost_id: PostId,
    followers: i64,
}

impl RawRow {
    fn into_post(self) -> Result<Post, ReachError> {
        if self.followers < 0 {
            return Err(ReachError::NegativeFollowers {
                post: self.post_id,
                followers: self.followers,
            });
        }
        let repost_of = (self.repost_id != ORIGINAL_SENTINEL).then_some(self.repost_id);
        Ok(Post {
            id: self.post_id,
            repost_of,
            followers: self.followers as u64,
        })
    }
}

/// Read posts from any delimited-table reader
///
/// A header-only (or fully empty) table yields an empty `Vec`; any
/// malformed row fails the whole read.
pub fn read_posts<R: Read>(reader: R) -> Result<Vec<Post>, ReachError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut posts = Vec::new();
    for row in rdr.deserialize() {
        let raw: RawRow = row?;
        posts.push(raw.into_post()?);
    }

    debug!(posts = posts.len(), "parsed post table");
    Ok(posts)
}

/// Read posts from a table file on disk
pub fn load_posts(path: &Path) -> Result<Vec<Post>, ReachError> {
    let file = File::open(path)?;
    read_posts(file)
}

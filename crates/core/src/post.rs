//! Post records parsed from the input table

/// Identifier of a post in the input table
pub type PostId = i64;

/// Repost-target value marking a row as original content
pub const ORIGINAL_SENTINEL: PostId = -1;

/// One row of the post table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    /// Unique id of this post
    pub id: PostId,
    /// Post this one reposts, or `None` for original content
    pub repost_of: Option<PostId>,
    /// Follower count of the user who made this post
    pub followers: u64,
}

impl Post {
    /// Create an original post
    pub fn original(id: PostId, followers: u64) -> Self {
        Self {
            id,
            repost_of: None,
            followers,
        }
    }

    /// Create a repost of `target`
    pub fn repost(id: PostId, target: PostId, followers: u64) -> Self {
        Self {
            id,
            repost_of: Some(target),
            followers,
        }
    }

    /// Whether this post is original content
    pub fn is_original(&self) -> bool {
        self.repost_of.is_none()
    }
}

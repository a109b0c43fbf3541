//! Error types for table loading and aggregation

use crate::post::PostId;
use thiserror::Error;

/// Errors surfaced while loading a post table or aggregating reach
///
/// Every error aborts the whole computation; there is no partial or
/// best-effort recovery for a malformed table.
#[derive(Debug, Error)]
pub enum ReachError {
    /// Table file could not be read
    #[error("failed to read post table: {0}")]
    Io(#[from] std::io::Error),

    /// Row failed to parse (wrong column count, non-numeric field)
    #[error("malformed post table: {0}")]
    Parse(#[from] csv::Error),

    /// Follower counts are non-negative
    #[error("post {post} has negative follower count {followers}")]
    NegativeFollowers { post: PostId, followers: i64 },

    /// Two rows share the same post id
    #[error("duplicate post id {0}")]
    DuplicatePost(PostId),

    /// A repost names a target id absent from the table
    #[error("post {post} reposts unknown post {target}")]
    DanglingRepost { post: PostId, target: PostId },

    /// The repost relation loops instead of forming a forest
    #[error("repost cycle detected: post {0} is never reached from an original post")]
    CyclicRepost(PostId),
}

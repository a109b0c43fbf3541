//! Reach aggregation over the repost forest

use crate::error::ReachError;
use crate::forest::PostForest;
use crate::post::PostId;
use serde::Serialize;
use tracing::debug;

/// Total reach attributed to one original post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reach {
    /// Id of the original post
    pub post: PostId,
    /// Followers summed over the post's entire repost subtree
    pub total: u64,
}

/// Compute total reach for every original post, sorted by post id
///
/// Each root's subtree is walked with an explicit stack; deep repost
/// chains must not overflow the call stack. Sibling order is irrelevant
/// since the result is a commutative sum, and no deduplication is
/// needed because no two posts share followers.
pub fn aggregate(forest: &PostForest) -> Result<Vec<Reach>, ReachError> {
    let mut visited = vec![false; forest.len()];
    let mut results = Vec::new();
    let mut stack = Vec::new();

    for root in forest.roots() {
        let mut total: u64 = 0;
        stack.push(root);
        while let Some(idx) = stack.pop() {
            let node = forest.node(idx);
            visited[idx] = true;
            total += node.post.followers;
            stack.extend(node.children.iter().copied());
        }
        results.push(Reach {
            post: forest.node(root).post.id,
            total,
        });
    }

    // Every repost hangs off exactly one parent, so a post the root walk
    // never saw sits on or below a repost cycle.
    if let Some(orphan) = visited.iter().position(|&seen| !seen) {
        return Err(ReachError::CyclicRepost(forest.node(orphan).post.id));
    }

    results.sort_unstable_by_key(|reach| reach.post);
    debug!(roots = results.len(), "aggregated reach");
    Ok(results)
}

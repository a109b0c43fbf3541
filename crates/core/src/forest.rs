//! Arena-backed forest linking reposts to the content they repost
//!
//! Posts live in a flat arena and child relations are stored as index
//! lists rather than references, so dangling targets surface as errors
//! during the link phase instead of as ownership problems.

use crate::error::ReachError;
use crate::post::{Post, PostId};
use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::debug;

/// A post plus the arena indices of its direct reposts
#[derive(Debug, Clone)]
pub struct PostNode {
    /// The post record itself
    pub post: Post,
    /// Arena indices of posts that directly repost this one
    pub children: SmallVec<[usize; 4]>,
}

/// Forest of posts rooted at every original post
#[derive(Debug, Clone, Default)]
pub struct PostForest {
    nodes: Vec<PostNode>,
    index: AHashMap<PostId, usize>,
}

impl PostForest {
    /// Build a forest from parsed posts
    ///
    /// Indexes every post by id, then attaches each repost to the child
    /// list of its target. Fails on duplicate ids and on reposts whose
    /// target is absent from the table.
    pub fn build(posts: Vec<Post>) -> Result<Self, ReachError> {
        let mut nodes = Vec::with_capacity(posts.len());
        let mut index = AHashMap::with_capacity(posts.len());

        for post in posts {
            if index.insert(post.id, nodes.len()).is_some() {
                return Err(ReachError::DuplicatePost(post.id));
            }
            nodes.push(PostNode {
                post,
                children: SmallVec::new(),
            });
        }

        for idx in 0..nodes.len() {
            let Some(target) = nodes[idx].post.repost_of else {
                continue;
            };
            match index.get(&target) {
                Some(&parent) => nodes[parent].children.push(idx),
                None => {
                    return Err(ReachError::DanglingRepost {
                        post: nodes[idx].post.id,
                        target,
                    })
                }
            }
        }

        debug!(posts = nodes.len(), "linked repost forest");
        Ok(Self { nodes, index })
    }

    /// Number of posts in the forest
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest holds no posts
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena indices of original posts, in input order
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.post.is_original())
            .map(|(idx, _)| idx)
    }

    /// Node at an arena index
    pub fn node(&self, idx: usize) -> &PostNode {
        &self.nodes[idx]
    }

    /// Look up a node by post id
    pub fn get(&self, id: PostId) -> Option<&PostNode> {
        self.index.get(&id).map(|&idx| &self.nodes[idx])
    }
}

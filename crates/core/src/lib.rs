//! Post table parsing and repost reach aggregation
//!
//! A post table describes a forest: every row is either original content
//! or a repost of another row. Loading goes through three phases, each a
//! plain function over the previous phase's output:
//!
//! 1. [`table::read_posts`] parses the delimited table into [`Post`] records
//! 2. [`PostForest::build`] links each repost to the content it reposted
//! 3. [`reach::aggregate`] sums follower counts over every root's subtree

pub mod error;
pub mod forest;
pub mod post;
pub mod reach;
pub mod table;

pub use error::ReachError;
pub use forest::{PostForest, PostNode};
pub use post::{Post, PostId, ORIGINAL_SENTINEL};
pub use reach::{aggregate, Reach};

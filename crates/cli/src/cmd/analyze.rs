//! Compute reach for every original post in a table

use anyhow::{Context, Result};
use fanout_core::{aggregate, table, PostForest};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::debug;

pub fn run(table_path: &Path, json: bool) -> Result<()> {
    // 1. Load the post table
    let posts = table::load_posts(table_path)
        .with_context(|| format!("Failed to load post table {}", table_path.display()))?;
    debug!(posts = posts.len(), table = %table_path.display(), "loaded post table");

    // 2. Link reposts into a forest
    let forest = PostForest::build(posts).context("Failed to link repost forest")?;

    // 3. Aggregate reach per original post
    let results = aggregate(&forest).context("Failed to aggregate reach")?;

    // 4. Display results
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for reach in &results {
        println!("{} : {}", reach.post, reach.total);
    }
    println!(
        "{}",
        format!(
            "{} original posts, {} posts total",
            results.len(),
            forest.len()
        )
        .dimmed()
    );

    Ok(())
}

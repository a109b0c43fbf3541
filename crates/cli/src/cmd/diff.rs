//! Show additions and deletions between two collections

use anyhow::Result;
use fanout_diff::diff;
use owo_colors::OwoColorize;

pub fn run(current: &[i64], target: &[i64]) -> Result<()> {
    let result = diff(current, target);

    if result.is_empty() {
        println!("{}", "No changes between collections".dimmed());
        return Ok(());
    }

    let mut additions: Vec<i64> = result.additions.iter().copied().collect();
    let mut deletions: Vec<i64> = result.deletions.iter().copied().collect();
    additions.sort_unstable();
    deletions.sort_unstable();

    if !additions.is_empty() {
        println!("{} Additions ({})", "A".green().bold(), additions.len());
        for value in &additions {
            println!("  {} {}", "+".green(), value);
        }
    }

    if !deletions.is_empty() {
        println!("{} Deletions ({})", "D".red().bold(), deletions.len());
        for value in &deletions {
            println!("  {} {}", "-".red(), value);
        }
    }

    println!(
        "{}",
        format!("Total: {} added, {} removed", additions.len(), deletions.len()).dimmed()
    );

    Ok(())
}

//! Symmetric difference between two collections
//!
//! Answers "what must be added to and removed from `current` to obtain
//! `target`". Membership is hash-based in both directions, so the whole
//! computation is O(n + m) rather than the O(n * m) of a naive nested
//! membership scan.

use std::collections::HashSet;
use std::hash::Hash;

/// Additions and deletions separating two collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetDiff<T: Eq + Hash> {
    /// Elements present only in the target collection
    pub additions: HashSet<T>,
    /// Elements present only in the current collection
    pub deletions: HashSet<T>,
}

impl<T: Eq + Hash> SetDiff<T> {
    /// Whether the two collections already agree
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty()
    }

    /// Whether applying the diff would change anything
    pub fn changed(&self) -> bool {
        !self.is_empty()
    }
}

/// Compute the elements to add and remove to turn `current` into `target`
///
/// Output order is unspecified; duplicates in either input collapse to a
/// single element. Side-effect free, no error conditions.
pub fn diff<T>(current: &[T], target: &[T]) -> SetDiff<T>
where
    T: Eq + Hash + Clone,
{
    let current: HashSet<&T> = current.iter().collect();
    let target: HashSet<&T> = target.iter().collect();

    SetDiff {
        additions: target.difference(&current).map(|&item| item.clone()).collect(),
        deletions: current.difference(&target).map(|&item| item.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[i64]) -> HashSet<i64> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_provided_scenario() {
        let result = diff(&[1, 3, 5, 6, 8, 9], &[1, 2, 5, 7, 9]);
        assert_eq!(result.additions, set(&[2, 7]));
        assert_eq!(result.deletions, set(&[3, 6, 8]));
    }

    #[test]
    fn test_additions_and_deletions_disjoint() {
        let result = diff(&[1, 3, 5, 6, 8, 9], &[1, 2, 5, 7, 9]);
        assert!(result.additions.is_disjoint(&result.deletions));
    }

    #[test]
    fn test_applying_diff_yields_target() {
        let current = [1, 3, 5, 6, 8, 9];
        let target = [1, 2, 5, 7, 9];
        let result = diff(&current, &target);

        let mut applied: HashSet<i64> = current.iter().copied().collect();
        applied.extend(result.additions.iter().copied());
        applied.retain(|item| !result.deletions.contains(item));

        assert_eq!(applied, set(&target));
    }

    #[test]
    fn test_full_addition() {
        let target: Vec<i64> = (0..1000).collect();
        let result = diff(&[], &target);
        assert_eq!(result.additions, target.iter().copied().collect());
        assert!(result.deletions.is_empty());
    }

    #[test]
    fn test_full_deletion() {
        let current: Vec<i64> = (0..1000).collect();
        let result = diff(&current, &[]);
        assert!(result.additions.is_empty());
        assert_eq!(result.deletions, current.iter().copied().collect());
    }

    #[test]
    fn test_identical_collections() {
        let result = diff(&[4, 2, 7], &[7, 4, 2]);
        assert!(result.is_empty());
        assert!(!result.changed());
    }

    #[test]
    fn test_overlapping_ranges() {
        let current: Vec<i64> = (0..6000).collect();
        let target: Vec<i64> = (3000..6000).collect();
        let result = diff(&current, &target);

        assert!(result.additions.is_empty());
        assert_eq!(result.deletions, (0..3000).collect());

        let result = diff(&target, &current);
        assert_eq!(result.additions, (0..3000).collect());
        assert!(result.deletions.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = diff(&[1, 1, 2], &[2, 3, 3]);
        assert_eq!(result.additions, set(&[3]));
        assert_eq!(result.deletions, set(&[1]));
    }

    #[test]
    fn test_works_for_strings() {
        let current = ["alpha".to_string(), "beta".to_string()];
        let target = ["beta".to_string(), "gamma".to_string()];
        let result = diff(&current, &target);

        assert!(result.additions.contains("gamma"));
        assert!(result.deletions.contains("alpha"));
    }

    #[test]
    fn test_random_inputs_roundtrip() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            let current: Vec<i64> = (0..200).map(|_| rng.gen_range(0..100)).collect();
            let target: Vec<i64> = (0..200).map(|_| rng.gen_range(0..100)).collect();
            let result = diff(&current, &target);

            assert!(result.additions.is_disjoint(&result.deletions));

            let mut applied: HashSet<i64> = current.iter().copied().collect();
            applied.extend(result.additions.iter().copied());
            applied.retain(|item| !result.deletions.contains(item));
            assert_eq!(applied, target.iter().copied().collect());
        }
    }
}

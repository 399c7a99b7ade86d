//! Word pool validation command
//!
//! Checks that a pool can deal rounds and that no two groups can be confused.

use crate::core::WordGroup;
use crate::game::GROUPS_PER_ROUND;
use rustc_hash::FxHashMap;

/// A word that appears more than once across the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateWord {
    pub word: String,
    /// Indices of the groups holding it, one entry per occurrence
    pub groups: Vec<usize>,
}

/// Result of validating a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub total_groups: usize,
    pub duplicate_words: Vec<DuplicateWord>,
    pub equal_groups: Vec<(usize, usize)>,
}

impl ValidationReport {
    #[must_use]
    pub const fn has_enough_groups(&self) -> bool {
        self.total_groups >= GROUPS_PER_ROUND
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.has_enough_groups() && self.duplicate_words.is_empty() && self.equal_groups.is_empty()
    }
}

/// Validate an authored pool
///
/// Word comparison is case-insensitive, since two slots showing the same
/// word in different case would still look identical to the player.
#[must_use]
pub fn validate_groups(groups: &[WordGroup]) -> ValidationReport {
    let mut occurrences: FxHashMap<String, Vec<usize>> = FxHashMap::default();
    for (idx, group) in groups.iter().enumerate() {
        for word in group.words() {
            occurrences.entry(word.to_lowercase()).or_default().push(idx);
        }
    }

    let mut duplicate_words: Vec<DuplicateWord> = occurrences
        .into_iter()
        .filter(|(_, groups)| groups.len() > 1)
        .map(|(word, groups)| DuplicateWord { word, groups })
        .collect();
    duplicate_words.sort_by(|a, b| a.word.cmp(&b.word));

    let mut equal_groups = Vec::new();
    for (i, a) in groups.iter().enumerate() {
        for (j, b) in groups.iter().enumerate().skip(i + 1) {
            if a.matches(b.words().iter().map(String::as_str)) {
                equal_groups.push((i, j));
            }
        }
    }

    ValidationReport {
        total_groups: groups.len(),
        duplicate_words,
        equal_groups,
    }
}

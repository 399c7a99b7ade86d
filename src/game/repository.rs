//! Authored word groups and per-round sampling

use crate::core::WordGroup;
use rand::Rng;
use rand::seq::index;
use std::fmt;

/// Number of groups dealt into every round
pub const GROUPS_PER_ROUND: usize = 4;

/// Error type for round sampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    InsufficientGroups { available: usize },
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientGroups { available } => write!(
                f,
                "A round needs {GROUPS_PER_ROUND} word groups, only {available} configured"
            ),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// The four groups dealt for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    groups: Vec<WordGroup>,
    pool_indices: Vec<usize>,
}

impl Round {
    #[must_use]
    pub fn groups(&self) -> &[WordGroup] {
        &self.groups
    }

    /// Positions of the dealt groups in the authored pool
    #[must_use]
    pub fn pool_indices(&self) -> &[usize] {
        &self.pool_indices
    }

    /// All 16 words, group by group in dealing order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.words().iter().map(String::as_str))
    }

    /// Diagnostic: the dealt group containing `word`
    #[must_use]
    pub fn group_of(&self, word: &str) -> Option<&WordGroup> {
        self.groups.iter().find(|g| g.contains(word))
    }
}

/// Holds the authored pool and deals rounds from it
#[derive(Debug, Clone, Default)]
pub struct WordSetRepository {
    groups: Vec<WordGroup>,
}

impl WordSetRepository {
    #[must_use]
    pub const fn new(groups: Vec<WordGroup>) -> Self {
        Self { groups }
    }

    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[WordGroup] {
        &self.groups
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Deal four distinct groups chosen uniformly without replacement
    ///
    /// Uses a partial shuffle of pool indices, so it always terminates in
    /// O(k) regardless of pool size.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InsufficientGroups` when fewer than four
    /// groups are configured.
    pub fn sample_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Round, RepositoryError> {
        if self.groups.len() < GROUPS_PER_ROUND {
            return Err(RepositoryError::InsufficientGroups {
                available: self.groups.len(),
            });
        }

        let pool_indices = index::sample(rng, self.groups.len(), GROUPS_PER_ROUND).into_vec();
        let groups = pool_indices.iter().map(|&i| self.groups[i].clone()).collect();

        Ok(Round {
            groups,
            pool_indices,
        })
    }

    /// First authored group equal to `words` as an unordered set
    ///
    /// The whole pool is searched. Groups are expected to be pairwise
    /// distinct as sets; if not, the earliest one wins.
    #[must_use]
    pub fn find_group<'a, I>(&self, words: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: Vec<&str> = words.into_iter().collect();
        self.groups
            .iter()
            .position(|group| group.matches(words.iter().copied()))
    }
}

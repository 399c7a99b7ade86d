//! Authored word group representation
//!
//! A `WordGroup` stores the four related words of one puzzle answer along with
//! an optional theme label.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of words in every group
pub const GROUP_SIZE: usize = 4;

/// Four thematically related words
///
/// Words are trimmed on construction. Equality compares themes and words in
/// authored order; use [`WordGroup::matches`] for the unordered comparison
/// used when checking a player's selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    theme: Option<String>,
    words: [String; GROUP_SIZE],
}

/// Error type for invalid groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    WrongWordCount(usize),
    EmptyWord,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongWordCount(count) => {
                write!(f, "Group must hold exactly {GROUP_SIZE} words, got {count}")
            }
            Self::EmptyWord => write!(f, "Group contains an empty word"),
        }
    }
}

impl std::error::Error for GroupError {}

impl WordGroup {
    /// Create a new group from its words
    ///
    /// # Errors
    /// Returns `GroupError` if:
    /// - The number of words is not exactly 4
    /// - Any word is empty after trimming
    ///
    /// # Examples
    /// ```
    /// use connections_puzzle::core::WordGroup;
    ///
    /// let group = WordGroup::new(["cat", "dog", "bird", "fish"]).unwrap();
    /// assert_eq!(group.words()[2], "bird");
    ///
    /// assert!(WordGroup::new(["cat", "dog"]).is_err());
    /// ```
    pub fn new<I, W>(words: I) -> Result<Self, GroupError>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .collect();

        if words.iter().any(String::is_empty) {
            return Err(GroupError::EmptyWord);
        }

        let count = words.len();
        let words: [String; GROUP_SIZE] = words
            .try_into()
            .map_err(|_| GroupError::WrongWordCount(count))?;

        Ok(Self { theme: None, words })
    }

    /// Attach a theme label; blank themes are dropped
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        let theme = theme.into();
        let theme = theme.trim();
        self.theme = (!theme.is_empty()).then(|| theme.to_string());
        self
    }

    #[inline]
    #[must_use]
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// The words in authored order
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[String; GROUP_SIZE] {
        &self.words
    }

    /// Check whether this group contains a word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Unordered set equality against a candidate selection
    ///
    /// Duplicates in `candidate` collapse, as with any set comparison.
    #[must_use]
    pub fn matches<'a, I>(&self, candidate: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let candidate: FxHashSet<&str> = candidate.into_iter().collect();
        let own: FxHashSet<&str> = self.words.iter().map(String::as_str).collect();
        candidate == own
    }
}

impl fmt::Display for WordGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(theme) = &self.theme {
            write!(f, "{theme}: ")?;
        }
        write!(f, "{}", self.words.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_creation_valid() {
        let group = WordGroup::new(["cat", "dog", "bird", "fish"]).unwrap();
        assert_eq!(group.words()[0], "cat");
        assert_eq!(group.words()[3], "fish");
        assert_eq!(group.theme(), None);
    }

    #[test]
    fn group_creation_trims_words() {
        let group = WordGroup::new([" cat", "dog ", " bird ", "fish"]).unwrap();
        assert_eq!(group.words(), &["cat", "dog", "bird", "fish"]);
    }

    #[test]
    fn group_creation_wrong_count() {
        assert_eq!(
            WordGroup::new(["cat", "dog", "bird"]),
            Err(GroupError::WrongWordCount(3))
        );
        assert_eq!(
            WordGroup::new(["a", "b", "c", "d", "e"]),
            Err(GroupError::WrongWordCount(5))
        );
        assert_eq!(
            WordGroup::new(Vec::<&str>::new()),
            Err(GroupError::WrongWordCount(0))
        );
    }

    #[test]
    fn group_creation_empty_word() {
        assert_eq!(
            WordGroup::new(["cat", "  ", "bird", "fish"]),
            Err(GroupError::EmptyWord)
        );
    }

    #[test]
    fn group_theme() {
        let group = WordGroup::new(["cat", "dog", "bird", "fish"])
            .unwrap()
            .with_theme(" pets ");
        assert_eq!(group.theme(), Some("pets"));

        let blank = WordGroup::new(["cat", "dog", "bird", "fish"])
            .unwrap()
            .with_theme("   ");
        assert_eq!(blank.theme(), None);
    }

    #[test]
    fn group_matches_any_order() {
        let group = WordGroup::new(["cat", "dog", "bird", "fish"]).unwrap();
        assert!(group.matches(["fish", "cat", "bird", "dog"]));
        assert!(group.matches(["dog", "fish", "cat", "bird"]));
    }

    #[test]
    fn group_rejects_partial_or_foreign_words() {
        let group = WordGroup::new(["cat", "dog", "bird", "fish"]).unwrap();
        assert!(!group.matches(["cat", "dog", "bird"]));
        assert!(!group.matches(["cat", "dog", "bird", "mars"]));
        assert!(!group.matches(["cat", "dog", "bird", "fish", "mars"]));
    }

    #[test]
    fn group_contains() {
        let group = WordGroup::new(["cat", "dog", "bird", "fish"]).unwrap();
        assert!(group.contains("dog"));
        assert!(!group.contains("Dog"));
    }

    #[test]
    fn group_display() {
        let group = WordGroup::new(["cat", "dog", "bird", "fish"]).unwrap();
        assert_eq!(format!("{group}"), "cat, dog, bird, fish");
        assert_eq!(
            format!("{}", group.with_theme("pets")),
            "pets: cat, dog, bird, fish"
        );
    }
}

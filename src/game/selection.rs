//! The player's in-progress choice of words

use super::surface::SlotId;
use crate::core::GROUP_SIZE;

/// A chosen word together with the slot it was clicked on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    pub word: String,
    pub slot: SlotId,
}

/// Result of toggling a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed(SelectionEntry),
    /// Already holding four words; nothing changed
    Full,
}

/// Up to four selected words, unique by text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(GROUP_SIZE),
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    /// Remove `word` if present, otherwise add it when there is room
    ///
    /// Removal always wins, even when the selection is full.
    pub fn toggle(&mut self, word: &str, slot: SlotId) -> Toggle {
        if let Some(idx) = self.entries.iter().position(|e| e.word == word) {
            return Toggle::Removed(self.entries.remove(idx));
        }

        if self.is_full() {
            return Toggle::Full;
        }

        self.entries.push(SelectionEntry {
            word: word.to_string(),
            slot,
        });
        Toggle::Added
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= GROUP_SIZE
    }

    #[must_use]
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Empty the selection, handing back what was in it
    pub fn clear(&mut self) -> Vec<SelectionEntry> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(selection: &Selection) -> Vec<&str> {
        selection.words().collect()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle("cat", 0), Toggle::Added);
        assert!(selection.contains("cat"));

        assert_eq!(
            selection.toggle("cat", 0),
            Toggle::Removed(SelectionEntry {
                word: "cat".to_string(),
                slot: 0
            })
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn fourth_word_fills_and_reclick_removes() {
        let mut selection = Selection::new();
        selection.toggle("cat", 0);
        selection.toggle("dog", 1);
        selection.toggle("bird", 2);

        selection.toggle("fish", 3);
        assert_eq!(words(&selection), ["cat", "dog", "bird", "fish"]);
        assert!(selection.is_full());

        selection.toggle("cat", 0);
        assert_eq!(words(&selection), ["dog", "bird", "fish"]);
    }

    #[test]
    fn never_exceeds_four() {
        let mut selection = Selection::new();
        for (slot, word) in ["a", "b", "c", "d"].into_iter().enumerate() {
            assert_eq!(selection.toggle(word, slot), Toggle::Added);
        }
        assert_eq!(selection.toggle("e", 4), Toggle::Full);
        assert_eq!(selection.len(), 4);
        assert!(!selection.contains("e"));
    }

    #[test]
    fn uniqueness_is_by_word() {
        let mut selection = Selection::new();
        selection.toggle("cat", 0);
        let removed = selection.toggle("cat", 7);
        assert_eq!(
            removed,
            Toggle::Removed(SelectionEntry {
                word: "cat".to_string(),
                slot: 0
            })
        );
    }

    #[test]
    fn clear_returns_entries() {
        let mut selection = Selection::new();
        selection.toggle("cat", 2);
        selection.toggle("dog", 5);

        let drained = selection.clear();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].slot, 5);
        assert!(selection.is_empty());
    }
}

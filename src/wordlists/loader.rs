//! Word pool loading utilities
//!
//! Provides functions to load groups from files or use the embedded pool.
//!
//! Pool files hold one group per line, either `theme: w1, w2, w3, w4` or just
//! `w1, w2, w3, w4`. Blank lines and `#` comments are ignored.

use crate::core::WordGroup;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Parse one pool line
///
/// Returns `None` for blank lines, comments and malformed groups.
#[must_use]
pub fn parse_group_line(line: &str) -> Option<WordGroup> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (theme, words) = trimmed.split_once(':').unwrap_or(("", trimmed));
    WordGroup::new(words.split(','))
        .ok()
        .map(|group| group.with_theme(theme))
}

/// Parse a whole pool document, skipping invalid entries
#[must_use]
pub fn parse_groups(content: &str) -> Vec<WordGroup> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let group = parse_group_line(line);
            let trimmed = line.trim();
            if group.is_none() && !trimmed.is_empty() && !trimmed.starts_with('#') {
                warn!(line = idx + 1, content = trimmed, "Skipping malformed group");
            }
            group
        })
        .collect()
}

/// Load groups from a file
///
/// Returns a vector of valid groups, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use connections_puzzle::wordlists::loader::load_from_file;
///
/// let groups = load_from_file("data/groups.txt").unwrap();
/// println!("Loaded {} groups", groups.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordGroup>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_groups(&content))
}

/// Convert the embedded pool to groups
///
/// # Examples
/// ```
/// use connections_puzzle::wordlists::loader::groups_from_slice;
/// use connections_puzzle::wordlists::GROUPS;
///
/// let groups = groups_from_slice(GROUPS);
/// assert_eq!(groups.len(), GROUPS.len());
/// ```
#[must_use]
pub fn groups_from_slice(slice: &[(&str, [&str; 4])]) -> Vec<WordGroup> {
    slice
        .iter()
        .filter_map(|&(theme, words)| WordGroup::new(words).ok().map(|g| g.with_theme(theme)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_with_theme() {
        let group = parse_group_line("pets: cat, dog, bird, fish").unwrap();
        assert_eq!(group.theme(), Some("pets"));
        assert_eq!(group.words(), &["cat", "dog", "bird", "fish"]);
    }

    #[test]
    fn parse_line_without_theme() {
        let group = parse_group_line("cat,dog,bird,fish").unwrap();
        assert_eq!(group.theme(), None);
        assert_eq!(group.words()[1], "dog");
    }

    #[test]
    fn parse_line_skips_comments_and_blanks() {
        assert!(parse_group_line("").is_none());
        assert!(parse_group_line("   ").is_none());
        assert!(parse_group_line("# pets: cat, dog, bird, fish").is_none());
    }

    #[test]
    fn parse_line_rejects_wrong_count() {
        assert!(parse_group_line("pets: cat, dog, bird").is_none());
        assert!(parse_group_line("pets: cat, dog, bird, fish, mouse").is_none());
        assert!(parse_group_line("pets: cat, , bird, fish").is_none());
    }

    #[test]
    fn parse_groups_skips_invalid() {
        let content = "\
# pool
pets: cat, dog, bird, fish
broken: one, two

planets: mars, venus, saturn, mercury
";
        let groups = parse_groups(content);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].theme(), Some("pets"));
        assert_eq!(groups[1].theme(), Some("planets"));
    }

    #[test]
    fn groups_from_slice_converts() {
        let input = &[
            ("pets", ["cat", "dog", "bird", "fish"]),
            ("", ["mars", "venus", "saturn", "mercury"]),
        ];
        let groups = groups_from_slice(input);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].theme(), Some("pets"));
        assert_eq!(groups[1].theme(), None);
    }

    #[test]
    fn groups_from_slice_empty() {
        let input: &[(&str, [&str; 4])] = &[];
        assert!(groups_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("definitely/not/a/pool.txt").is_err());
    }
}

// Text utils

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The ASCII punctuation characters that disqualify a dictionary entry.
/// Downstream spell-check consumers strip punctuation from their queries, so
/// any entry containing one of these characters could never be matched.
pub const PUNCTUATION_LIT: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A lazily-initialized, global set of all punctuation chars.
pub static PUNCTUATION: Lazy<HashSet<char>> = Lazy::new(|| PUNCTUATION_LIT.chars().collect());

/// True if any character of `text` is in `set`.
pub fn contains_punctuation(text: &str, set: &HashSet<char>) -> bool {
    text.chars().any(|ch| set.contains(&ch))
}

/// The characters of `text` that are in `set`, in order of first appearance,
/// without duplicates. Used to build filter reasons.
pub fn punctuation_hits(text: &str, set: &HashSet<char>) -> Vec<char> {
    let mut seen = HashSet::new();
    text.chars()
        .filter(|ch| set.contains(ch) && seen.insert(*ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_set_contents() {
        assert!(PUNCTUATION.contains(&'.'));
        assert!(PUNCTUATION.contains(&','));
        assert!(PUNCTUATION.contains(&'!'));
        assert!(PUNCTUATION.contains(&'\''));
        assert!(PUNCTUATION.contains(&'\\'));
        assert!(PUNCTUATION.contains(&'~'));

        assert!(!PUNCTUATION.contains(&'a'));
        assert!(!PUNCTUATION.contains(&'A'));
        assert!(!PUNCTUATION.contains(&'5'));
        assert!(!PUNCTUATION.contains(&' '));
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn test_contains_punctuation() {
        assert!(contains_punctuation("it's", &PUNCTUATION));
        assert!(contains_punctuation("dog!", &PUNCTUATION));
        assert!(!contains_punctuation("hello", &PUNCTUATION));
        assert!(!contains_punctuation("", &PUNCTUATION));
    }

    #[test]
    fn test_punctuation_hits_dedup_and_order() {
        assert_eq!(punctuation_hits("a.b.c!", &PUNCTUATION), vec!['.', '!']);
        assert_eq!(punctuation_hits("clean", &PUNCTUATION), Vec::<char>::new());
    }
}

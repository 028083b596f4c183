//! # String Utilities
//!
//! Stateless helpers used to pick a message apart. A "word" is a maximal run of
//! word characters (Unicode alphanumerics and `_`); everything else is treated
//! as a separator.
//!
//! Two notions of splitting coexist here:
//! - [`split_words`] is pattern based and drops punctuation (`"Hello,"` → `"Hello"`)
//! - [`reverse_words`], [`capitalize_words`] split on whitespace only, so punctuation
//!   stays attached to its token

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Extracts every word from `text`, in order.
pub fn split_words(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Reverses the order of whitespace-separated tokens, collapsing runs of whitespace.
pub fn reverse_words(text: &str) -> String {
    text.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

pub fn join_with_commas<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Upper-cases the first letter of each token and lower-cases the rest.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Case-insensitive palindrome check that ignores all whitespace.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .split_whitespace()
        .flat_map(str::chars)
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pattern_compiles() {
        assert_eq!(Lazy::force(&WORD).as_str(), r"\w+");
    }

    #[test]
    fn test_split_words_drops_punctuation() {
        assert_eq!(split_words("Hello, World!"), vec!["Hello", "World"]);
    }

    #[test]
    fn test_split_words_keeps_underscores_and_digits() {
        assert_eq!(
            split_words("snake_case v2 -- x"),
            vec!["snake_case", "v2", "x"]
        );
    }

    #[test]
    fn test_split_words_empty() {
        assert!(split_words("").is_empty());
        assert!(split_words("  ... !!").is_empty());
    }

    #[test]
    fn test_split_words_unicode() {
        assert_eq!(split_words("café, naïve"), vec!["café", "naïve"]);
    }

    #[test]
    fn test_reverse_words() {
        assert_eq!(reverse_words("One Two Three"), "Three Two One");
    }

    #[test]
    fn test_reverse_words_collapses_whitespace() {
        assert_eq!(reverse_words("  a \t b\n\nc  "), "c b a");
        assert_eq!(reverse_words(""), "");
    }

    #[test]
    fn test_join_with_commas() {
        assert_eq!(join_with_commas(&["a", "b", "c"]), "a, b, c");
        assert_eq!(join_with_commas::<&str>(&[]), "");
        assert_eq!(join_with_commas(&["solo".to_string()]), "solo");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("hELLO   wORLD"), "Hello World");
        assert_eq!(capitalize_words("élan vital"), "Élan Vital");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_count_vowels() {
        assert_eq!(count_vowels("Hello World"), 3);
        assert_eq!(count_vowels("AEIOU aeiou"), 10);
        assert_eq!(count_vowels("rhythm"), 0);
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("racecar"));
        assert!(!is_palindrome("hello"));
        assert!(is_palindrome("Never Odd Or Even"));
        assert!(is_palindrome(""));
    }

    #[test]
    fn test_is_palindrome_keeps_punctuation() {
        // Only whitespace is stripped, so the comma breaks symmetry
        assert!(!is_palindrome("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome("A man a man"));
    }
}

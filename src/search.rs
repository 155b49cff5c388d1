//! Substring search.
//!
//! Independent of the coding engine. Every function works on `char`s and
//! returns the char index of the first match, or `None` when there is none or
//! the pattern is empty.

use std::collections::HashMap;

pub fn brute_force(pattern: &str, text: &str) -> Option<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len())
        .position(|window| window == pattern.as_slice())
}

/// Knuth-Morris-Pratt table: entry `i` is the length of the longest proper
/// prefix of `pattern[..=i]` that is also a suffix of it.
pub fn match_table(pattern: &str) -> Vec<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    prefix_lengths(&pattern)
}

fn prefix_lengths(pattern: &[char]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = table[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        table[i] = k;
    }
    table
}

pub fn kmp(pattern: &str, text: &str) -> Option<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return None;
    }
    let table = prefix_lengths(&pattern);
    let mut k = 0;
    for (i, c) in text.chars().enumerate() {
        while k > 0 && c != pattern[k] {
            k = table[k - 1];
        }
        if c == pattern[k] {
            k += 1;
        }
        if k == pattern.len() {
            return Some(i + 1 - k);
        }
    }
    None
}

/// Boyer-Moore with bad-character and good-suffix shifts.
pub fn boyer_moore(pattern: &str, text: &str) -> Option<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    if pattern.is_empty() {
        return None;
    }
    let m = pattern.len();
    let bad_chars = bad_character_table(&pattern);
    let offsets = good_suffix_table(&pattern);

    let mut i = m - 1;
    while i < text.len() {
        let mut j = m - 1;
        let mut k = i;
        while pattern[j] == text[k] {
            if j == 0 {
                return Some(k);
            }
            j -= 1;
            k -= 1;
        }
        let bad = bad_chars.get(&text[k]).copied().unwrap_or(m);
        i = k + offsets[m - 1 - j].max(bad);
    }
    None
}

// distance from the last occurrence of each char (excluding the final
// position) to the end of the pattern
fn bad_character_table(pattern: &[char]) -> HashMap<char, usize> {
    let m = pattern.len();
    pattern[..m - 1]
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, m - 1 - i))
        .collect()
}

fn good_suffix_table(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut table = vec![0; m];
    let mut last_prefix = m;
    for i in (1..=m).rev() {
        if is_prefix(pattern, i) {
            last_prefix = i;
        }
        table[m - i] = last_prefix - i + m;
    }
    for i in 0..m - 1 {
        let len = suffix_length(pattern, i);
        table[len] = m - 1 - i + len;
    }
    table
}

// is pattern[start..] a prefix of pattern?
fn is_prefix(pattern: &[char], start: usize) -> bool {
    pattern[start..].iter().zip(pattern).all(|(a, b)| a == b)
}

// length of the longest common suffix of pattern[..=end] and pattern
fn suffix_length(pattern: &[char], end: usize) -> usize {
    pattern[..=end]
        .iter()
        .rev()
        .zip(pattern.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCHES: [fn(&str, &str) -> Option<usize>; 3] = [brute_force, kmp, boyer_moore];

    #[test]
    fn test_match_table() {
        assert_eq!(match_table("ABABAC"), vec![0, 0, 1, 2, 3, 0]);
        assert_eq!(match_table("aaaa"), vec![0, 1, 2, 3]);
        assert!(match_table("").is_empty());
    }

    #[test]
    fn test_finds_first_match() {
        for search in SEARCHES {
            assert_eq!(search("RARA", "RA RARARARA SSSRARASA"), Some(3));
            assert_eq!(search("SSS", "RA RARARARA SSSRARASA"), Some(12));
            assert_eq!(search("ABCDABD", "ABC ABCDAB ABCDABCDABDE"), Some(15));
            assert_eq!(search("a", "a"), Some(0));
        }
    }

    #[test]
    fn test_no_match() {
        for search in SEARCHES {
            assert_eq!(search("xyz", "RA RARARARA"), None);
            assert_eq!(search("longer than text", "short"), None);
            assert_eq!(search("a", ""), None);
        }
    }

    #[test]
    fn test_empty_pattern() {
        for search in SEARCHES {
            assert_eq!(search("", "text"), None);
            assert_eq!(search("", ""), None);
        }
    }

    #[test]
    fn test_indexes_are_in_chars() {
        for search in SEARCHES {
            assert_eq!(search("ü", "grün"), Some(2));
        }
    }

    #[test]
    fn test_good_suffix_table() {
        assert_eq!(good_suffix_table(&['a', 'b', 'a', 'b']), vec![1, 5, 4, 5]);
    }
}

//! Phrase tokenization.
//!
//! A phrase becomes a sequence of lowercase word tokens: maximal runs
//! of ASCII letters, digits, and underscores. Consecutive
//! single-character tokens merge into one token so spaced-out
//! abbreviations (`s f k`) behave like the compact form (`sfk`).
//! Tokens shorter than the minimum length are dropped unless they are
//! all digits.

/// True for characters that belong to a word token.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `phrase` into normalized word tokens.
///
/// Order is left-to-right and deterministic. A phrase that reduces to
/// no tokens yields an empty vec; callers treat that as "never
/// matches".
pub fn tokenize(phrase: &str, min_len: usize) -> Vec<String> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return Vec::new();
    }

    let raw = split_words(&phrase.to_ascii_lowercase());
    let merged = merge_single_chars(raw);
    merged
        .into_iter()
        .filter(|t| t.len() >= min_len || is_numeric(t))
        .collect()
}

/// Extract maximal word-character runs, discarding separators.
fn split_words(phrase: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in phrase.chars() {
        if is_word_char(c) {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Concatenate runs of consecutive single-character tokens.
///
/// A multi-character token passes through unchanged and ends the run.
fn merge_single_chars(raw: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(raw.len());
    let mut run = String::new();
    for token in raw {
        if token.len() == 1 {
            run.push_str(&token);
        } else {
            if !run.is_empty() {
                merged.push(std::mem::take(&mut run));
            }
            merged.push(token);
        }
    }
    if !run.is_empty() {
        merged.push(run);
    }
    merged
}

/// Numeric tokens survive the length filter regardless of length.
fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;

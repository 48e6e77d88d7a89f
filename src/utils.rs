//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a string for matching: NFC-compose, then lowercase.
///
/// Composition makes a precomposed "é" and "e" + combining acute compare equal.
/// Whitespace is left alone so the whole-query substring test sees exactly
/// what the user typed (after trimming, which is the caller's job).
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Lowercase only. Assumes input is already composed or ASCII.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Count non-overlapping occurrences of `needle`, scanning left to right.
///
/// `count_occurrences("aaaa", "aa") == 2`, not 3. An empty needle counts as zero.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Cut `text` to at most `max_chars` characters, ending in "..." when cut.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-codepoint.
/// Limits too small to hold the ellipsis get a bare cut instead.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars < ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let keep = max_chars - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

const ELLIPSIS: &str = "...";

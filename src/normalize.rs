//! Text folding used for phrase matching.
//!
//! Both the stored chapter aliases and incoming `Auto` queries go through
//! [`fold`], so a match is a plain substring test on folded strings. Folding
//! decomposes characters (NFD), drops combining marks (Latin accents as well as
//! Arabic harakat, shadda, sukun and the superscript alef), drops the tatweel
//! and the high hamza (which NFD does not split off like the combining one),
//! lowercases, and collapses whitespace runs into single spaces.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const TATWEEL: char = '\u{0640}';
const HIGH_HAMZA: char = '\u{0674}';

pub fn fold(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c) && *c != TATWEEL && *c != HIGH_HAMZA)
        .flat_map(char::to_lowercase)
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when `needle` (already folded) occurs in `haystack` (already folded).
/// An empty needle never matches.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

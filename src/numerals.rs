//! Numeral localization for verse markers.
//!
//! Verse numbers are kept as plain integers everywhere in the crate; only the
//! presentation edge turns them into glyphs. The same digit tables are used in
//! the other direction by [`fold_digits`] so that numeric queries typed with
//! Arabic-Indic or Persian digits resolve like their ASCII spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MushafError;

const ARABIC_INDIC: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const PERSIAN: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

const MARKER_OPEN: char = '﴿';
const MARKER_CLOSE: char = '﴾';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralStyle {
    Western,
    #[default]
    ArabicIndic,
    Persian,
}

impl NumeralStyle {
    fn digit(self, d: u32) -> char {
        match self {
            NumeralStyle::Western => char::from_digit(d, 10).unwrap_or('0'),
            NumeralStyle::ArabicIndic => ARABIC_INDIC[d as usize],
            NumeralStyle::Persian => PERSIAN[d as usize],
        }
    }
}

impl fmt::Display for NumeralStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumeralStyle::Western => write!(f, "western"),
            NumeralStyle::ArabicIndic => write!(f, "arabic_indic"),
            NumeralStyle::Persian => write!(f, "persian"),
        }
    }
}

impl FromStr for NumeralStyle {
    type Err = MushafError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "western" | "latin" | "ascii" => Ok(NumeralStyle::Western),
            "arabic_indic" | "arabic" | "eastern" => Ok(NumeralStyle::ArabicIndic),
            "persian" | "farsi" | "urdu" => Ok(NumeralStyle::Persian),
            other => Err(MushafError::InvalidFormat(format!(
                "unknown numeral style '{other}'"
            ))),
        }
    }
}

/// Renders `n` with the digits of `style`, most significant first.
pub fn localize(n: u32, style: NumeralStyle) -> String {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| style.digit(d))
        .collect()
}

/// The ornate-parenthesised marker placed after a verse, e.g. `﴿٢٥٥﴾`.
pub fn verse_marker(n: u16, style: NumeralStyle) -> String {
    format!("{MARKER_OPEN}{}{MARKER_CLOSE}", localize(u32::from(n), style))
}

/// Replaces Arabic-Indic and Persian digits with their ASCII counterparts and
/// leaves every other character untouched.
pub fn fold_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            ARABIC_INDIC
                .iter()
                .position(|d| *d == c)
                .or_else(|| PERSIAN.iter().position(|d| *d == c))
                .and_then(|i| char::from_digit(i as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}

//! Query resolution: turns what a reader typed into a canonical [`Locator`].
//!
//! Every [`QueryKind`] names its own grammar. Numeric kinds accept digits only
//! (surrounding whitespace is trimmed, Arabic-Indic and Persian digits are
//! folded to ASCII first). `Auto` is the only kind that searches chapter names,
//! and it never picks a "best" match: more than one candidate is reported as
//! [`MushafError::Ambiguous`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::corpus::{ChapterNumber, CorpusIndex, Division, VerseNumber, VerseRef, CHAPTER_COUNT};
use crate::error::{MushafError, Result};
use crate::normalize::fold;
use crate::numerals::fold_digits;

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref CHAPTER_VERSE: Regex = Regex::new(r"^([0-9]+):([0-9]+)$").unwrap();
}

// ------------- Query -------------
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Auto,
    Chapter,
    ChapterVerse,
    Page,
    SubDivision,
    HalfDivision,
}
impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            QueryKind::Auto => "auto",
            QueryKind::Chapter => "chapter",
            QueryKind::ChapterVerse => "chapter_verse",
            QueryKind::Page => "page",
            QueryKind::SubDivision => "sub_division",
            QueryKind::HalfDivision => "half_division",
        };
        write!(f, "{name}")
    }
}
impl FromStr for QueryKind {
    type Err = MushafError;
    // accepts the canonical names as well as the reader-facing terms
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "auto" | "phrase" => Ok(QueryKind::Auto),
            "chapter" | "sura" | "surah" => Ok(QueryKind::Chapter),
            "chapter_verse" | "sura:aya" | "surah:ayah" | "verse" => Ok(QueryKind::ChapterVerse),
            "page" => Ok(QueryKind::Page),
            "sub_division" | "juz" => Ok(QueryKind::SubDivision),
            "half_division" | "hizb" => Ok(QueryKind::HalfDivision),
            other => Err(MushafError::InvalidFormat(format!("unknown query kind '{other}'"))),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Query {
    kind: QueryKind,
    raw_text: String,
}
impl Query {
    pub fn new(kind: QueryKind, raw_text: impl Into<String>) -> Self {
        Self { kind, raw_text: raw_text.into() }
    }
    pub fn kind(&self) -> QueryKind {
        self.kind
    }
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

// ------------- Locator -------------
/// A resolved, unambiguous position in the corpus.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locator {
    ByChapter(ChapterNumber),
    ByChapterVerse(VerseRef),
    ByPage(u16),
    BySubDivision(u16),
    ByHalfDivision(u16),
    ByPhrase(ChapterNumber),
}
impl Locator {
    pub fn division(division: Division, index: u16) -> Self {
        match division {
            Division::Page => Locator::ByPage(index),
            Division::SubDivision => Locator::BySubDivision(index),
            Division::HalfDivision => Locator::ByHalfDivision(index),
        }
    }
}
impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Locator::ByChapter(n) => write!(f, "chapter {n}"),
            Locator::ByChapterVerse(r) => write!(f, "verse {r}"),
            Locator::ByPage(n) => write!(f, "page {n}"),
            Locator::BySubDivision(n) => write!(f, "sub-division {n}"),
            Locator::ByHalfDivision(n) => write!(f, "half-division {n}"),
            Locator::ByPhrase(n) => write!(f, "chapter {n} (phrase)"),
        }
    }
}

// ------------- Resolution -------------
/// Resolves a query against the corpus. Identical input always yields identical output.
pub fn resolve(index: &CorpusIndex, query: &Query) -> Result<Locator> {
    let text = fold_digits(query.raw_text().trim());
    let locator = match query.kind() {
        QueryKind::Chapter => Locator::ByChapter(bounded(&text, "chapter", CHAPTER_COUNT)?),
        QueryKind::ChapterVerse => Locator::ByChapterVerse(chapter_verse(index, &text)?),
        QueryKind::Page => division(&text, Division::Page)?,
        QueryKind::SubDivision => division(&text, Division::SubDivision)?,
        QueryKind::HalfDivision => division(&text, Division::HalfDivision)?,
        QueryKind::Auto => Locator::ByPhrase(phrase(index, query.raw_text())?),
    };
    debug!(kind = %query.kind(), raw = query.raw_text(), %locator, "query resolved");
    Ok(locator)
}

fn division(text: &str, division: Division) -> Result<Locator> {
    let index = bounded(text, division.name(), division.bound())?;
    Ok(Locator::division(division, index))
}

// a digit string within 1..=max
fn bounded(text: &str, what: &'static str, max: u16) -> Result<u16> {
    if !NUMBER.is_match(text) {
        return Err(MushafError::InvalidFormat(format!(
            "expected a {what} number, got '{text}'"
        )));
    }
    match text.parse::<u16>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(MushafError::OutOfRange { what, value: text.to_owned(), max }),
    }
}

fn chapter_verse(index: &CorpusIndex, text: &str) -> Result<VerseRef> {
    let captures = CHAPTER_VERSE.captures(text).ok_or_else(|| {
        MushafError::InvalidFormat(format!("expected <chapter>:<verse>, got '{text}'"))
    })?;
    let not_found = || MushafError::NotFound(format!("verse {text}"));
    let chapter: ChapterNumber = captures[1].parse().map_err(|_| not_found())?;
    let verse: VerseNumber = captures[2].parse().map_err(|_| not_found())?;
    index
        .verse_by_chapter_and_number(chapter, verse)
        .map_err(|_| not_found())?;
    Ok(VerseRef::new(chapter, verse))
}

fn phrase(index: &CorpusIndex, raw: &str) -> Result<ChapterNumber> {
    let needle = fold(raw);
    if needle.is_empty() {
        return Err(MushafError::InvalidFormat("empty phrase".to_owned()));
    }
    let candidates = index.match_phrase(&needle);
    match candidates.len() {
        0 => Err(MushafError::NotFound(format!("no chapter matches '{needle}'"))),
        1 => Ok(candidates[0]),
        _ => Err(MushafError::Ambiguous { query: raw.trim().to_owned(), candidates }),
    }
}

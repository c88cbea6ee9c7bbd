// used to keep the one-to-one mapping between opaque chapter ids and chapter numbers
use bimap::BiMap;

// used to collect phrase candidates ordered and without duplicates
use roaring::RoaringBitmap;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::info;

use crate::error::{MushafError, Result};
use crate::normalize::{contains_folded, fold};

pub type ChapterNumber = u16;
pub type VerseNumber = u16;

pub const CHAPTER_COUNT: ChapterNumber = 114;

// ------------- VerseRef -------------
/// A (chapter, verse) address. Ordering is canonical corpus order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct VerseRef {
    chapter: ChapterNumber,
    verse: VerseNumber,
}
impl VerseRef {
    pub fn new(chapter: ChapterNumber, verse: VerseNumber) -> Self {
        Self { chapter, verse }
    }
    pub fn chapter(&self) -> ChapterNumber {
        self.chapter
    }
    pub fn verse(&self) -> VerseNumber {
        self.verse
    }
}
impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

// ------------- Division -------------
/// The three ways the full verse sequence is partitioned independently of chapters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    Page,
    SubDivision,
    HalfDivision,
}
impl Division {
    pub const ALL: [Division; 3] = [Division::Page, Division::SubDivision, Division::HalfDivision];

    /// Number of units of this division; valid indices are `1..=bound()`.
    pub fn bound(self) -> u16 {
        match self {
            Division::Page => 604,
            Division::SubDivision => 30,
            Division::HalfDivision => 60,
        }
    }
    pub fn name(self) -> &'static str {
        match self {
            Division::Page => "page",
            Division::SubDivision => "sub-division",
            Division::HalfDivision => "half-division",
        }
    }
    fn slot(self) -> usize {
        match self {
            Division::Page => 0,
            Division::SubDivision => 1,
            Division::HalfDivision => 2,
        }
    }
}
impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ------------- Verse -------------
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Verse {
    number: VerseNumber,
    text: String,
}
impl Verse {
    pub fn new(number: VerseNumber, text: String) -> Self {
        Self { number, text }
    }
    pub fn number(&self) -> VerseNumber {
        self.number
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

// ------------- BismillahPolicy -------------
/// How a chapter's opening formula is shown.
///
/// The formula text lives inside `Standalone`, so a chapter can never carry a
/// formula text under any other policy.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BismillahPolicy {
    /// Verse 1 is the formula itself; it is shown as the heading and not repeated in the body.
    LeadingVerse,
    /// The formula is shown as a heading in addition to every verse.
    Standalone(String),
    Absent,
}

// ------------- Chapter -------------
#[derive(Clone, Debug)]
pub struct Chapter {
    id: String,
    number: ChapterNumber,
    name: String,
    transliteration: String,
    description: String,
    period: Option<String>,
    bismillah: BismillahPolicy,
    verses: Vec<Verse>,
}
impl Chapter {
    /// Builds a chapter, checking that verses are numbered 1..=N without gaps
    /// and that the bismillah policy is consistent with them.
    pub fn new(
        id: String,
        number: ChapterNumber,
        name: String,
        bismillah: BismillahPolicy,
        verses: Vec<Verse>,
    ) -> Result<Self> {
        if verses.is_empty() {
            return Err(MushafError::Corpus(format!("chapter {number} has no verses")));
        }
        if let Some((i, verse)) = verses
            .iter()
            .enumerate()
            .find(|(i, v)| usize::from(v.number()) != i + 1)
        {
            return Err(MushafError::Corpus(format!(
                "chapter {number}: verse at position {} is numbered {}",
                i + 1,
                verse.number()
            )));
        }
        if let BismillahPolicy::Standalone(text) = &bismillah {
            if text.trim().is_empty() {
                return Err(MushafError::Corpus(format!(
                    "chapter {number} has a standalone bismillah with empty text"
                )));
            }
        }
        Ok(Self {
            id,
            number,
            name,
            transliteration: String::new(),
            description: String::new(),
            period: None,
            bismillah,
            verses,
        })
    }
    pub fn with_transliteration(mut self, transliteration: String) -> Self {
        self.transliteration = transliteration;
        self
    }
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }
    pub fn with_period(mut self, period: Option<String>) -> Self {
        self.period = period;
        self
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn number(&self) -> ChapterNumber {
        self.number
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn transliteration(&self) -> &str {
        &self.transliteration
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn period(&self) -> Option<&str> {
        self.period.as_deref()
    }
    pub fn bismillah(&self) -> &BismillahPolicy {
        &self.bismillah
    }
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }
    pub fn verse(&self, number: VerseNumber) -> Option<&Verse> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|i| self.verses.get(i))
    }
    pub fn len(&self) -> usize {
        self.verses.len()
    }
    // always false once constructed
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}
impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {} ({})", self.number, self.transliteration, self.name)
    }
}

// ------------- Partition -------------
// Starting ordinals of each unit plus a sentinel equal to the verse count,
// and the owning unit (1-based) of every ordinal.
#[derive(Debug)]
struct Partition {
    starts: Vec<usize>,
    membership: Vec<u16>,
}
impl Partition {
    fn span(&self, index: u16) -> Range<usize> {
        let i = usize::from(index) - 1;
        self.starts[i]..self.starts[i + 1]
    }
}

// ------------- CorpusIndex -------------
/// The immutable, fully validated corpus plus its lookup tables.
///
/// Chapters and verses are addressed by small integers: chapter numbers and
/// global verse ordinals (0-based position in canonical order).
#[derive(Debug)]
pub struct CorpusIndex {
    chapters: Vec<Chapter>,
    ids: BiMap<String, ChapterNumber>,
    // ordinal of verse 1 of each chapter, followed by the total verse count
    offsets: Vec<usize>,
    refs: Vec<VerseRef>,
    // folded name, transliteration and description per chapter
    folded: Vec<[String; 3]>,
    partitions: Vec<Partition>,
}

impl CorpusIndex {
    /// Builds the index from all chapters and the starting verse of every page,
    /// sub-division and half-division. Each unit runs until the next one starts.
    pub fn new(
        mut chapters: Vec<Chapter>,
        pages: Vec<VerseRef>,
        sub_divisions: Vec<VerseRef>,
        half_divisions: Vec<VerseRef>,
    ) -> Result<Self> {
        chapters.sort_by_key(|c| c.number());
        if chapters.len() != usize::from(CHAPTER_COUNT) {
            return Err(MushafError::Corpus(format!(
                "expected {CHAPTER_COUNT} chapters, found {}",
                chapters.len()
            )));
        }
        let mut ids = BiMap::new();
        for (i, chapter) in chapters.iter().enumerate() {
            if usize::from(chapter.number()) != i + 1 {
                return Err(MushafError::Corpus(format!(
                    "chapter numbers are not contiguous: expected {}, found {}",
                    i + 1,
                    chapter.number()
                )));
            }
            if ids
                .insert_no_overwrite(chapter.id().to_owned(), chapter.number())
                .is_err()
            {
                return Err(MushafError::Corpus(format!(
                    "duplicate chapter id '{}'",
                    chapter.id()
                )));
            }
        }

        let mut offsets = Vec::with_capacity(chapters.len() + 1);
        let mut refs = Vec::new();
        for chapter in &chapters {
            offsets.push(refs.len());
            refs.extend(
                chapter
                    .verses()
                    .iter()
                    .map(|v| VerseRef::new(chapter.number(), v.number())),
            );
        }
        offsets.push(refs.len());

        let folded = chapters
            .iter()
            .map(|c| [fold(c.name()), fold(c.transliteration()), fold(c.description())])
            .collect();

        let mut index = Self {
            chapters,
            ids,
            offsets,
            refs,
            folded,
            partitions: Vec::with_capacity(3),
        };
        for (division, starts) in Division::ALL
            .into_iter()
            .zip([pages, sub_divisions, half_divisions])
        {
            let partition = index.partition(division, &starts)?;
            index.partitions.push(partition);
        }
        index.check_nesting()?;

        info!(
            chapters = index.chapters.len(),
            verses = index.refs.len(),
            pages = Division::Page.bound(),
            "corpus index built"
        );
        Ok(index)
    }

    fn partition(&self, division: Division, starts: &[VerseRef]) -> Result<Partition> {
        if starts.len() != usize::from(division.bound()) {
            return Err(MushafError::Corpus(format!(
                "expected {} {} boundaries, found {}",
                division.bound(),
                division,
                starts.len()
            )));
        }
        let mut ordinals = Vec::with_capacity(starts.len() + 1);
        for start in starts {
            let ordinal = self.ordinal_of(*start).map_err(|_| {
                MushafError::Corpus(format!("{division} boundary {start} names no verse"))
            })?;
            if let Some(previous) = ordinals.last() {
                if ordinal <= *previous {
                    return Err(MushafError::Corpus(format!(
                        "{division} boundary {start} does not follow the previous one"
                    )));
                }
            } else if ordinal != 0 {
                return Err(MushafError::Corpus(format!(
                    "first {division} starts at {start} instead of 1:1"
                )));
            }
            ordinals.push(ordinal);
        }
        ordinals.push(self.refs.len());

        let mut membership = vec![0u16; self.refs.len()];
        for (i, window) in ordinals.windows(2).enumerate() {
            membership[window[0]..window[1]].fill((i + 1) as u16);
        }
        Ok(Partition { starts: ordinals, membership })
    }

    // every sub-division is made of exactly two half-divisions
    fn check_nesting(&self) -> Result<()> {
        let subs = &self.partitions[Division::SubDivision.slot()];
        let halves = &self.partitions[Division::HalfDivision.slot()];
        for (i, start) in subs.starts.iter().enumerate() {
            if halves.starts.get(2 * i) != Some(start) {
                return Err(MushafError::Corpus(format!(
                    "sub-division {} does not start with half-division {}",
                    i + 1,
                    2 * i + 1
                )));
            }
        }
        Ok(())
    }

    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    pub fn chapter_by_number(&self, number: ChapterNumber) -> Result<&Chapter> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|i| self.chapters.get(i))
            .ok_or_else(|| MushafError::NotFound(format!("chapter {number}")))
    }

    pub fn chapter_by_id(&self, id: &str) -> Result<&Chapter> {
        match self.ids.get_by_left(id) {
            Some(number) => self.chapter_by_number(*number),
            None => Err(MushafError::NotFound(format!("chapter id '{id}'"))),
        }
    }

    pub fn verse_by_chapter_and_number(
        &self,
        chapter: ChapterNumber,
        verse: VerseNumber,
    ) -> Result<&Verse> {
        self.chapter_by_number(chapter)?
            .verse(verse)
            .ok_or_else(|| MushafError::NotFound(format!("verse {chapter}:{verse}")))
    }

    pub fn verse(&self, verse_ref: VerseRef) -> Result<&Verse> {
        self.verse_by_chapter_and_number(verse_ref.chapter(), verse_ref.verse())
    }

    /// Total number of verses in the corpus.
    pub fn verse_count(&self) -> usize {
        self.refs.len()
    }

    pub fn ordinal_of(&self, verse_ref: VerseRef) -> Result<usize> {
        self.verse(verse_ref)?;
        Ok(self.offsets[usize::from(verse_ref.chapter()) - 1] + usize::from(verse_ref.verse()) - 1)
    }

    pub fn verse_ref_at(&self, ordinal: usize) -> Option<VerseRef> {
        self.refs.get(ordinal).copied()
    }

    /// Ordinal range covering a whole chapter.
    pub fn chapter_span(&self, number: ChapterNumber) -> Result<Range<usize>> {
        self.chapter_by_number(number)?;
        let i = usize::from(number) - 1;
        Ok(self.offsets[i]..self.offsets[i + 1])
    }

    /// Ordinal range covering one page, sub-division or half-division.
    pub fn division_span(&self, division: Division, index: u16) -> Result<Range<usize>> {
        if index == 0 || index > division.bound() {
            return Err(MushafError::OutOfRange {
                what: division.name(),
                value: index.to_string(),
                max: division.bound(),
            });
        }
        Ok(self.partitions[division.slot()].span(index))
    }

    pub fn range_for(&self, division: Division, index: u16) -> Result<Vec<VerseRef>> {
        let span = self.division_span(division, index)?;
        Ok(self.refs[span].to_vec())
    }

    pub fn range_for_page(&self, page: u16) -> Result<Vec<VerseRef>> {
        self.range_for(Division::Page, page)
    }

    pub fn range_for_sub_division(&self, index: u16) -> Result<Vec<VerseRef>> {
        self.range_for(Division::SubDivision, index)
    }

    pub fn range_for_half_division(&self, index: u16) -> Result<Vec<VerseRef>> {
        self.range_for(Division::HalfDivision, index)
    }

    /// The unit of `division` that contains the verse.
    pub fn division_of(&self, division: Division, verse_ref: VerseRef) -> Result<u16> {
        let ordinal = self.ordinal_of(verse_ref)?;
        Ok(self.partitions[division.slot()].membership[ordinal])
    }

    pub fn page_of(&self, verse_ref: VerseRef) -> Result<u16> {
        self.division_of(Division::Page, verse_ref)
    }

    pub fn sub_division_of(&self, verse_ref: VerseRef) -> Result<u16> {
        self.division_of(Division::SubDivision, verse_ref)
    }

    pub fn half_division_of(&self, verse_ref: VerseRef) -> Result<u16> {
        self.division_of(Division::HalfDivision, verse_ref)
    }

    /// Chapters whose name, transliteration or description contains `text`
    /// once both sides are folded, in ascending chapter order. Empty when
    /// nothing matches.
    pub fn match_phrase(&self, text: &str) -> Vec<ChapterNumber> {
        let needle = fold(text);
        let mut candidates = RoaringBitmap::new();
        for (chapter, fields) in self.chapters.iter().zip(&self.folded) {
            if fields.iter().any(|field| contains_folded(field, &needle)) {
                candidates.insert(u32::from(chapter.number()));
            }
        }
        candidates.iter().map(|n| n as ChapterNumber).collect()
    }
}

//! Verse assembly: turns a [`Locator`] into the ordered elements to display.
//!
//! A locator first becomes a range of global verse ordinals. The range is then
//! walked chapter by chapter, and every chapter slice that starts at its
//! verse 1 gets its opening formula handled according to the chapter's
//! [`BismillahPolicy`]:
//!
//! * `LeadingVerse`: verse 1 becomes the heading and the body of that slice
//!   starts at verse 2, even when that leaves the slice's body empty. A
//!   citation of verse 1 keeps it in the body with no heading, so a citation
//!   always yields its verse.
//! * `Standalone`: the formula text is emitted as a heading before verse 1;
//!   the body is unaffected.
//! * `Absent`: nothing is emitted.
//!
//! Slices starting mid-chapter (a page or division boundary) never get a heading.

use serde::Serialize;
use std::ops::Range;
use tracing::debug;

use crate::corpus::{BismillahPolicy, Chapter, ChapterNumber, CorpusIndex, Division, VerseNumber};
use crate::error::{MushafError, Result};
use crate::locator::Locator;
use crate::numerals::{verse_marker, NumeralStyle};

// ------------- Element -------------
/// One displayable item: either an opening-formula heading or a verse of the body.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Element<'c> {
    chapter_number: ChapterNumber,
    verse_number: Option<VerseNumber>,
    text: &'c str,
    is_heading: bool,
}
impl<'c> Element<'c> {
    fn heading(chapter_number: ChapterNumber, verse_number: Option<VerseNumber>, text: &'c str) -> Self {
        Self { chapter_number, verse_number, text, is_heading: true }
    }
    fn verse(chapter_number: ChapterNumber, verse_number: VerseNumber, text: &'c str) -> Self {
        Self { chapter_number, verse_number: Some(verse_number), text, is_heading: false }
    }
    pub fn chapter_number(&self) -> ChapterNumber {
        self.chapter_number
    }
    /// The verse's own number, untouched by heading extraction. Body elements
    /// always carry one; a `LeadingVerse` heading carries 1; a `Standalone`
    /// heading carries none.
    pub fn verse_number(&self) -> Option<VerseNumber> {
        self.verse_number
    }
    pub fn text(&self) -> &'c str {
        self.text
    }
    pub fn is_heading(&self) -> bool {
        self.is_heading
    }
    /// The localized verse marker, e.g. `﴿٧﴾`, for elements that carry a verse number.
    pub fn marker(&self, style: NumeralStyle) -> Option<String> {
        self.verse_number.map(|n| verse_marker(n, style))
    }
}

// ------------- Assembly -------------
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Assembly<'c> {
    locator: Locator,
    elements: Vec<Element<'c>>,
}
impl<'c> Assembly<'c> {
    pub fn locator(&self) -> Locator {
        self.locator
    }
    /// Headings and body verses in display order.
    pub fn elements(&self) -> &[Element<'c>] {
        &self.elements
    }
    pub fn headings(&self) -> impl Iterator<Item = &Element<'c>> {
        self.elements.iter().filter(|e| e.is_heading())
    }
    pub fn body(&self) -> impl Iterator<Item = &Element<'c>> {
        self.elements.iter().filter(|e| !e.is_heading())
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn into_elements(self) -> Vec<Element<'c>> {
        self.elements
    }
}

// ------------- Assembly engine -------------
pub fn assemble<'c>(index: &'c CorpusIndex, locator: &Locator) -> Result<Assembly<'c>> {
    let span = span_of(index, locator)?;
    let citation = matches!(locator, Locator::ByChapterVerse(_));
    let mut elements = Vec::with_capacity(span.len() + 1);
    let mut ordinal = span.start;
    while ordinal < span.end {
        let first = index
            .verse_ref_at(ordinal)
            .ok_or_else(|| MushafError::NotFound(format!("verse ordinal {ordinal}")))?;
        let chapter = index.chapter_by_number(first.chapter())?;
        let slice_end = index.chapter_span(first.chapter())?.end.min(span.end);
        let last = first.verse() + (slice_end - ordinal - 1) as VerseNumber;
        push_chapter_slice(&mut elements, chapter, first.verse(), last, citation);
        ordinal = slice_end;
    }
    debug!(
        %locator,
        verses = span.len(),
        elements = elements.len(),
        "passage assembled"
    );
    Ok(Assembly { locator: *locator, elements })
}

fn span_of(index: &CorpusIndex, locator: &Locator) -> Result<Range<usize>> {
    match *locator {
        Locator::ByChapter(n) | Locator::ByPhrase(n) => index.chapter_span(n),
        Locator::ByChapterVerse(verse_ref) => {
            let ordinal = index.ordinal_of(verse_ref)?;
            Ok(ordinal..ordinal + 1)
        }
        Locator::ByPage(i) => division_span(index, Division::Page, i),
        Locator::BySubDivision(i) => division_span(index, Division::SubDivision, i),
        Locator::ByHalfDivision(i) => division_span(index, Division::HalfDivision, i),
    }
}

fn division_span(index: &CorpusIndex, division: Division, i: u16) -> Result<Range<usize>> {
    index
        .division_span(division, i)
        .map_err(|_| MushafError::NotFound(format!("{division} {i}")))
}

// verses first..=last of one chapter
fn push_chapter_slice<'c>(
    elements: &mut Vec<Element<'c>>,
    chapter: &'c Chapter,
    first: VerseNumber,
    last: VerseNumber,
    citation: bool,
) {
    let number = chapter.number();
    let mut body_start = first;
    if first == 1 {
        match chapter.bismillah() {
            BismillahPolicy::LeadingVerse if !citation => {
                elements.push(Element::heading(number, Some(1), chapter.verses()[0].text()));
                body_start = 2;
            }
            BismillahPolicy::Standalone(text) => {
                elements.push(Element::heading(number, None, text));
            }
            _ => {}
        }
    }
    let verses = &chapter.verses()[usize::from(body_start) - 1..usize::from(last)];
    elements.extend(
        verses
            .iter()
            .map(|v| Element::verse(number, v.number(), v.text())),
    );
}

//! Corpus supply: reads a JSON corpus document and builds a validated [`CorpusIndex`].
//!
//! Chapter records keep the field names of the per-chapter payload served to
//! readers (`surah_number`, `bismillah_status`, `ayahs[].content.text`, ...)
//! so a dump of that API can be loaded as-is once the division boundaries
//! are added next to it:
//!
//! ```json
//! {
//!   "surahs": [ { "surah_uuid": "...", "surah_number": 1, "surah_name": "...",
//!                 "surah_period": null, "bismillah_status": "first_ayah",
//!                 "bismillah_text": null, "transliteration": "Al-Fatihah",
//!                 "description": "The Opener",
//!                 "ayahs": [ { "number": 1, "content": { "text": "..." } } ] } ],
//!   "pages": [ { "surah": 1, "ayah": 1 } ],
//!   "juz":   [ { "surah": 1, "ayah": 1 } ],
//!   "hizb":  [ { "surah": 1, "ayah": 1 } ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::corpus::{BismillahPolicy, Chapter, ChapterNumber, CorpusIndex, Verse, VerseNumber, VerseRef};
use crate::error::{MushafError, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BismillahStatus {
    #[serde(rename = "first_ayah")]
    FirstAyah,
    #[serde(rename = "true")]
    Present,
    #[serde(rename = "false")]
    Missing,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AyahContent {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AyahRecord {
    pub number: VerseNumber,
    pub content: AyahContent,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SurahRecord {
    pub surah_uuid: String,
    pub surah_name: String,
    #[serde(default)]
    pub surah_period: Option<String>,
    pub surah_number: ChapterNumber,
    pub bismillah_status: BismillahStatus,
    #[serde(default)]
    pub bismillah_text: Option<String>,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub description: String,
    pub ayahs: Vec<AyahRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub surah: ChapterNumber,
    pub ayah: VerseNumber,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub surahs: Vec<SurahRecord>,
    pub pages: Vec<Boundary>,
    pub juz: Vec<Boundary>,
    pub hizb: Vec<Boundary>,
}

impl SurahRecord {
    fn policy(&self) -> Result<BismillahPolicy> {
        let text = self
            .bismillah_text
            .as_deref()
            .filter(|t| !t.trim().is_empty());
        match (self.bismillah_status, text) {
            (BismillahStatus::Present, Some(t)) => Ok(BismillahPolicy::Standalone(t.to_owned())),
            (BismillahStatus::Present, None) => Err(MushafError::Corpus(format!(
                "chapter {} has bismillah_status \"true\" but no bismillah_text",
                self.surah_number
            ))),
            (BismillahStatus::FirstAyah, None) => Ok(BismillahPolicy::LeadingVerse),
            (BismillahStatus::Missing, None) => Ok(BismillahPolicy::Absent),
            (_, Some(_)) => Err(MushafError::Corpus(format!(
                "chapter {} carries a bismillah_text without bismillah_status \"true\"",
                self.surah_number
            ))),
        }
    }

    pub fn into_chapter(self) -> Result<Chapter> {
        let policy = self.policy()?;
        let verses = self
            .ayahs
            .into_iter()
            .map(|a| Verse::new(a.number, a.content.text))
            .collect();
        Ok(Chapter::new(self.surah_uuid, self.surah_number, self.surah_name, policy, verses)?
            .with_transliteration(self.transliteration)
            .with_description(self.description)
            .with_period(self.surah_period))
    }
}

impl From<Boundary> for VerseRef {
    fn from(b: Boundary) -> Self {
        VerseRef::new(b.surah, b.ayah)
    }
}

impl CorpusIndex {
    pub fn from_document(document: CorpusDocument) -> Result<Self> {
        let chapters = document
            .surahs
            .into_iter()
            .map(SurahRecord::into_chapter)
            .collect::<Result<Vec<_>>>()?;
        let refs = |bounds: Vec<Boundary>| -> Vec<VerseRef> {
            bounds.into_iter().map(VerseRef::from).collect()
        };
        CorpusIndex::new(chapters, refs(document.pages), refs(document.juz), refs(document.hizb))
    }
}

pub fn load_from_str(json: &str) -> Result<CorpusIndex> {
    let document: CorpusDocument = serde_json::from_str(json)?;
    CorpusIndex::from_document(document)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<CorpusIndex> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading corpus");
    let json = fs::read_to_string(path)?;
    load_from_str(&json)
}

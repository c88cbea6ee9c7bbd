//! Mushaf – locating and assembling passages of the Quran.
//!
//! The crate turns a reader's query into an exact, ordered list of verses to
//! display, with the opening formula (bismillah) handled per chapter:
//! * A [`corpus::CorpusIndex`] holds all 114 chapters and the page (604),
//!   juz (30) and hizb (60) partitions. It is built once and never mutated.
//! * [`locator::resolve`] maps a [`locator::Query`] (chapter, `chapter:verse`,
//!   page, juz, hizb or free text) to a canonical [`locator::Locator`].
//! * [`assembly::assemble`] maps a locator to an [`assembly::Assembly`]: the
//!   headings and verses to show, each verse keeping its original number.
//!
//! ## Modules
//! * [`corpus`] – Chapters, verses, division partitions and phrase matching.
//! * [`locator`] – Query grammar and resolution.
//! * [`assembly`] – Bismillah policy and verse sequencing.
//! * [`loader`] – JSON corpus documents and their validation.
//! * [`numerals`] – Localized digits for verse markers.
//! * [`interface`] – [`interface::Reader`], a cloneable facade for callers.
//! * [`settings`] – Layered configuration used by the binary.
//!
//! ## Quick Start
//! ```no_run
//! use mushaf::{interface::Reader, loader, locator::{Query, QueryKind}};
//! let reader = Reader::new(loader::load_from_path("corpus.json").unwrap());
//! let passage = reader.lookup(&Query::new(QueryKind::ChapterVerse, "2:255")).unwrap();
//! assert_eq!(passage.body().count(), 1);
//! ```
//!
//! Terms: chapter = surah, verse = ayah, sub-division = juz,
//! half-division = hizb, opening formula = bismillah.
//!
//! ## License
//! Dual licensed under Apache-2.0 and MIT.

pub mod assembly;
pub mod corpus;
pub mod error;
pub mod interface;
pub mod loader;
pub mod locator;
pub mod normalize;
pub mod numerals;
pub mod settings;

pub use error::{ErrorKind, MushafError, Result};

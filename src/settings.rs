//! Layered settings: built-in defaults, then an optional TOML file
//! (`mushaf.toml`, or the file named by `MUSHAF_CONFIG`), then `MUSHAF_*`
//! environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;
use crate::numerals::NumeralStyle;

pub const DEFAULT_CONFIG_FILE: &str = "mushaf.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub corpus_path: PathBuf,
    pub log_filter: String,
    pub numerals: NumeralStyle,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let file = std::env::var("MUSHAF_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());
        Self::load_from(&file)
    }

    pub fn load_from(file: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("corpus_path", "corpus.json")?
            .set_default("log_filter", "info")?
            .set_default("numerals", NumeralStyle::default().to_string())?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("MUSHAF"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

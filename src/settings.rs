// config lets you read a separate settings file
use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

/// Order of the pairs produced by an encode.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncodeOrder {
    /// Last spec first. Every pair is prepended as the specs are walked.
    #[default]
    Reversed,
    /// Same order as the specs.
    Preserved,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub encode_order: EncodeOrder,
}

impl Settings {
    /// Reads settings from a file, the format is picked from its extension.
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

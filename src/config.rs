use std::path::PathBuf;

use eyre::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::Language;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Caption language code, one of es, en, fr, de, it, pt
    pub default_lang: Option<String>,
    /// Directory downloaded transcripts are written to
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from ~/.config/transcriptor/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Configured language, ignoring codes outside the supported set
    pub fn language(&self) -> Option<Language> {
        let code = self.default_lang.as_deref()?;
        let lang = Language::from_code(code);
        if lang.is_none() {
            warn!("Ignoring unsupported default_lang in config: {code}");
        }
        lang
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("transcriptor")
        .join("config.toml")
}

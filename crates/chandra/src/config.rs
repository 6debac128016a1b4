use crate::ephemeris::Ayanamsa;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_SEARCH_PATHS: &[&str] = &["configs/chandra.toml", "../../configs/chandra.toml"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChandraConfig {
    #[serde(default)]
    pub ephemeris: EphemerisConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EphemerisConfig {
    /// Swiss Ephemeris data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub ayanamsa: Ayanamsa,
}

impl ChandraConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("Failed to parse chandra config")
    }

    /// Load from `explicit` if given (it must exist), otherwise try the
    /// usual relative `configs/chandra.toml` locations and fall back to
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read config {}", path.display()))?;
            return Self::from_toml_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()));
        }

        for p in CONFIG_SEARCH_PATHS {
            if let Ok(text) = fs::read_to_string(p) {
                log::debug!("Loaded config from {}", p);
                return Self::from_toml_str(&text).with_context(|| format!("Invalid config {}", p));
            }
        }
        log::debug!("No config found in {:?}; using defaults", CONFIG_SEARCH_PATHS);
        Ok(Self::default())
    }
}

// Author: Dustin Pilgrim
// License: MIT

mod parser;

use std::path::{Path, PathBuf};

use eyre::Result;

use crate::core::state::DEFAULT_COURSE_TITLE;
use crate::services::webhook::DEFAULT_WEBHOOK_URL;

pub use parser::load_from_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyConfig {
    pub course_title: String,
    pub webhook_url: String,
    pub desktop_notifications: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            course_title: DEFAULT_COURSE_TITLE.to_string(),
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            desktop_notifications: false,
        }
    }
}

/// Where the config came from, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

pub struct LoadedConfig {
    pub cfg: StudyConfig,
    pub source: ConfigSource,
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("studytimer").join("studytimer.rune"))
}

pub fn system_config_path() -> PathBuf {
    PathBuf::from("/etc/studytimer/studytimer.rune")
}

/// Explicit path first (must exist), then user, then system config, then
/// built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(eyre::eyre!("config file not found: {}", path.display()));
        }
        return load_file(path);
    }

    let candidates = user_config_path()
        .into_iter()
        .chain(std::iter::once(system_config_path()));

    for path in candidates {
        if path.exists() {
            return load_file(&path);
        }
    }

    Ok(LoadedConfig {
        cfg: StudyConfig::default(),
        source: ConfigSource::BuiltIn,
    })
}

fn load_file(path: &Path) -> Result<LoadedConfig> {
    Ok(LoadedConfig {
        cfg: load_from_path(path)?,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

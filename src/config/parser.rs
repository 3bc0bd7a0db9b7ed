// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use eyre::{Result, WrapErr};
use rune_cfg::RuneConfig;

use super::StudyConfig;
use crate::sdebug;

/// Reads `studytimer.*` keys from a rune config file. Missing keys keep their
/// defaults; both `snake_case` and `kebab-case` spellings are accepted.
pub fn load_from_path(path: &Path) -> Result<StudyConfig> {
    let config = RuneConfig::from_file(path)
        .map_err(|e| eyre::eyre!("{}", e))
        .wrap_err_with(|| format!("failed to load config from {}", path.display()))?;

    let cfg = parse_study_config(&config)?;
    sdebug!("Config", "loaded {} -> {:?}", path.display(), cfg);
    Ok(cfg)
}

pub fn parse_study_config(config: &RuneConfig) -> Result<StudyConfig> {
    let defaults = StudyConfig::default();

    let course_title = config
        .get::<String>("studytimer.course_title")
        .or_else(|_| config.get::<String>("studytimer.course-title"))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults.course_title);

    let webhook_url = config
        .get::<String>("studytimer.webhook_url")
        .or_else(|_| config.get::<String>("studytimer.webhook-url"))
        .ok()
        .map(|s| s.trim().to_string())
        .unwrap_or(defaults.webhook_url);

    if !(webhook_url.starts_with("http://") || webhook_url.starts_with("https://")) {
        return Err(eyre::eyre!(
            "studytimer.webhook_url must be an http(s) URL, got '{}'",
            webhook_url
        ));
    }

    let desktop_notifications = config
        .get::<bool>("studytimer.desktop_notifications")
        .or_else(|_| config.get::<bool>("studytimer.desktop-notifications"))
        .unwrap_or(defaults.desktop_notifications);

    Ok(StudyConfig {
        course_title,
        webhook_url,
        desktop_notifications,
    })
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Optional local overrides, read from `~/.config/gitdash/config.json`.
///
/// Nothing about a session is ever written back here; the file only
/// carries a personal access token (bumps the API rate limit) and a couple
/// of tuning knobs.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct GitDashConfig {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

impl GitDashConfig {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Missing or malformed files silently fall back to defaults; a broken
    /// config should never keep the dashboard from starting.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return GitDashConfig::default();
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring malformed config");
            GitDashConfig::default()
        })
    }

    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("gitdash")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GitDashConfig::load_from(&dir.path().join("nope.json"));
        assert_eq!(config, GitDashConfig::default());
    }

    #[test]
    fn test_partial_config_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"token": "ghp_abc123"}}"#).unwrap();
        let config = GitDashConfig::load_from(file.path());
        assert_eq!(config.token.as_deref(), Some("ghp_abc123"));
        assert_eq!(config.per_page, None);
        assert_eq!(config.debounce_ms, None);
    }

    #[test]
    fn test_malformed_config_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "definitely not json").unwrap();
        let config = GitDashConfig::load_from(file.path());
        assert_eq!(config, GitDashConfig::default());
    }

    #[test]
    fn test_full_config_round_trip() {
        let config = GitDashConfig {
            token: Some("tok".into()),
            per_page: Some(25),
            debounce_ms: Some(250),
        };
        let json = serde_json::to_string(&config).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        assert_eq!(GitDashConfig::load_from(file.path()), config);
    }
}

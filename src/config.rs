//! Glyph configuration.
//!
//! Loaded from `~/.glyph/config.toml`. Every key is optional; a missing
//! file just means defaults.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::model::WifiSecurity;

/// Glyph configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Security mode assumed when `encode wifi` is called without
    /// `--security`.
    pub default_wifi_security: WifiSecurity,

    /// Where the history database lives. Defaults to `~/.glyph/`.
    pub history_root: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.glyph/config.toml`, falling back to defaults
    /// when the file doesn't exist.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Err("could not determine home directory".to_string());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.glyph/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".glyph").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_wifi_security, WifiSecurity::Wpa);
        assert!(config.history_root.is_none());
    }

    #[test]
    fn kebab_case_keys_parse() {
        let config: Config = toml::from_str(
            "default-wifi-security = \"open\"\nhistory-root = \"/tmp/glyph\"\n",
        )
        .unwrap();
        assert_eq!(config.default_wifi_security, WifiSecurity::Open);
        assert_eq!(config.history_root, Some(PathBuf::from("/tmp/glyph")));
    }
}

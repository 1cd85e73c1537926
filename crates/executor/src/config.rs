//! Arena configuration.
//!
//! Loaded from TOML, then overlaid with environment variables:
//!
//! ```toml
//! [campaign]
//! levels = 6
//! starting_integrity = 100.0
//! wrong_move_penalty = 20.0
//! key_min = 10
//! key_max = 99
//!
//! [layout]
//! initial_spread = 300.0
//! level_height = 80.0
//! ```
//!
//! Missing sections and fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use arena_engine::rbtree::LayoutOptions;

use crate::{Error, Result};

/// Environment variable overriding `campaign.levels`.
pub const ENV_LEVELS: &str = "ARENA_CAMPAIGN_LEVELS";
/// Environment variable overriding `campaign.wrong_move_penalty`.
pub const ENV_PENALTY: &str = "ARENA_CAMPAIGN_PENALTY";

/// Castle Defender campaign rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Missions per campaign.
    pub levels: u32,
    /// Integrity at the start of every mission.
    pub starting_integrity: f64,
    /// Integrity lost per wrong commander order.
    pub wrong_move_penalty: f64,
    /// Smallest mission key.
    pub key_min: i64,
    /// Largest mission key.
    pub key_max: i64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            levels: 6,
            starting_integrity: 100.0,
            wrong_move_penalty: 20.0,
            key_min: 10,
            key_max: 99,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Campaign rules.
    pub campaign: CampaignConfig,
    /// Tree snapshot layout.
    pub layout: LayoutOptions,
}

impl ArenaConfig {
    /// Parse TOML text and validate.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ArenaConfig = toml::from_str(text).map_err(|e| Error::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file and validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from an optional file, apply the environment overlay, validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Override fields from `ARENA_*` environment variables.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = lookup(ENV_LEVELS) {
            self.campaign.levels = parse_env(ENV_LEVELS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PENALTY) {
            self.campaign.wrong_move_penalty = parse_env(ENV_PENALTY, &raw)?;
        }
        Ok(())
    }

    /// Check every field's range.
    pub fn validate(&self) -> Result<()> {
        let c = &self.campaign;
        if c.levels == 0 {
            return Err(config_error("campaign.levels must be at least 1"));
        }
        validate_positive("campaign.starting_integrity", c.starting_integrity)?;
        if !(0.0..=c.starting_integrity).contains(&c.wrong_move_penalty) {
            return Err(config_error(format!(
                "campaign.wrong_move_penalty = {} must be between 0 and starting_integrity ({})",
                c.wrong_move_penalty, c.starting_integrity
            )));
        }
        if c.key_min > c.key_max {
            return Err(config_error(format!(
                "campaign.key_min ({}) must not exceed key_max ({})",
                c.key_min, c.key_max
            )));
        }
        let key_space = c.key_max.abs_diff(c.key_min).saturating_add(1);
        if key_space < u64::from(c.levels) {
            return Err(config_error(format!(
                "campaign key range {}..={} holds {} keys, fewer than {} levels",
                c.key_min, c.key_max, key_space, c.levels
            )));
        }
        validate_positive("layout.initial_spread", self.layout.initial_spread)?;
        validate_positive("layout.level_height", self.layout.level_height)?;
        Ok(())
    }
}

fn config_error(reason: impl Into<String>) -> Error {
    Error::Config {
        reason: reason.into(),
    }
}

fn validate_positive(field: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(config_error(format!(
            "{} = {} must be a positive number",
            field, value
        )));
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| config_error(format!("{}={:?} is not a valid value", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ArenaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.campaign.levels, 6);
        assert_eq!(config.layout.initial_spread, 300.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ArenaConfig::from_toml_str("[campaign]\nlevels = 3\n").unwrap();
        assert_eq!(config.campaign.levels, 3);
        assert_eq!(config.campaign.wrong_move_penalty, 20.0);
        assert_eq!(config.layout.level_height, 80.0);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            ArenaConfig::from_toml_str("").unwrap(),
            ArenaConfig::default()
        );
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = ArenaConfig::from_toml_str("[campaign\nlevels = ").unwrap_err();
        assert_eq!(err.kind(), "Config");
    }

    #[test]
    fn zero_levels_rejected() {
        let err = ArenaConfig::from_toml_str("[campaign]\nlevels = 0\n").unwrap_err();
        assert!(err.to_string().contains("levels"));
    }

    #[test]
    fn penalty_above_integrity_rejected() {
        let err =
            ArenaConfig::from_toml_str("[campaign]\nwrong_move_penalty = 150.0\n").unwrap_err();
        assert!(err.to_string().contains("wrong_move_penalty"));
    }

    #[test]
    fn key_range_too_small_rejected() {
        let err = ArenaConfig::from_toml_str("[campaign]\nkey_min = 1\nkey_max = 3\n").unwrap_err();
        assert!(err.to_string().contains("fewer than 6 levels"));
    }

    #[test]
    fn inverted_key_range_rejected() {
        assert!(ArenaConfig::from_toml_str("[campaign]\nkey_min = 50\nkey_max = 10\n").is_err());
    }

    #[test]
    fn non_positive_layout_rejected() {
        assert!(ArenaConfig::from_toml_str("[layout]\nlevel_height = 0.0\n").is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = [(ENV_LEVELS, "2"), (ENV_PENALTY, " 5.5 ")]
            .into_iter()
            .collect();
        let mut config = ArenaConfig::default();
        config
            .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.campaign.levels, 2);
        assert_eq!(config.campaign.wrong_move_penalty, 5.5);
    }

    #[test]
    fn bad_env_value_rejected() {
        let mut config = ArenaConfig::default();
        let err = config
            .apply_overrides(|name| (name == ENV_LEVELS).then(|| "many".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_LEVELS));
    }

    #[test]
    fn from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[campaign]\nlevels = 4\n\n[layout]\ninitial_spread = 120.0").unwrap();
        let config = ArenaConfig::from_file(file.path()).unwrap();
        assert_eq!(config.campaign.levels, 4);
        assert_eq!(config.layout.initial_spread, 120.0);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArenaConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.kind(), "Config");
    }
}

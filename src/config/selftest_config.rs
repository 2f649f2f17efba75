// src/config/selftest_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the `mathutils` self-test binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Optional path for the JSON report; no file is written when unset
    #[serde(default)]
    pub report_path: Option<String>,

    /// Sweep bounds
    pub sweep: SweepConfig,
}

/// Upper bounds for the exhaustive sweeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Every n in [2, factor_max] is factorized and cross-checked
    pub factor_max: i64,

    /// Every n in [0, bit_string_max] is converted and compared
    pub bit_string_max: u64,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        SelfTestConfig {
            log_level: "info".to_string(),
            report_path: None,
            sweep: SweepConfig::default(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            factor_max: 100_000,
            bit_string_max: 10_000,
        }
    }
}

impl SelfTestConfig {
    /// Load configuration with precedence: config file -> env vars -> defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if Path::new("mathutils.toml").exists() {
            builder = builder.add_source(File::with_name("mathutils.toml"));
        }

        builder = builder.add_source(
            Environment::with_prefix("MATHUTILS")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("MATHUTILS")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("sweep.factor_max", 100_000i64)?
            .set_default("sweep.bit_string_max", 10_000i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SelfTestConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.report_path, None);
        assert_eq!(config.sweep.factor_max, 100_000);
        assert_eq!(config.sweep.bit_string_max, 10_000);
    }

    #[test]
    fn test_load_without_file() {
        // Falls back to defaults when no config file exists
        let config = SelfTestConfig::load().unwrap_or_else(|_| SelfTestConfig::default());
        assert!(config.sweep.factor_max >= 2);
    }
}

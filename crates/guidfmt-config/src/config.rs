// crates/guidfmt-config/src/config.rs
// ============================================================================
// Module: guidfmt Configuration
// Description: Configuration loading and validation for the guidfmt CLI.
// Purpose: Provide strict config parsing with hard size and value limits.
// Dependencies: guidfmt-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file. An explicit path or the
//! `GUIDFMT_CONFIG` environment variable must name a readable file; the
//! default `guidfmt.toml` is optional and its absence yields defaults.
//! Unknown fields and out-of-range values are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use guidfmt_core::GuidLayout;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "guidfmt.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "GUIDFMT_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum total config path length.
pub const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Upper bound for `output.max_count`.
pub const MAX_COUNT_LIMIT: usize = 1_000_000;
/// Default for `output.max_count`.
const DEFAULT_MAX_COUNT: usize = 1024;

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Top-level guidfmt configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuidfmtConfig {
    /// Output rendering settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Layout used when the command line does not pick one.
    #[serde(default)]
    pub format: GuidLayout,
    /// Largest number of identifiers `guidfmt new` may print at once.
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: GuidLayout::default(),
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

/// Returns the default `output.max_count`.
const fn default_max_count() -> usize {
    DEFAULT_MAX_COUNT
}

impl GuidfmtConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let source = resolve_path(path, env::var_os(CONFIG_ENV_VAR))?;
        Self::load_source(&source)
    }

    /// Reads a resolved source; only a missing default file yields defaults.
    fn load_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        let bytes = match fs::read(source.path()) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound && !source.is_explicit() => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::Io(format!("{}: {err}", source.path().display())));
            }
        };
        Self::from_bytes(&bytes)
    }

    /// Parses and validates configuration from raw file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the contents are oversized, not UTF-8,
    /// not valid TOML, or fail validation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()
    }
}

impl OutputConfig {
    /// Validates output settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `max_count` is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_count == 0 || self.max_count > MAX_COUNT_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "output.max_count must be between 1 and {MAX_COUNT_LIMIT}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Where the configuration path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    /// Named on the command line or through the environment; must exist.
    Explicit(PathBuf),
    /// The default filename; may be absent.
    Default(PathBuf),
}

impl ConfigSource {
    /// Returns the resolved path.
    fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }

    /// Returns true when a missing file is an error.
    const fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

/// Resolves the config path from the CLI path, then the environment value.
fn resolve_path(
    path: Option<&Path>,
    env_path: Option<OsString>,
) -> Result<ConfigSource, ConfigError> {
    let source = match (path, env_path) {
        (Some(path), _) => ConfigSource::Explicit(path.to_path_buf()),
        (None, Some(env_path)) => ConfigSource::Explicit(PathBuf::from(env_path)),
        (None, None) => ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_NAME)),
    };
    if source.path().as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    Ok(source)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn resolve_path_prefers_cli_then_env_then_default() {
        let cli = Path::new("cli.toml");
        let env_path = || Some(OsString::from("env.toml"));

        let source = resolve_path(Some(cli), env_path()).unwrap();
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("cli.toml")));

        let source = resolve_path(None, env_path()).unwrap();
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("env.toml")));

        let source = resolve_path(None, None).unwrap();
        assert_eq!(source, ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_NAME)));
    }

    #[test]
    fn resolve_path_rejects_overlong_paths() {
        let long_path = "a".repeat(MAX_TOTAL_PATH_LENGTH + 1);
        let err = resolve_path(None, Some(OsString::from(&long_path))).unwrap_err();
        assert!(err.to_string().contains("max length"));
        let err = resolve_path(Some(Path::new(&long_path)), None).unwrap_err();
        assert!(err.to_string().contains("max length"));

        let at_limit = "a".repeat(MAX_TOTAL_PATH_LENGTH);
        assert!(resolve_path(None, Some(OsString::from(at_limit))).is_ok());
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::Default(dir.path().join(DEFAULT_CONFIG_NAME));
        assert_eq!(GuidfmtConfig::load_source(&source).unwrap(), GuidfmtConfig::default());
    }

    #[test]
    fn missing_env_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let source = resolve_path(None, Some(missing.into_os_string())).unwrap();
        let err = GuidfmtConfig::load_source(&source).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "expected io error, got {err}");
    }

    #[test]
    fn env_path_is_read_when_no_cli_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("env.toml");
        fs::write(&file, "[output]\nformat = \"N\"\n").unwrap();
        let source = resolve_path(None, Some(file.into_os_string())).unwrap();
        let config = GuidfmtConfig::load_source(&source).unwrap();
        assert_eq!(config.output.format, GuidLayout::CompactNoDashes);
    }

    #[test]
    fn present_default_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&file, "[output]\nmax_count = 0\n").unwrap();
        let err = GuidfmtConfig::load_source(&ConfigSource::Default(file)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "expected invalid config, got {err}");
    }
}

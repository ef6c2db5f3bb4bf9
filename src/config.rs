//! Configuration for the structured decoder.
//!
//! [`DecodeConfig`] controls which field names are treated as timestamps,
//! whether list-valued fields are walked during the rewrite pass, how a
//! multi-buffer merge reacts to a failing buffer, and an optional size cap on
//! incoming buffers. It is cheap to clone and can be loaded from YAML.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: 1
//! time_fields:
//!   - created_at
//!   - updated_at
//!   - valid_from
//! recurse_into_arrays: false
//! merge_policy: fail_fast
//! max_buffer_bytes: 10485760
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use hsds_types::DecodeConfig;
//!
//! let config = DecodeConfig::default();
//! config.validate().expect("default config is valid");
//! ```
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::STANDARD_TIME_FIELDS;

/// Runtime configuration for decoding.
///
/// # Fields
///
/// - `version`: Configuration format version
/// - `time_fields`: Keys whose string values are resolved as timestamps
/// - `recurse_into_arrays`: Also rewrite objects nested inside arrays
/// - `merge_policy`: Behavior of a merge when one buffer fails
/// - `max_buffer_bytes`: Optional upper bound on a single buffer
///
/// # Examples
///
/// ```rust
/// use hsds_types::{DecodeConfig, MergePolicy};
///
/// let config = DecodeConfig {
///     time_fields: vec!["created_at".into(), "published_at".into()],
///     merge_policy: MergePolicy::SkipFailedBuffers,
///     max_buffer_bytes: Some(1024 * 1024),
///     ..Default::default()
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DecodeConfig {
    /// Version of the configuration format.
    ///
    /// Default: `1`
    pub version: u32,

    /// Field names that are candidates for timestamp resolution, at any depth.
    ///
    /// The check is by key name only. A listed field holding a non-string or
    /// an unparseable string is left as it is.
    ///
    /// Default: [`STANDARD_TIME_FIELDS`]
    pub time_fields: Vec<String>,

    /// Whether objects nested inside list-valued fields are rewritten too.
    ///
    /// When `false`, only directly nested objects are visited, and anything
    /// inside an array is passed through untouched.
    ///
    /// Default: `false`
    pub recurse_into_arrays: bool,

    /// What [`decode_merged`](crate::Decoder::decode_merged) does when a buffer fails.
    ///
    /// Default: [`MergePolicy::FailFast`]
    pub merge_policy: MergePolicy,

    /// Maximum size of a single buffer, in bytes.
    ///
    /// Larger buffers are rejected with
    /// [`DecodeError::BufferTooLarge`](crate::DecodeError::BufferTooLarge)
    /// before parsing.
    ///
    /// Default: `None` (unlimited)
    pub max_buffer_bytes: Option<usize>,
}

/// Failure handling for multi-buffer merges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// The first failing buffer aborts the merge; later buffers are not decoded.
    #[default]
    FailFast,
    /// Failing buffers are logged and contribute nothing; the rest are merged.
    SkipFailedBuffers,
}

/// Errors that can occur when validating a [`DecodeConfig`].
///
/// These are start-up issues, surfaced by [`Decoder::new`](crate::Decoder::new).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// No time fields configured; nothing would ever be rewritten.
    #[error("time_fields must not be empty")]
    EmptyTimeFields,

    /// A configured time field is empty or whitespace-only.
    #[error("time_fields[{index}] is blank")]
    BlankTimeField {
        /// Position of the blank entry.
        index: usize,
    },

    /// `max_buffer_bytes` of zero rejects every buffer.
    #[error("max_buffer_bytes must be greater than zero")]
    ZeroBufferLimit,

    /// Only version 1 is understood.
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur when loading a YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

impl Default for DecodeConfig {
    /// # Defaults
    ///
    /// - `version`: 1
    /// - `time_fields`: [`STANDARD_TIME_FIELDS`]
    /// - `recurse_into_arrays`: false
    /// - `merge_policy`: [`MergePolicy::FailFast`]
    /// - `max_buffer_bytes`: None
    fn default() -> Self {
        Self {
            version: 1,
            time_fields: STANDARD_TIME_FIELDS.iter().map(|f| f.to_string()).collect(),
            recurse_into_arrays: false,
            merge_policy: MergePolicy::FailFast,
            max_buffer_bytes: None,
        }
    }
}

impl DecodeConfig {
    /// Validates internal consistency of this configuration.
    ///
    /// # Validation Rules
    ///
    /// 1. `version` must be `1`
    /// 2. `time_fields` must be non-empty and contain no blank names
    /// 3. `max_buffer_bytes`, if set, must be non-zero
    ///
    /// ```rust
    /// use hsds_types::{ConfigError, DecodeConfig};
    ///
    /// let config = DecodeConfig {
    ///     time_fields: Vec::new(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(config.validate(), Err(ConfigError::EmptyTimeFields));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != 1 {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        if self.time_fields.is_empty() {
            return Err(ConfigError::EmptyTimeFields);
        }
        if let Some(index) = self.time_fields.iter().position(|f| f.trim().is_empty()) {
            return Err(ConfigError::BlankTimeField { index });
        }
        if self.max_buffer_bytes == Some(0) {
            return Err(ConfigError::ZeroBufferLimit);
        }
        Ok(())
    }

    /// Load and validate a YAML configuration file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration from a string.
    ///
    /// Missing keys take their default values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DecodeConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_is_valid() {
        let config = DecodeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.time_fields.len(), STANDARD_TIME_FIELDS.len());
        assert!(config.time_fields.iter().any(|f| f == "dtstart"));
        assert_eq!(config.merge_policy, MergePolicy::FailFast);
    }

    #[test]
    fn blank_time_field_rejected() {
        let config = DecodeConfig {
            time_fields: vec!["created_at".into(), "  ".into()],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BlankTimeField { index: 1 })
        );
    }

    #[test]
    fn zero_buffer_limit_rejected() {
        let config = DecodeConfig {
            max_buffer_bytes: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBufferLimit));
    }

    #[test]
    fn unknown_version_rejected() {
        let config = DecodeConfig {
            version: 7,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedVersion(7)));
    }

    #[test]
    fn load_partial_yaml_uses_defaults() {
        let yaml = r#"
merge_policy: skip_failed_buffers
max_buffer_bytes: 4096
"#;

        let config = DecodeConfig::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(config.version, 1);
        assert_eq!(config.merge_policy, MergePolicy::SkipFailedBuffers);
        assert_eq!(config.max_buffer_bytes, Some(4096));
        assert_eq!(config.time_fields, DecodeConfig::default().time_fields);
        assert!(!config.recurse_into_arrays);
    }

    #[test]
    fn load_from_file() {
        let yaml = r#"
version: 1
time_fields:
  - created_at
  - published_at
recurse_into_arrays: true
"#;

        let mut temp_file = NamedTempFile::new().expect("temp file");
        temp_file.write_all(yaml.as_bytes()).expect("write yaml");

        let config = DecodeConfig::from_yaml_file(temp_file.path()).expect("loads");
        assert_eq!(config.time_fields, vec!["created_at", "published_at"]);
        assert!(config.recurse_into_arrays);
    }

    #[test]
    fn invalid_yaml_config_surfaces_validation_error() {
        let yaml = "time_fields: []\n";
        let err = DecodeConfig::from_yaml_str(yaml).expect_err("empty fields rejected");
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigError::EmptyTimeFields)
        ));
        assert!(err.to_string().contains("time_fields must not be empty"));
    }

    #[test]
    fn malformed_yaml_reports_parse_error() {
        let err = DecodeConfig::from_yaml_str("merge_policy: [unclosed").expect_err("bad yaml");
        assert!(matches!(err, ConfigLoadError::YamlParse(_)));
    }

    #[test]
    fn missing_file_reports_read_error() {
        let err = DecodeConfig::from_yaml_file("/nonexistent/hsds-decode.yaml")
            .expect_err("missing file");
        assert!(matches!(err, ConfigLoadError::FileRead(_)));
    }
}

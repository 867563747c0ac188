// Conversion configuration
//
// A ConvertConfig names the target layout for a conversion. Every field is
// optional; whatever is left out keeps the source format's value. Files are
// RON or JSON, picked by extension.

use crate::format::{Format, FormatError};
use ron::{from_str as ron_from_str, to_string as ron_to_string};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON serialization error: {0}")]
    RonWrite(#[from] ron::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config file extension: {0}")]
    UnsupportedExtension(String),

    #[error("Invalid target format: {0}")]
    InvalidTarget(#[from] FormatError),
}

/// Target layout; `None` keeps the source value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits_per_sample: Option<u16>,
}

impl TargetFormat {
    /// Fill the unset fields from `source`
    pub fn resolve(&self, source: Format) -> Result<Format, FormatError> {
        Format::new(
            self.channels.unwrap_or(source.channels()),
            self.bits_per_sample.unwrap_or(source.bits_per_sample()),
            source.sample_rate(),
        )
    }

    /// Fields set in `overrides` win over the fields in `self`
    pub fn overridden_by(self, overrides: TargetFormat) -> TargetFormat {
        TargetFormat {
            channels: overrides.channels.or(self.channels),
            bits_per_sample: overrides.bits_per_sample.or(self.bits_per_sample),
        }
    }
}

/// Conversion settings loaded from disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub target: TargetFormat,
}

impl ConvertConfig {
    /// Load a `.ron` or `.json` config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        let contents = std::fs::read_to_string(path)?;

        let config = match extension.as_str() {
            "ron" => Self::from_ron(&contents)?,
            "json" => Self::from_json(&contents)?,
            _ => return Err(ConfigError::UnsupportedExtension(extension)),
        };
        tracing::debug!(path = %path.display(), ?config, "loaded conversion config");
        Ok(config)
    }

    pub fn from_ron(data: &str) -> Result<Self, ConfigError> {
        Ok(ron_from_str(data)?)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron_to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_unset_fields() {
        let target = TargetFormat {
            channels: Some(1),
            bits_per_sample: None,
        };
        let resolved = target.resolve(Format::CD).unwrap();
        assert_eq!(resolved, Format::mono(16, 44100).unwrap());
    }

    #[test]
    fn test_resolve_rejects_zero() {
        let target = TargetFormat {
            channels: Some(0),
            bits_per_sample: None,
        };
        assert_eq!(target.resolve(Format::CD), Err(FormatError::ZeroChannels));
    }

    #[test]
    fn test_overrides() {
        let file = TargetFormat {
            channels: Some(1),
            bits_per_sample: Some(8),
        };
        let flags = TargetFormat {
            channels: None,
            bits_per_sample: Some(24),
        };
        let merged = file.overridden_by(flags);
        assert_eq!(merged.channels, Some(1));
        assert_eq!(merged.bits_per_sample, Some(24));
    }

    #[test]
    fn test_ron_and_json_agree() {
        let ron = ConvertConfig::from_ron("(target: (channels: Some(2), bits_per_sample: Some(24)))")
            .unwrap();
        let json =
            ConvertConfig::from_json(r#"{"target": {"channels": 2, "bits_per_sample": 24}}"#)
                .unwrap();
        assert_eq!(ron, json);
        assert_eq!(ron.target.channels, Some(2));
    }

    #[test]
    fn test_missing_fields_default() {
        let config = ConvertConfig::from_json("{}").unwrap();
        assert_eq!(config, ConvertConfig::default());
        let config = ConvertConfig::from_ron("(target: (bits_per_sample: Some(8)))").unwrap();
        assert_eq!(config.target.channels, None);
        assert_eq!(config.target.bits_per_sample, Some(8));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = ConvertConfig {
            target: TargetFormat {
                channels: Some(1),
                bits_per_sample: Some(16),
            },
        };
        assert_eq!(ConvertConfig::from_ron(&config.to_ron().unwrap()).unwrap(), config);
        assert_eq!(ConvertConfig::from_json(&config.to_json().unwrap()).unwrap(), config);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convert.ron");
        std::fs::write(&path, "(target: (channels: Some(1)))").unwrap();
        let config = ConvertConfig::load(&path).unwrap();
        assert_eq!(config.target.channels, Some(1));

        let bad = dir.path().join("convert.toml");
        std::fs::write(&bad, "").unwrap();
        assert!(matches!(
            ConvertConfig::load(&bad),
            Err(ConfigError::UnsupportedExtension(ext)) if ext == "toml"
        ));
    }
}

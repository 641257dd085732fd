//! Persistence for the codec-compatibility configuration.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::error::CodecStoreError;
use super::types::CodecConfig;

/// A key-value style store for the codec configuration.
pub trait CodecStore: Send + Sync {
    /// Loads the configuration, creating it from defaults when absent.
    ///
    /// Missing subkeys are filled from defaults, never left absent.
    fn load(&self) -> Result<CodecConfig, CodecStoreError>;

    /// Persists the configuration.
    fn save(&self, config: &CodecConfig) -> Result<(), CodecStoreError>;

    /// Loads the configuration, falling back to built-in defaults on any
    /// store failure. Never fatal.
    fn load_or_default(&self) -> CodecConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load codec config, using defaults: {}", e);
                CodecConfig::default()
            }
        }
    }
}

/// JSON-file backed codec configuration store.
pub struct JsonCodecStore {
    path: PathBuf,
}

impl JsonCodecStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CodecStore for JsonCodecStore {
    fn load(&self) -> Result<CodecConfig, CodecStoreError> {
        if !self.path.exists() {
            let defaults = CodecConfig::default();
            self.save(&defaults)?;
            return Ok(defaults);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| CodecStoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        // Serde defaults fill any missing subkeys.
        serde_json::from_str(&contents).map_err(|e| CodecStoreError::Malformed {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn save(&self, config: &CodecConfig) -> Result<(), CodecStoreError> {
        let json = serde_json::to_string_pretty(config).map_err(|e| CodecStoreError::Malformed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&self.path, json).map_err(|e| CodecStoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default_file_when_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codecs.json");
        let store = JsonCodecStore::new(&path);

        let config = store.load().unwrap();
        assert_eq!(config, CodecConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonCodecStore::new(dir.path().join("codecs.json"));

        let mut config = CodecConfig::default();
        config.problematic_codecs.video.push("mpeg2video".to_string());
        config.version = "1.1".to_string();
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_fills_missing_subkeys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codecs.json");
        fs::write(&path, r#"{"problematic_codecs": {"video": ["vc1"]}}"#).unwrap();

        let config = JsonCodecStore::new(&path).load().unwrap();
        assert!(config.is_video_problematic("vc1"));
        assert!(config.is_audio_problematic("dts"));
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn test_malformed_file_reports_error_and_default_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codecs.json");
        fs::write(&path, "{ this is not json").unwrap();

        let store = JsonCodecStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(CodecStoreError::Malformed { .. })
        ));
        assert_eq!(store.load_or_default(), CodecConfig::default());
    }
}

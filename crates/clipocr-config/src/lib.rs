use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::export::ExportConfig;
use self::log::LogConfig;
use self::ocr::OcrConfig;
use self::ui::UiConfig;

pub mod export;
pub mod log;
pub mod ocr;
pub mod ui;

pub const ENV_TESSDATA_DIR: &str = "CLIPOCR_TESSDATA_DIR";
pub const ENV_TESSERACT_BIN: &str = "CLIPOCR_TESSERACT_BIN";
pub const ENV_LOG: &str = "CLIPOCR_LOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub ui: UiConfig,
    pub export: ExportConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults, then the JSON file if one is given, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_TESSDATA_DIR).filter(|v| !v.is_empty()) {
            self.ocr.tessdata_dir = PathBuf::from(dir);
        }

        if let Some(bin) = lookup(ENV_TESSERACT_BIN).filter(|v| !v.is_empty()) {
            self.ocr.tesseract_bin = PathBuf::from(bin);
        }

        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log.filter = filter;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ocr.language, "chi_sim");
        assert_eq!(config.ui.thumbnail_width, 300);
        assert_eq!(config.export.header, "识别结果");
        assert_eq!(config.log.filter, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_language_data_location() {
        let ocr = OcrConfig {
            tessdata_dir: PathBuf::from("/data/tess"),
            ..OcrConfig::default()
        };
        assert_eq!(
            ocr.language_data_path(),
            PathBuf::from("/data/tess/chi_sim.traineddata")
        );
        assert_eq!(
            ocr.language_data_url(),
            "https://github.com/tesseract-ocr/tessdata/raw/main/chi_sim.traineddata"
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ocr": {{ "tessdata_dir": "/usr/share/tessdata" }} }}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.ocr.tessdata_dir, PathBuf::from("/usr/share/tessdata"));
        assert_eq!(config.ocr.language, "chi_sim");
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_TESSDATA_DIR, "/tmp/tessdata"),
            (ENV_TESSERACT_BIN, ""),
            (ENV_LOG, "debug"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.ocr.tessdata_dir, PathBuf::from("/tmp/tessdata"));
        // empty values are ignored
        assert_eq!(config.ocr.tesseract_bin, PathBuf::from("tesseract"));
        assert_eq!(config.log.filter, "debug");
    }
}

//! Optional TOML configuration passed with `--config`.
//!
//! ```toml
//! name = "Ada"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::io::file_reader::{ReadError, read_file_content};

/// Application configuration (TOML).
///
/// `name` is kept as a raw TOML value so that a non-string entry reaches the
/// greeter and is reported as a type error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Name to greet when `--name` is not given.
    pub name: Option<toml::Value>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Load config from a TOML file through the file reader.
///
/// Read failures the reader swallows leave the defaults in place.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let Some(contents) = read_file_content(path)? else {
        warn!("Using default configuration: {} could not be read", path.display());
        return Ok(AppConfig::default());
    };
    let cfg = parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    debug!(?cfg, "loaded config");
    Ok(cfg)
}

fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::io::file_reader::ReadErrorKind;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("").expect("parse"), AppConfig::default());
    }

    #[test]
    fn keeps_name_value_untyped() {
        let cfg = parse_config("name = 42\n").expect("parse");
        assert_eq!(cfg.name, Some(toml::Value::Integer(42)));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse_config("nmae = \"typo\"\n").is_err());
    }

    #[test]
    fn load_reads_name_from_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "name = \"Ada\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.name, Some(toml::Value::String("Ada".into())));
    }

    #[test]
    fn load_missing_file_propagates_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_config(&temp.path().join("missing.toml")).unwrap_err();
        match err {
            ConfigError::Read(err) => assert_eq!(err.kind(), ReadErrorKind::NotFound),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_toml_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "name = \n").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}

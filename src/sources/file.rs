//! File-based document source.

use super::{DocumentSource, Format};
use crate::error::{Result, SchemaError};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// File-based document source.
///
/// Loads JSON, YAML or TOML documents, detecting the format from the file
/// extension unless one is set explicitly.
///
/// # Examples
///
/// ```rust,no_run
/// use confguard::sources::FileSource;
///
/// let source = FileSource::new("config/fruit.json");
/// ```
pub struct FileSource {
    path: PathBuf,
    format: Option<Format>,
}

impl FileSource {
    /// Create a new file source with automatic format detection.
    ///
    /// The format is detected from the file extension:
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    /// Read the file as `format` regardless of its extension.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    fn format(&self) -> Result<Format> {
        match self.format {
            Some(format) => Ok(format),
            None => Format::from_path(&self.path),
        }
    }
}

impl DocumentSource for FileSource {
    fn load(&self) -> Result<Value> {
        let format = self.format()?;

        if !self.path.exists() {
            return Err(SchemaError::Load(format!(
                "Document file not found: {}",
                self.path.display()
            )));
        }

        let text = fs::read_to_string(&self.path)?;
        format.parse(&text).map_err(|e| match e {
            SchemaError::Parse(reason) => {
                SchemaError::Parse(format!("{}: {}", self.path.display(), reason))
            }
            other => other,
        })
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fruit.json");
        fs::write(&path, r#"{"Fruit": "Apple", "NumberConsumed": 3}"#).unwrap();

        let value = FileSource::new(&path).load().unwrap();
        assert_eq!(value, json!({"Fruit": "Apple", "NumberConsumed": 3}));
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fruit.conf");
        fs::write(&path, r#"{"Fruit": "Apple"}"#).unwrap();

        assert!(FileSource::new(&path).load().is_err());
        let value = FileSource::new(&path).with_format(Format::Json).load().unwrap();
        assert_eq!(value, json!({"Fruit": "Apple"}));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let source = FileSource::new("/nonexistent/fruit.json");
        assert!(matches!(source.load(), Err(SchemaError::Load(_))));
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        match FileSource::new(&path).load() {
            Err(SchemaError::Parse(reason)) => assert!(reason.contains("broken.json")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_name() {
        let source = FileSource::new("fruit.json");
        assert!(source.name().contains("fruit.json"));
    }
}

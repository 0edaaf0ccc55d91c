//! Document formats.

use crate::error::{Result, SchemaError};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Text formats a document can be read from or a template written in.
///
/// JSON is always available; YAML and TOML need the `yaml` and `toml` cargo
/// features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `.json`
    Json,
    /// `.yaml`, `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl Format {
    /// Detect the format from a file extension (without the dot).
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnsupportedFormat`] for unknown extensions.
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => Err(SchemaError::UnsupportedFormat(format!(
                "{}. Supported: .json, .yaml, .yml, .toml",
                other
            ))),
        }
    }

    /// Detect the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnsupportedFormat`] if the path has no
    /// extension or an unknown one.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                SchemaError::UnsupportedFormat(format!(
                    "unable to determine format for: {}",
                    path.display()
                ))
            })?;
        Self::from_extension(extension)
    }

    /// Parse `text` into a document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] for malformed text and
    /// [`SchemaError::FeatureNotEnabled`] for a disabled format.
    pub fn parse(self, text: &str) -> Result<Value> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| SchemaError::Parse(e.to_string())),
            #[cfg(feature = "yaml")]
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| SchemaError::Parse(e.to_string())),
            #[cfg(not(feature = "yaml"))]
            Self::Yaml => Err(SchemaError::FeatureNotEnabled("yaml")),
            #[cfg(feature = "toml")]
            Self::Toml => toml::from_str(text).map_err(|e| SchemaError::Parse(e.to_string())),
            #[cfg(not(feature = "toml"))]
            Self::Toml => Err(SchemaError::FeatureNotEnabled("toml")),
        }
    }

    /// Render a document as text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] if the value cannot be expressed in
    /// this format (TOML has no `null`, for instance) and
    /// [`SchemaError::FeatureNotEnabled`] for a disabled format.
    pub fn render(self, value: &Value) -> Result<String> {
        match self {
            Self::Json => {
                serde_json::to_string_pretty(value).map_err(|e| SchemaError::Parse(e.to_string()))
            }
            #[cfg(feature = "yaml")]
            Self::Yaml => {
                serde_yaml::to_string(value).map_err(|e| SchemaError::Parse(e.to_string()))
            }
            #[cfg(not(feature = "yaml"))]
            Self::Yaml => Err(SchemaError::FeatureNotEnabled("yaml")),
            #[cfg(feature = "toml")]
            Self::Toml => {
                toml::to_string_pretty(value).map_err(|e| SchemaError::Parse(e.to_string()))
            }
            #[cfg(not(feature = "toml"))]
            Self::Toml => Err(SchemaError::FeatureNotEnabled("toml")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
            Self::Toml => f.write_str("toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("json").unwrap(), Format::Json);
        assert_eq!(Format::from_extension("YML").unwrap(), Format::Yaml);
        assert_eq!(Format::from_extension("toml").unwrap(), Format::Toml);
        assert!(Format::from_extension("txt").is_err());
    }

    #[test]
    fn test_from_path_without_extension() {
        assert!(Format::from_path(Path::new("config")).is_err());
        assert_eq!(Format::from_path(Path::new("a/b.yaml")).unwrap(), Format::Yaml);
    }

    #[test]
    fn test_parse_json() {
        let value = Format::Json.parse(r#"{"Fruit": "Apple", "Count": 2}"#).unwrap();
        assert_eq!(value, json!({"Fruit": "Apple", "Count": 2}));
        assert!(matches!(Format::Json.parse("{"), Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_json_preserves_key_order() {
        let value = Format::Json.parse(r#"{"b": 1, "a": 2}"#).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_parse_yaml() {
        let value = Format::Yaml.parse("Fruit: Apple\nWeights:\n  - 1.5\n  - 2\n").unwrap();
        assert_eq!(value, json!({"Fruit": "Apple", "Weights": [1.5, 2]}));
    }

    #[cfg(not(feature = "yaml"))]
    #[test]
    fn test_yaml_disabled() {
        assert!(matches!(
            Format::Yaml.parse("a: 1"),
            Err(SchemaError::FeatureNotEnabled("yaml"))
        ));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_round_trip_of_template() {
        let template = json!({"Fruit": "Name of the fruit."});
        let text = Format::Toml.render(&template).unwrap();
        assert_eq!(Format::Toml.parse(&text).unwrap(), template);
    }
}

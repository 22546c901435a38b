use log::debug;
use markdown_spans_engine::{InlineError, InlineRules};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid inline rules in {config_path}: {source}")]
    InvalidRules {
        config_path: PathBuf,
        source: InlineError,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delimiter rules for inline parsing. Missing means the built-in
    /// code, bold, italic order.
    #[serde(default)]
    pub inline: InlineRules,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            debug!("no config at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = Self::from_toml_str(&content, config_path)?;
        debug!(
            "loaded {} delimiter rules from {}",
            config.inline.delimiters.len(),
            config_path.display()
        );

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-spans");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Parses and validates config content; `config_path` is only used in
    /// error messages.
    fn from_toml_str(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config
            .inline
            .validate()
            .map_err(|source| ConfigError::InvalidRules {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_spans_engine::{DelimitedKind, DelimiterRule, TextSpan, text_to_text_nodes_with};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-spans/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            inline: InlineRules {
                delimiters: vec![
                    DelimiterRule::new("`", DelimitedKind::Code),
                    DelimiterRule::new("_", DelimitedKind::Italic),
                ],
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_inline_section_uses_default_rules() {
        let config = Config::from_toml_str("", Path::new("empty.toml")).unwrap();
        assert_eq!(config.inline, InlineRules::default());
    }

    #[test]
    fn test_rules_from_toml() {
        let config_content = r#"
[[inline.delimiters]]
delimiter = "`"
kind = "code"

[[inline.delimiters]]
delimiter = "__"
kind = "bold"
"#;

        let config = Config::from_toml_str(config_content, Path::new("rules.toml")).unwrap();
        assert_eq!(
            config.inline.delimiters,
            vec![
                DelimiterRule::new("`", DelimitedKind::Code),
                DelimiterRule::new("__", DelimitedKind::Bold),
            ]
        );

        let spans = text_to_text_nodes_with("a __b__ `c`", &config.inline).unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("a "),
                TextSpan::bold("b"),
                TextSpan::plain(" "),
                TextSpan::code("c"),
            ]
        );
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let config_content = r#"
[[inline.delimiters]]
delimiter = "~~"
kind = "strike"
"#;

        let result = Config::from_toml_str(config_content, Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_shadowed_rules_are_rejected() {
        let config_content = r#"
[[inline.delimiters]]
delimiter = "*"
kind = "italic"

[[inline.delimiters]]
delimiter = "**"
kind = "bold"
"#;

        let result = Config::from_toml_str(config_content, Path::new("order.toml"));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRules {
                source: InlineError::ShadowedDelimiter { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config::default();

        test_config.save_to_path(&config_file).unwrap();
        assert!(config_file.exists(), "Config file should exist");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "inline = 3").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}

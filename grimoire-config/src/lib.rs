//! Shared configuration loader for the grimoire tools.
//!
//! `defaults/grimoire.default.toml` is embedded into every binary so that the
//! documented defaults and runtime behavior stay in sync. Applications layer a
//! user file and individual overrides on top via [`Loader`] before
//! deserializing into [`GrimoireConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use grimoire_parser::rulebook::DocType;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/grimoire.default.toml");

/// Top-level configuration consumed by grimoire applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GrimoireConfig {
    #[serde(default)]
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

/// One rulebook file. Without `doc_type` the type comes from the file's header
/// line and cantrips found in it are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub doc_type: Option<DocType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub formats: Vec<String>,
    pub json: JsonOutputConfig,
    pub tsv: TsvOutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonOutputConfig {
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TsvOutputConfig {
    pub line_break_separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GrimoireConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GrimoireConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.input.sources.is_empty());
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.output.formats, vec!["tsv", "json", "yaml"]);
        assert!(config.output.json.pretty);
        assert_eq!(config.output.tsv.line_break_separator, " // ");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.dir", "build/records")
            .expect("override to apply")
            .set_override("output.formats", vec!["yaml"])
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.dir, PathBuf::from("build/records"));
        assert_eq!(config.output.formats, vec!["yaml"]);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[[input.sources]]
path = "06-spells.txt"
doc_type = "spells"

[[input.sources]]
path = "07-ephemera.txt"

[output.json]
pretty = false
"#
        )
        .unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();

        assert_eq!(
            config.input.sources,
            vec![
                SourceConfig {
                    path: "06-spells.txt".into(),
                    doc_type: Some(DocType::Spells),
                },
                SourceConfig {
                    path: "07-ephemera.txt".into(),
                    doc_type: None,
                },
            ]
        );
        assert!(!config.output.json.pretty);
        assert_eq!(config.output.formats, vec!["tsv", "json", "yaml"]);
    }

    #[test]
    fn rejects_unknown_doc_type() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[[input.sources]]\npath = \"a.txt\"\ndoc_type = \"bestiary\"\n").unwrap();

        let err = Loader::new().with_file(file.path()).build().unwrap_err();
        assert!(err.to_string().contains("bestiary"));
    }

    #[test]
    fn missing_required_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Loader::new()
            .with_file(dir.path().join("grimoire.toml"))
            .build()
            .is_err());
        assert!(Loader::new()
            .with_optional_file(dir.path().join("grimoire.toml"))
            .build()
            .is_ok());
    }
}

//! Configuration loading
//!
//! Settings are loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `DAOGEN_` prefix)
//! 2. `./daogen.toml` (project)
//! 3. `~/.config/daogen/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # daogen.toml
//! package_name = "com.example.models"
//! sql_style = "interpolation"
//! test_style = "unit_spec"
//! collection_shape = "vector"
//! date_time_binding = "joda_time"
//! tables_to_skip = ["schema_version"]
//! ```
//!
//! Enumerated options stay plain strings at this layer; [`GeneratorSettings::resolve`]
//! turns them into the closed enums of [`GeneratorConfig`].

use super::{
    CollectionShape, DateTimeBinding, ExecutionMode, GeneratorConfig, LineBreak, SqlStyle,
    TestStyle,
};
use crate::error::{Error, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = "daogen.toml";

/// Raw generator settings as read from configuration sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Package of generated sources
    pub package_name: String,
    /// Root of generated model sources
    pub model_source_dir: PathBuf,
    /// Root of generated test sources
    pub test_source_dir: PathBuf,
    /// `interpolation` or `query_dsl`
    pub sql_style: String,
    /// `flat_spec`, `unit_spec`, `acceptance_spec` or `none`
    pub test_style: String,
    /// `list`, `vector`, `array` or `parametric_builder`
    pub collection_shape: String,
    /// `joda_time` or `java_time`
    pub date_time_binding: String,
    /// `sync` or `async`
    pub execution_mode: String,
    /// `lf` or `crlf`
    pub line_break: String,
    /// Map rows with `autoConstruct`
    pub auto_derive_mapping: bool,
    /// Give session parameters default values
    pub default_session_injection: bool,
    /// Always emit a `case class`
    pub force_simple_value_type: bool,
    /// Class name override
    pub target_class_name: Option<String>,
    /// Tables the CLI skips
    pub tables_to_skip: Vec<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for GeneratorSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            package_name: config.package_name.clone(),
            model_source_dir: config.model_source_dir.clone(),
            test_source_dir: config.test_source_dir.clone(),
            sql_style: config.sql_style.to_string(),
            test_style: config.test_style.to_string(),
            collection_shape: config.collection_shape.to_string(),
            date_time_binding: config.date_time_binding.to_string(),
            execution_mode: config.execution_mode.to_string(),
            line_break: config.line_break.to_string(),
            auto_derive_mapping: config.auto_derive_mapping,
            default_session_injection: config.default_session_injection,
            force_simple_value_type: config.force_simple_value_type,
            target_class_name: config.target_class_name.clone(),
            tables_to_skip: config.tables_to_skip.clone(),
        }
    }
}

impl GeneratorSettings {
    /// Load settings from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, or
    /// a value has the wrong type.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed("DAOGEN_").split("__").lowercase(true));

        let settings = figment.extract()?;
        Ok(settings)
    }

    /// Load settings from a specific file, still honouring the environment
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("DAOGEN_").split("__").lowercase(true))
            .extract()?;

        Ok(settings)
    }

    /// The user-level configuration file
    ///
    /// Returns `~/.config/daogen/config.toml` on Linux, or `./daogen.toml`
    /// when no configuration directory is known.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG_FILE),
            |config_dir| config_dir.join("daogen").join("config.toml"),
        )
    }

    /// Create the directory of [`Self::recommended_path`]
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_config_dir() -> std::io::Result<PathBuf> {
        let config_path = Self::recommended_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(config_path)
    }

    /// Resolve raw strings into a typed [`GeneratorConfig`]
    ///
    /// An unrecognised `test_style` disables test-spec generation with a
    /// warning and leaves model generation untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOption`] for any other unrecognised tag and
    /// [`Error::InvalidPackageName`] for a malformed package.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let test_style = match self.test_style.parse::<TestStyle>() {
            Ok(style) => style,
            Err(Error::UnsupportedOption { field, value }) => {
                tracing::warn!(field, %value, "Unsupported test style, test spec generation disabled");
                TestStyle::None
            }
            Err(other) => return Err(other),
        };

        let config = GeneratorConfig {
            package_name: self.package_name.clone(),
            model_source_dir: self.model_source_dir.clone(),
            test_source_dir: self.test_source_dir.clone(),
            sql_style: self.sql_style.parse::<SqlStyle>()?,
            test_style,
            collection_shape: self.collection_shape.parse::<CollectionShape>()?,
            date_time_binding: self.date_time_binding.parse::<DateTimeBinding>()?,
            execution_mode: self.execution_mode.parse::<ExecutionMode>()?,
            line_break: self.line_break.parse::<LineBreak>()?,
            auto_derive_mapping: self.auto_derive_mapping,
            default_session_injection: self.default_session_injection,
            force_simple_value_type: self.force_simple_value_type,
            target_class_name: self.target_class_name.clone(),
            tables_to_skip: self.tables_to_skip.clone(),
        };

        config.validate()?;
        Ok(config)
    }
}

//! Generated artifacts and their output paths

use crate::config::GeneratorConfig;
use crate::naming::NameHelpers;
use std::path::PathBuf;

/// One generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    /// File contents
    pub content: String,
    /// Description for output
    pub description: String,
}

impl GeneratedFile {
    /// Create a generated file
    #[must_use]
    pub fn new(path: PathBuf, content: String, description: impl Into<String>) -> Self {
        Self {
            path,
            content,
            description: description.into(),
        }
    }
}

/// Output of one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Class name the files are named after
    pub class_name: String,
    /// Model and accessors
    pub model: GeneratedFile,
    /// Test spec, absent when test generation is off
    pub test_spec: Option<GeneratedFile>,
}

impl GeneratedArtifact {
    /// `<model_source_dir>/<package path>/<Class>.scala`
    #[must_use]
    pub fn model_path(config: &GeneratorConfig, class_name: &str) -> PathBuf {
        config
            .model_source_dir
            .join(NameHelpers::package_path(&config.package_name))
            .join(format!("{class_name}.scala"))
    }

    /// `<test_source_dir>/<package path>/<Class>Spec.scala`
    #[must_use]
    pub fn test_spec_path(config: &GeneratorConfig, class_name: &str) -> PathBuf {
        config
            .test_source_dir
            .join(NameHelpers::package_path(&config.package_name))
            .join(format!("{class_name}Spec.scala"))
    }

    /// Every file in write order
    #[must_use]
    pub fn files(&self) -> Vec<&GeneratedFile> {
        std::iter::once(&self.model)
            .chain(self.test_spec.as_ref())
            .collect()
    }
}

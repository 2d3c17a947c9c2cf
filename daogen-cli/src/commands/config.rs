//! Inspect and scaffold generator settings

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use console::style;
use daogen::GeneratorSettings;
use std::fs;
use std::path::PathBuf;

/// Configuration commands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write the default settings to the user configuration file
    Init {
        /// Write here instead of the user configuration directory
        #[arg(long)]
        path: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective settings as TOML
    Show {
        /// Configuration file to use instead of the standard locations
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl ConfigCommand {
    /// Execute the config command
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded, serialised or written.
    pub fn execute(self) -> Result<()> {
        match self {
            Self::Init { path, force } => init(path, force),
            Self::Show { config } => show(config),
        }
    }
}

fn init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let target = match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            path
        }
        None => GeneratorSettings::create_config_dir().context("Failed to create configuration directory")?,
    };

    if target.exists() && !force {
        bail!(
            "Configuration file already exists: {} (use --force to replace it)",
            target.display()
        );
    }

    let rendered = toml::to_string(&GeneratorSettings::default()).context("Failed to serialise settings")?;
    fs::write(&target, rendered)
        .with_context(|| format!("Failed to write configuration: {}", target.display()))?;

    println!(
        "  {} Created configuration: {}",
        style("✓").green(),
        style(target.display()).green()
    );
    Ok(())
}

fn show(config: Option<PathBuf>) -> Result<()> {
    let settings = match config {
        Some(path) => GeneratorSettings::load_from(&path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => GeneratorSettings::load().context("Failed to load configuration")?,
    };
    settings.resolve().context("Invalid configuration")?;

    let rendered = toml::to_string(&settings).context("Failed to serialise settings")?;
    print!("{rendered}");
    Ok(())
}

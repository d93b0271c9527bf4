pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "processor")]
#[command(about = "Copies a file to a processed_ sibling and prints the new path")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// File to duplicate
    #[arg(value_parser = clap::value_parser!(OsString), allow_hyphen_values = true)]
    pub input_path: Option<OsString>,

    /// Anything after the input path is ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra_args: Vec<OsString>,
}

impl CliConfig {
    pub fn for_input(input_path: impl Into<OsString>) -> Self {
        Self {
            input_path: Some(input_path.into()),
            extra_args: Vec::new(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&Path> {
        self.input_path.as_deref().map(Path::new)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("input_path", &self.input_path)?;
        if !self.extra_args.is_empty() {
            tracing::debug!("Ignoring {} extra argument(s)", self.extra_args.len());
        }
        Ok(())
    }
}

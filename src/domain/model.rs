use crate::utils::error::{ProcessorError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const OUTPUT_PREFIX: &str = "processed_";

/// Source and destination of one copy, decided before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl CopyPlan {
    pub fn for_input(input: impl Into<PathBuf>) -> Result<Self> {
        let input = input.into();
        let output = output_path_for(&input)?;
        Ok(Self { input, output })
    }
}

/// `dir/name` becomes `dir/processed_name`. A bare file name stays bare.
pub fn output_path_for(input: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .ok_or_else(|| ProcessorError::InputNotFound {
            path: input.to_path_buf(),
        })?;

    let mut name = OsString::from(OUTPUT_PREFIX);
    name.push(file_name);

    Ok(match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}

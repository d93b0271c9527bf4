use crate::core::Storage;
use crate::utils::error::{ProcessorError, Result};
use std::fs::Metadata;
use std::path::Path;
use tokio::fs;

#[cfg(unix)]
fn same_file(a: &Metadata, b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn same_file(_a: &Metadata, _b: &Metadata) -> bool {
    false
}

/// A destination that already resolves to the source would be truncated before it is read.
async fn resolves_to_same_file(from: &Path, to: &Path) -> bool {
    let (Ok(source), Ok(dest)) = (fs::metadata(from).await, fs::metadata(to).await) else {
        return false;
    };
    if same_file(&source, &dest) {
        return true;
    }
    match (fs::canonicalize(from).await, fs::canonicalize(to).await) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn is_file(&self, path: &Path) -> bool {
        match fs::metadata(path).await {
            Ok(metadata) => metadata.is_file(),
            Err(e) => {
                tracing::debug!("metadata({}) failed: {}", path.display(), e);
                false
            }
        }
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> Result<u64> {
        if resolves_to_same_file(from, to).await {
            tracing::debug!("{} and {} are the same file", from.display(), to.display());
            return Err(ProcessorError::CopyFailed {
                input: from.to_path_buf(),
                output: to.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "source and destination are the same file",
                ),
            });
        }

        fs::copy(from, to)
            .await
            .map_err(|source| ProcessorError::CopyFailed {
                input: from.to_path_buf(),
                output: to.to_path_buf(),
                source,
            })
    }
}

use crate::utils::error::Result;
use std::path::Path;

pub trait Storage: Send + Sync {
    /// True only for an existing regular file, following symlinks.
    fn is_file(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;

    /// Copies bytes and permission bits, replacing any existing destination.
    fn copy_file(
        &self,
        from: &Path,
        to: &Path,
    ) -> impl std::future::Future<Output = Result<u64>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&Path>;
}

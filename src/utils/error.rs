use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Validation,
    Io,
}

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Usage: processor <input_path>")]
    Usage,

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to copy {} to {}: {source}", input.display(), output.display())]
    CopyFailed {
        input: PathBuf,
        output: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProcessorError::Usage => ErrorCategory::Usage,
            ProcessorError::InputNotFound { .. } => ErrorCategory::Validation,
            ProcessorError::CopyFailed { .. } => ErrorCategory::Io,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage | ErrorCategory::Validation => 1,
            ErrorCategory::Io => 2,
        }
    }

    /// Usage and not-found messages are part of the command's stdout contract.
    pub fn reports_to_stdout(&self) -> bool {
        self.category() != ErrorCategory::Io
    }
}

pub type Result<T> = std::result::Result<T, ProcessorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_cli_contract() {
        assert_eq!(
            ProcessorError::Usage.to_string(),
            "Usage: processor <input_path>"
        );
        let err = ProcessorError::InputNotFound {
            path: PathBuf::from("missing.pdf"),
        };
        assert_eq!(err.to_string(), "Input file not found: missing.pdf");
    }

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(ProcessorError::Usage.exit_code(), 1);
        assert_eq!(
            ProcessorError::InputNotFound {
                path: PathBuf::from("x")
            }
            .exit_code(),
            1
        );

        let io = ProcessorError::CopyFailed {
            input: PathBuf::from("a"),
            output: PathBuf::from("processed_a"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.exit_code(), 2);
        assert!(!io.reports_to_stdout());
        assert!(ProcessorError::Usage.reports_to_stdout());
    }
}

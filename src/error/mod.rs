mod codes;

pub use codes::ExitCode;

use crate::rename::RenameError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Destination already exists: {name}")]
    DestinationExists { name: String },

    #[error("Rename failed: {from} -> {to}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::DestinationExists { .. } => ExitCode::RenameError,
            AppError::RenameFailed { .. } => ExitCode::RenameError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::DestinationExists { name } => {
                format!(
                    "A file with the flattened name already exists:\n  {}\n\n\
                     Move or delete the existing file before running again.\n\
                     Files renamed before this one stay renamed.",
                    name
                )
            }

            AppError::RenameFailed { from, to, source } => {
                format!(
                    "Failed to rename file:\n\
                     From: {}\n\
                     To:   {}\n\
                     Error: {}\n\n\
                     Check file permissions and ensure no files are open.\n\
                     Files renamed before this one stay renamed.",
                    from, to, source
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            // PathNotFound is intercepted before conversion; kept total here
            ScannerError::PathNotFound(path) => {
                AppError::Other(format!("Directory '{}' does not exist.", path.display()))
            }
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::FilesystemError { from, to, source } => {
                AppError::RenameFailed { from, to, source }
            }
            RenameError::DestinationExists(name) => AppError::DestinationExists { name },
        }
    }
}

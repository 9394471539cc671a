use super::Error;
use std::path::Path;

/// Error when a source or output file cannot be read or written.
#[derive(Debug)]
pub(super) struct IoError {
    path: Box<str>,
    source: std::io::Error,
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to access `{}`: {}", self.path, self.source)
    }
}

impl Error {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Error {
        Error::from(super::ErrorKind::Io(IoError {
            path: path.as_ref().display().to_string().into(),
            source,
        }))
    }

    /// Returns `true` if this error is an I/O error.
    pub fn is_io(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::Io(_)))
    }
}

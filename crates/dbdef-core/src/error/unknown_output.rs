use super::Error;

/// Error when the makefile requests an output with no registered renderer.
#[derive(Debug)]
pub(super) struct UnknownOutput {
    name: Box<str>,
}

impl std::error::Error for UnknownOutput {}

impl core::fmt::Display for UnknownOutput {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid output type `{}`", self.name)
    }
}

impl Error {
    /// Creates an unknown output error.
    pub fn unknown_output(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownOutput(UnknownOutput {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown output error.
    pub fn is_unknown_output(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnknownOutput(_)))
    }
}

use super::Error;

/// Error when a definition line cannot be turned into an object.
///
/// Examples are a column without a name, an index column with an unknown
/// sort order, or a definition file that never declares its object name.
#[derive(Debug)]
pub(super) struct InvalidDefinition {
    message: Box<str>,
}

impl std::error::Error for InvalidDefinition {}

impl core::fmt::Display for InvalidDefinition {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid definition: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid definition error.
    pub fn invalid_definition(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDefinition(InvalidDefinition {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid definition error.
    pub fn is_invalid_definition(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::InvalidDefinition(_)))
    }
}

use super::Error;

/// Error when a table constraint does not declare a usable `type` property.
#[derive(Debug)]
pub(super) struct InvalidConstraintType {
    ty: Option<Box<str>>,
}

impl std::error::Error for InvalidConstraintType {}

impl core::fmt::Display for InvalidConstraintType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "constraint type is of invalid type: {ty}"),
            None => f.write_str("constraint type is mandatory"),
        }
    }
}

impl Error {
    /// Creates an error for a constraint with no `type` property.
    pub fn missing_constraint_type() -> Error {
        Error::from(super::ErrorKind::InvalidConstraintType(
            InvalidConstraintType { ty: None },
        ))
    }

    /// Creates an error for a constraint whose `type` is not recognized.
    pub fn invalid_constraint_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConstraintType(
            InvalidConstraintType {
                ty: Some(ty.into().into()),
            },
        ))
    }

    /// Returns `true` if this error is a missing or invalid constraint type
    /// error.
    pub fn is_invalid_constraint_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::InvalidConstraintType(_)))
    }
}

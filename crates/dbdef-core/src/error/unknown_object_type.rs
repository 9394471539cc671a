use super::Error;

/// Error when a definition file starts with a discriminator no parser is
/// registered for.
#[derive(Debug)]
pub(super) struct UnknownObjectType {
    ty: Box<str>,
    file: Box<str>,
}

impl std::error::Error for UnknownObjectType {}

impl core::fmt::Display for UnknownObjectType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.ty.is_empty() {
            write!(f, "definition file `{}` does not declare an object type", self.file)
        } else {
            write!(
                f,
                "unknown object type `{}` in definition file `{}`",
                self.ty, self.file
            )
        }
    }
}

impl Error {
    /// Creates an unknown object type error naming the offending file. An
    /// empty `ty` means the file has no discriminator line at all.
    pub fn unknown_object_type(ty: impl Into<String>, file: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownObjectType(UnknownObjectType {
            ty: ty.into().into(),
            file: file.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown object type error.
    pub fn is_unknown_object_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnknownObjectType(_)))
    }
}

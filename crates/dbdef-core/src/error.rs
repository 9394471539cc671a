mod adhoc;
mod driver_operation_failed;
mod invalid_configuration;
mod invalid_constraint_type;
mod invalid_definition;
mod io;
mod unknown_object_type;
mod unknown_output;

use adhoc::AdhocError;
use driver_operation_failed::DriverOperationFailed;
use invalid_configuration::InvalidConfiguration;
use invalid_constraint_type::InvalidConstraintType;
use invalid_definition::InvalidDefinition;
use io::IoError;
use std::sync::Arc;
use unknown_object_type::UnknownObjectType;
use unknown_output::UnknownOutput;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while compiling database definitions.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner.map(Arc::try_unwrap) {
            Some(Ok(ErrorInner { kind, cause: None })) => kind,
            // A consequent that is shared or already chained is flattened
            // into its message.
            Some(Ok(inner)) => ErrorKind::Adhoc(AdhocError::new(
                Error {
                    inner: Some(Arc::new(inner)),
                }
                .to_string(),
            )),
            Some(Err(shared)) => ErrorKind::Adhoc(AdhocError::new(
                Error {
                    inner: Some(shared),
                }
                .to_string(),
            )),
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error in the chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.inner.as_ref().and_then(|inner| inner.cause.as_ref()) {
            err = cause;
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if this error, or any error in its cause chain, matches
    /// the predicate.
    fn any(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::DriverOperationFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    DriverOperationFailed(DriverOperationFailed),
    Io(IoError),
    InvalidConfiguration(InvalidConfiguration),
    InvalidConstraintType(InvalidConstraintType),
    InvalidDefinition(InvalidDefinition),
    UnknownObjectType(UnknownObjectType),
    UnknownOutput(UnknownOutput),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            Io(err) => core::fmt::Display::fmt(err, f),
            InvalidConfiguration(err) => core::fmt::Display::fmt(err, f),
            InvalidConstraintType(err) => core::fmt::Display::fmt(err, f),
            InvalidDefinition(err) => core::fmt::Display::fmt(err, f),
            UnknownObjectType(err) => core::fmt::Display::fmt(err, f),
            UnknownOutput(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown dbdef error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

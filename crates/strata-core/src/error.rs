mod adhoc;
mod configuration;
mod invalid_data_type;
mod malformed_statement;
mod property_resolution;

use adhoc::AdhocError;
use configuration::ConfigurationError;
use invalid_data_type::InvalidDataTypeError;
use malformed_statement::MalformedStatementError;
use property_resolution::PropertyResolutionError;
use std::sync::Arc;

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while building a catalog or generating statements.
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
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;

        let inner = match err.inner.take() {
            Some(inner) => inner,
            None => Arc::new(ErrorInner {
                kind: ErrorKind::Unknown,
                cause: None,
            }),
        };

        let mut inner = Arc::try_unwrap(inner).unwrap_or_else(|shared| ErrorInner {
            kind: shared.kind.clone_shallow(),
            cause: shared.cause.clone(),
        });

        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        inner.cause = Some(self);
        err.inner = Some(Arc::new(inner));
        err
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args)))
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

    /// True if any error in the context chain matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some((**err).as_ref()),
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
    Anyhow(Arc<anyhow::Error>),
    Adhoc(AdhocError),
    Configuration(ConfigurationError),
    PropertyResolution(PropertyResolutionError),
    MalformedStatement(MalformedStatementError),
    InvalidDataType(InvalidDataTypeError),
    Unknown,
}

impl ErrorKind {
    /// Copies the kind out of a shared error so context can be attached
    /// without mutating the original.
    fn clone_shallow(&self) -> ErrorKind {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => Anyhow(err.clone()),
            Adhoc(err) => Adhoc(err.clone()),
            Configuration(err) => Configuration(err.clone()),
            PropertyResolution(err) => PropertyResolution(err.clone()),
            MalformedStatement(err) => MalformedStatement(err.clone()),
            InvalidDataType(err) => InvalidDataType(err.clone()),
            Unknown => Unknown,
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Configuration(err) => core::fmt::Display::fmt(err, f),
            PropertyResolution(err) => core::fmt::Display::fmt(err, f),
            MalformedStatement(err) => core::fmt::Display::fmt(err, f),
            InvalidDataType(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown strata error"),
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
        Error::from(ErrorKind::Anyhow(Arc::new(err)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
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

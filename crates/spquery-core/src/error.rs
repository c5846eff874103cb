mod connection_failed;
mod invalid_plan;
mod invalid_response;
mod invalid_schema;
mod not_expressible;
mod schema_mismatch;
mod split_dialect;
mod unsupported_property;

use connection_failed::ConnectionFailed;
use invalid_plan::InvalidPlan;
use invalid_response::InvalidResponse;
use invalid_schema::InvalidSchema;
use not_expressible::NotExpressible;
use schema_mismatch::SchemaMismatch;
use split_dialect::SplitDialect;
use unsupported_property::UnsupportedProperty;

use std::sync::Arc;

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while resolving, planning or rendering a query.
///
/// Every failure condition the translation engine can raise has its own
/// kind, so callers can tell an invalid selection (`is_schema_mismatch`)
/// apart from a backend limitation (`is_not_expressible`) or an internal
/// bug (`is_invalid_plan`).
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    SchemaMismatch(SchemaMismatch),
    UnsupportedProperty(UnsupportedProperty),
    SplitDialect(SplitDialect),
    NotExpressible(NotExpressible),
    InvalidPlan(InvalidPlan),
    InvalidSchema(InvalidSchema),
    ConnectionFailed(ConnectionFailed),
    InvalidResponse(InvalidResponse),
    Unknown,
}

impl Error {
    /// Builds an ad-hoc error from pre-formatted arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(anyhow::Error::msg(args.to_string()))
    }

    /// Adds context to this error.
    ///
    /// The most recently added context is displayed first, ending with the
    /// root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => inner.kind,
                Err(shared) => ErrorKind::Anyhow(anyhow::Error::msg(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
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
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::ConnectionFailed(err) => Some(err),
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

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            SchemaMismatch(err) => core::fmt::Display::fmt(err, f),
            UnsupportedProperty(err) => core::fmt::Display::fmt(err, f),
            SplitDialect(err) => core::fmt::Display::fmt(err, f),
            NotExpressible(err) => core::fmt::Display::fmt(err, f),
            InvalidPlan(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            ConnectionFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidResponse(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown spquery error"),
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

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
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

use super::Error;

/// Error when the model registry is inconsistent.
///
/// This occurs when:
/// - Two models or two fields of one model share a name
/// - An expandable field targets a model that was not registered
/// - A model has no primary key, or its key is not served by a dialect the
///   model has an endpoint for
/// - A field requiring a separate query has no follow-up path
///
/// These errors are raised once, when the registry is built at startup.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}

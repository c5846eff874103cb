use super::Error;

/// Error when a selection cannot be rendered on the chosen dialect and no
/// follow-up strategy applies.
///
/// This occurs when:
/// - A follow-up request is needed alongside `$filter`, `$orderby`, `$top`
///   or `$skip` on the primary request
/// - A follow-up would itself need a follow-up (its shape would depend on
///   returned data)
/// - An inline expansion contains a property that must be loaded out-of-band
/// - A filter or sort references an expandable property
#[derive(Debug)]
pub(super) struct NotExpressible {
    message: Box<str>,
}

impl std::error::Error for NotExpressible {}

impl core::fmt::Display for NotExpressible {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not expressible: {}", self.message)
    }
}

impl Error {
    /// Creates a not expressible error.
    pub fn not_expressible(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotExpressible(NotExpressible {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a not expressible error.
    pub fn is_not_expressible(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotExpressible(_))
    }
}

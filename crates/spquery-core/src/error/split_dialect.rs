use super::Error;

/// Error when every referenced property is served by some dialect, but no
/// single dialect serves all of them.
///
/// A plan targets exactly one dialect for its primary request; splitting a
/// selection across both backends is not attempted.
#[derive(Debug)]
pub(super) struct SplitDialect {
    message: Box<str>,
}

impl std::error::Error for SplitDialect {}

impl core::fmt::Display for SplitDialect {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "split dialect not supported: {}", self.message)
    }
}

impl Error {
    /// Creates a split dialect error.
    pub fn split_dialect(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SplitDialect(SplitDialect {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a split dialect error.
    pub fn is_split_dialect(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SplitDialect(_))
    }
}

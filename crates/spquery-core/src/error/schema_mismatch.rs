use super::Error;

/// Error when a selector, filter or sort references a property the
/// metadata registry does not declare for the model.
///
/// This is a caller error: the selection itself is invalid, independent of
/// which backend would serve it.
#[derive(Debug)]
pub(super) struct SchemaMismatch {
    model: Box<str>,
    property: Box<str>,
}

impl std::error::Error for SchemaMismatch {}

impl core::fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "schema mismatch: model `{}` has no property `{}`",
            self.model, self.property
        )
    }
}

impl Error {
    /// Creates a schema mismatch error for `model` and the unknown `property`.
    pub fn schema_mismatch(model: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaMismatch(SchemaMismatch {
            model: model.into().into(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema mismatch error.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaMismatch(_))
    }
}

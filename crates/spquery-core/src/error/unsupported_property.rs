use super::Error;

/// Error when a property exists but neither dialect can serve it.
#[derive(Debug)]
pub(super) struct UnsupportedProperty {
    model: Box<str>,
    property: Box<str>,
}

impl std::error::Error for UnsupportedProperty {}

impl core::fmt::Display for UnsupportedProperty {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported property: `{}::{}` is not available on any dialect",
            self.model, self.property
        )
    }
}

impl Error {
    /// Creates an unsupported property error.
    pub fn unsupported_property(model: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedProperty(UnsupportedProperty {
            model: model.into().into(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported property error.
    pub fn is_unsupported_property(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedProperty(_))
    }
}

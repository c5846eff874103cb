/// A declarative property selector.
///
/// Selectors name properties by their logical name and are resolved against
/// the metadata registry into a [`Selection`](super::Selection).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selector {
    /// Select a property. An expandable property loads its default nested
    /// selection.
    Field(String),

    /// Select an expandable property and load the given properties within
    /// it.
    Nested {
        field: String,
        selectors: Vec<Selector>,
    },
}

impl Selector {
    pub fn field(name: impl Into<String>) -> Selector {
        Selector::Field(name.into())
    }

    pub fn nested<I>(name: impl Into<String>, selectors: I) -> Selector
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        Selector::Nested {
            field: name.into(),
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a dot-separated chain such as `Lists.ContentTypes.Name` into
    /// nested selectors.
    pub fn path(path: &str) -> Selector {
        let mut segments = path.rsplit('.');
        // `rsplit` always yields at least one segment
        let mut selector = Selector::field(segments.next().unwrap_or_default());

        for segment in segments {
            selector = Selector::Nested {
                field: segment.to_string(),
                selectors: vec![selector],
            };
        }

        selector
    }

    /// Logical name of the outermost property.
    pub fn name(&self) -> &str {
        match self {
            Selector::Field(name) => name,
            Selector::Nested { field, .. } => field,
        }
    }
}

impl From<&str> for Selector {
    fn from(src: &str) -> Selector {
        Selector::path(src)
    }
}

impl From<String> for Selector {
    fn from(src: String) -> Selector {
        Selector::path(&src)
    }
}

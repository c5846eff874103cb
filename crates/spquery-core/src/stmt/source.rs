/// Shape of the primary request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// Load a single entity, e.g. the current web
    #[default]
    Entity,

    /// Query the model's collection, optionally filtered, sorted and paged
    Collection,
}

impl Source {
    pub fn is_collection(self) -> bool {
        matches!(self, Source::Collection)
    }
}

use super::FieldId;
use crate::stmt::Source;

/// How a model is addressed on one dialect.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Path template for loading a single entity, e.g. `_api/web` or
    /// `sites/{hostname}:{serverrelativepath}`. `{...}` tokens are resolved
    /// by the execution layer.
    pub entity: String,

    /// Path template for querying the model as a collection, if the dialect
    /// exposes one.
    pub collection: Option<String>,

    /// What a request with no explicit selection projects.
    pub default_select: DefaultSelect,

    /// Fields always appended to an explicit `$select` on this dialect.
    pub required: Vec<FieldId>,
}

/// The projection sent when the caller selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DefaultSelect {
    /// The unprojected response already is the default set, so no `$select`
    /// is sent.
    Implicit,

    /// The model's default fields on the dialect, in declaration order.
    #[default]
    Declared,

    /// A fixed projection, in the given order.
    Fields(Vec<FieldId>),
}

impl Endpoint {
    pub fn path(&self, source: Source) -> Option<&str> {
        match source {
            Source::Entity => Some(&self.entity),
            Source::Collection => self.collection.as_deref(),
        }
    }
}

impl DefaultSelect {
    pub fn is_implicit(&self) -> bool {
        matches!(self, DefaultSelect::Implicit)
    }
}

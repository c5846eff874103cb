use super::{Endpoint, Field, FieldId};
use crate::{schema::Name, stmt::Source, Dialect, DialectSet};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Fields contained by the model, in declaration order
    pub fields: Vec<Field>,

    /// The model's key
    pub primary_key: FieldId,

    /// How the model is addressed on REST, if at all
    pub rest: Option<Endpoint>,

    /// How the model is addressed on Graph, if at all
    pub graph: Option<Endpoint>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelId(pub usize);

impl Model {
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    pub fn primary_key_field(&self) -> &Field {
        self.field(self.primary_key)
    }

    pub fn endpoint(&self, dialect: Dialect) -> Option<&Endpoint> {
        match dialect {
            Dialect::Rest => self.rest.as_ref(),
            Dialect::Graph => self.graph.as_ref(),
        }
    }

    /// Dialects able to serve the model in the given shape.
    pub fn dialects(&self, source: Source) -> DialectSet {
        Dialect::ALL
            .into_iter()
            .filter(|dialect| {
                self.endpoint(*dialect)
                    .and_then(|endpoint| endpoint.path(source))
                    .is_some()
            })
            .collect()
    }

    /// The registry's default field set on `dialect`, in declaration order.
    ///
    /// Only scalar fields are part of the default set.
    pub fn default_fields(&self, dialect: Dialect) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(move |field| {
            field.default && !field.is_expandable() && field.supports(dialect)
        })
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}

use super::{Model, ModelId, Schema};
use crate::{Dialect, DialectSet};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// Logical and wire names
    pub name: FieldName,

    /// Scalar or expandable
    pub ty: FieldTy,

    /// True if the field is the model's key. The key is always loaded so
    /// every entity can be re-identified from a partial response.
    pub primary_key: bool,

    /// True if the field belongs to the default set loaded when no explicit
    /// selection is given.
    pub default: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    /// Name used by the object model and by selectors
    pub app_name: String,

    /// Name on the REST surface. `None` when REST does not serve the field.
    pub rest: Option<String>,

    /// Name on the Graph surface. `None` when Graph does not serve the field.
    pub graph: Option<String>,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    /// A value loaded as part of the entity itself
    Primitive,

    /// A nested object or collection, loaded through `$expand` or a
    /// follow-up request
    Expand(Expand),
}

#[derive(Debug, Clone)]
pub struct Expand {
    /// Model of the expanded object, or of the collection's elements
    pub target: ModelId,

    /// True if the field holds a collection
    pub collection: bool,

    /// True if REST cannot expand the field inline, so it always becomes a
    /// follow-up request.
    pub separate_query: bool,

    /// Path template of the follow-up request on REST
    pub rest_path: Option<String>,

    /// Path template of the follow-up request on Graph
    pub graph_path: Option<String>,
}

impl Field {
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn app_name(&self) -> &str {
        &self.name.app_name
    }

    /// The field's name on `dialect`, if the dialect serves it.
    pub fn wire_name(&self, dialect: Dialect) -> Option<&str> {
        self.name.wire(dialect)
    }

    pub fn supports(&self, dialect: Dialect) -> bool {
        self.wire_name(dialect).is_some()
    }

    /// Dialects that serve this field.
    pub fn dialects(&self) -> DialectSet {
        Dialect::ALL
            .into_iter()
            .filter(|dialect| self.supports(*dialect))
            .collect()
    }

    pub fn is_expandable(&self) -> bool {
        self.ty.is_expand()
    }

    /// Returns a fully qualified name for the field.
    pub fn full_name(&self, schema: &Schema) -> String {
        let model = schema.model(self.id.model);
        format!("{}::{}", model.name.upper_camel_case(), self.name.app_name)
    }

    /// If the field is expandable, return the target model.
    pub fn expand_target<'a>(&self, schema: &'a Schema) -> Option<&'a Model> {
        self.ty.as_expand().map(|expand| schema.model(expand.target))
    }
}

impl FieldName {
    pub fn wire(&self, dialect: Dialect) -> Option<&str> {
        match dialect {
            Dialect::Rest => self.rest.as_deref(),
            Dialect::Graph => self.graph.as_deref(),
        }
    }
}

impl FieldTy {
    pub fn is_expand(&self) -> bool {
        matches!(self, Self::Expand(..))
    }

    pub fn as_expand(&self) -> Option<&Expand> {
        match self {
            Self::Expand(expand) => Some(expand),
            Self::Primitive => None,
        }
    }
}

impl Expand {
    /// Path template used when the field is loaded through a follow-up
    /// request on `dialect`.
    pub fn follow_up_path(&self, dialect: Dialect) -> Option<&str> {
        match dialect {
            Dialect::Rest => self.rest_path.as_deref(),
            Dialect::Graph => self.graph_path.as_deref(),
        }
    }
}

impl From<&Self> for FieldId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}

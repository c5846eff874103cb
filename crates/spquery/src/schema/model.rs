use super::{Endpoint, Field};
use spquery_core::schema::Name;

/// A model's definition as known before registration.
///
/// This is the unresolved counterpart of `spquery_core::schema::app::Model`.
/// It has no `ModelId` yet, and expandable fields name their target model
/// by string.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the model
    pub name: Name,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// Index of the key field within `fields`
    pub primary_key: Option<usize>,

    pub rest: Option<Endpoint>,

    pub graph: Option<Endpoint>,
}

impl Model {
    pub fn new(name: &str) -> Model {
        Model {
            name: Name::new(name),
            fields: vec![],
            primary_key: None,
            rest: None,
            graph: None,
        }
    }

    /// Declare the model's key field.
    pub fn key(mut self, mut field: Field) -> Model {
        field.primary_key = true;
        self.primary_key = Some(self.fields.len());
        self.fields.push(field);
        self
    }

    pub fn field(mut self, field: Field) -> Model {
        self.fields.push(field);
        self
    }

    pub fn rest(mut self, endpoint: Endpoint) -> Model {
        self.rest = Some(endpoint);
        self
    }

    pub fn graph(mut self, endpoint: Endpoint) -> Model {
        self.graph = Some(endpoint);
        self
    }

    /// Find a field by name
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

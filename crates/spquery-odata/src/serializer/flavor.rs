use super::Serializer;

use spquery_core::{schema::app::Schema, Dialect};

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Rest,
    Graph,
}

impl Flavor {
    pub(super) fn dialect(self) -> Dialect {
        match self {
            Flavor::Rest => Dialect::Rest,
            Flavor::Graph => Dialect::Graph,
        }
    }
}

impl<'a> Serializer<'a> {
    pub fn rest(schema: &'a Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Rest,
        }
    }

    pub fn graph(schema: &'a Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Graph,
        }
    }

    pub fn for_dialect(schema: &'a Schema, dialect: Dialect) -> Serializer<'a> {
        match dialect {
            Dialect::Rest => Serializer::rest(schema),
            Dialect::Graph => Serializer::graph(schema),
        }
    }
}

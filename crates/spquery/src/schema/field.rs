use spquery_core::schema::Name;

/// A field's definition as known before registration.
#[derive(Debug, Clone)]
pub struct Field {
    /// Logical name, used by selectors
    pub name: String,

    /// Name on the REST surface, if REST serves the field
    pub rest: Option<String>,

    /// Name on the Graph surface, if Graph serves the field
    pub graph: Option<String>,

    pub ty: FieldTy,

    pub primary_key: bool,

    /// Part of the default set loaded when nothing is selected
    pub default: bool,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Primitive,
    Expand(Expand),
}

/// An expandable field, with its target model named by string.
#[derive(Debug, Clone)]
pub struct Expand {
    pub target: String,

    pub collection: bool,

    /// REST cannot expand the field inline
    pub separate_query: bool,

    pub rest_path: Option<String>,

    pub graph_path: Option<String>,
}

impl Field {
    /// A scalar field served by REST under its logical name.
    pub fn new(name: &str) -> Field {
        Field {
            name: name.to_string(),
            rest: Some(name.to_string()),
            graph: None,
            ty: FieldTy::Primitive,
            primary_key: false,
            default: false,
        }
    }

    /// A scalar field only Graph serves.
    pub fn graph_only(name: &str, graph: &str) -> Field {
        Field::new(name).no_rest().graph(graph)
    }

    /// An expandable field served by REST under its logical name.
    pub fn expand(name: &str, expand: Expand) -> Field {
        Field {
            ty: FieldTy::Expand(expand),
            ..Field::new(name)
        }
    }

    pub fn rest(mut self, name: &str) -> Field {
        self.rest = Some(name.to_string());
        self
    }

    pub fn no_rest(mut self) -> Field {
        self.rest = None;
        self
    }

    pub fn graph(mut self, name: &str) -> Field {
        self.graph = Some(name.to_string());
        self
    }

    /// Serve the field on Graph under the lower camel case form of its
    /// logical name, e.g. `Description` becomes `description`.
    pub fn graph_camel_case(self) -> Field {
        let name = Name::new(&self.name).camel_case();
        self.graph(&name)
    }

    /// Include the field in the default set.
    pub fn by_default(mut self) -> Field {
        self.default = true;
        self
    }
}

impl Expand {
    /// A single nested object
    pub fn one(target: &str) -> Expand {
        Expand {
            target: target.to_string(),
            collection: false,
            separate_query: false,
            rest_path: None,
            graph_path: None,
        }
    }

    /// A nested collection
    pub fn many(target: &str) -> Expand {
        Expand {
            collection: true,
            ..Expand::one(target)
        }
    }

    pub fn separate_query(mut self) -> Expand {
        self.separate_query = true;
        self
    }

    pub fn rest_path(mut self, path: &str) -> Expand {
        self.rest_path = Some(path.to_string());
        self
    }

    pub fn graph_path(mut self, path: &str) -> Expand {
        self.graph_path = Some(path.to_string());
        self
    }
}

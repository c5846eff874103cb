/// How a model is addressed on one dialect, before field names are
/// resolved.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub entity: String,

    pub collection: Option<String>,

    pub default_select: DefaultSelect,

    /// Logical names of fields always appended to an explicit `$select`
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub enum DefaultSelect {
    Implicit,

    #[default]
    Declared,

    /// Logical names of the fields to project, in order
    Fields(Vec<String>),
}

impl Endpoint {
    pub fn entity(path: &str) -> Endpoint {
        Endpoint {
            entity: path.to_string(),
            collection: None,
            default_select: DefaultSelect::Declared,
            required: vec![],
        }
    }

    pub fn collection(mut self, path: &str) -> Endpoint {
        self.collection = Some(path.to_string());
        self
    }

    /// A default selection is sent without `$select`.
    pub fn implicit_select(mut self) -> Endpoint {
        self.default_select = DefaultSelect::Implicit;
        self
    }

    pub fn default_select<I>(mut self, fields: I) -> Endpoint
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.default_select = DefaultSelect::Fields(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn required<I>(mut self, fields: I) -> Endpoint
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.required.extend(fields.into_iter().map(Into::into));
        self
    }
}

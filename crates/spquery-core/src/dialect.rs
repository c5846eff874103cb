use std::fmt;

/// The backend query surface a plan is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// SharePoint REST OData (`_api/...`)
    Rest,

    /// Microsoft Graph
    Graph,
}

/// What a dialect can express in a single request. Informs the planner when
/// deciding between inline `$expand` and follow-up requests.
#[derive(Debug)]
pub struct Capability {
    /// Maximum number of nested `$expand` levels in one request. `None` means
    /// the dialect does not limit nesting.
    pub expand_depth: Option<usize>,

    /// When true, collection-valued properties can be expanded inline.
    pub expand_collections: bool,
}

/// A subset of {REST, Graph}.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DialectSet {
    rest: bool,
    graph: bool,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Rest, Dialect::Graph];

    /// The dialect that is not `self`.
    pub fn other(self) -> Dialect {
        match self {
            Dialect::Rest => Dialect::Graph,
            Dialect::Graph => Dialect::Rest,
        }
    }

    pub fn capability(self) -> &'static Capability {
        match self {
            Dialect::Rest => &Capability::REST,
            Dialect::Graph => &Capability::GRAPH,
        }
    }

    pub fn is_rest(self) -> bool {
        matches!(self, Dialect::Rest)
    }

    pub fn is_graph(self) -> bool {
        matches!(self, Dialect::Graph)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Rest => f.write_str("REST"),
            Dialect::Graph => f.write_str("Graph"),
        }
    }
}

impl Capability {
    /// SharePoint REST capabilities.
    pub const REST: Self = Self {
        expand_depth: None,
        expand_collections: true,
    };

    /// Microsoft Graph capabilities.
    ///
    /// Graph only expands a single level, and collections such as a site's
    /// lists or a term store's groups are separate resources that have to be
    /// requested on their own.
    pub const GRAPH: Self = Self {
        expand_depth: Some(1),
        expand_collections: false,
    };

    /// Returns true if an inline expansion at `depth` (1 = directly on the
    /// request's root) fits in a single request.
    pub fn can_expand_at(&self, depth: usize) -> bool {
        self.expand_depth.map(|max| depth <= max).unwrap_or(true)
    }
}

impl DialectSet {
    pub const NONE: Self = Self {
        rest: false,
        graph: false,
    };

    pub const ALL: Self = Self {
        rest: true,
        graph: true,
    };

    pub fn only(dialect: Dialect) -> Self {
        let mut set = Self::NONE;
        set.insert(dialect);
        set
    }

    pub fn insert(&mut self, dialect: Dialect) {
        match dialect {
            Dialect::Rest => self.rest = true,
            Dialect::Graph => self.graph = true,
        }
    }

    pub fn contains(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::Rest => self.rest,
            Dialect::Graph => self.graph,
        }
    }

    pub fn intersection(self, other: Self) -> Self {
        Self {
            rest: self.rest && other.rest,
            graph: self.graph && other.graph,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.rest && !self.graph
    }

    pub fn iter(&self) -> impl Iterator<Item = Dialect> + '_ {
        Dialect::ALL.into_iter().filter(|dialect| self.contains(*dialect))
    }
}

impl FromIterator<Dialect> for DialectSet {
    fn from_iter<T: IntoIterator<Item = Dialect>>(iter: T) -> Self {
        let mut set = Self::NONE;
        for dialect in iter {
            set.insert(dialect);
        }
        set
    }
}

impl fmt::Display for DialectSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rest, self.graph) {
            (true, true) => f.write_str("REST or Graph"),
            (true, false) => f.write_str("REST"),
            (false, true) => f.write_str("Graph"),
            (false, false) => f.write_str("no dialect"),
        }
    }
}

impl fmt::Debug for DialectSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

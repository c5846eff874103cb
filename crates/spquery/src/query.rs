use spquery_core::{
    stmt::{Filter, OrderBy, QueryDirectives, Selector, Source},
    Dialect,
};

/// A declarative query against one registered model.
///
/// ```
/// use spquery::{Filter, Query};
///
/// let query = Query::collection("List")
///     .select(["Title", "Fields.InternalName"])
///     .filter(Filter::eq("Hidden", false))
///     .top(10);
/// # let _ = query;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    model: String,
    source: Source,
    selectors: Vec<Selector>,
    directives: QueryDirectives,
    prefer: Option<Dialect>,
}

impl Query {
    /// Load a single entity of `model`.
    pub fn entity(model: impl Into<String>) -> Query {
        Query::new(model.into(), Source::Entity)
    }

    /// Query `model` as a collection. Filters, ordering and paging apply to
    /// the collection.
    pub fn collection(model: impl Into<String>) -> Query {
        Query::new(model.into(), Source::Collection)
    }

    fn new(model: String, source: Source) -> Query {
        Query {
            model,
            source,
            selectors: vec![],
            directives: QueryDirectives::default(),
            prefer: None,
        }
    }

    /// Add selectors. Strings are parsed as dot-separated paths.
    pub fn select<I>(mut self, selectors: I) -> Query
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        self.selectors
            .extend(selectors.into_iter().map(Into::into));
        self
    }

    pub fn filter(self, filter: Filter) -> Query {
        self.directives(QueryDirectives {
            filter: vec![filter],
            ..Default::default()
        })
    }

    pub fn order_by(self, order_by: OrderBy) -> Query {
        self.directives(QueryDirectives {
            order_by: vec![order_by],
            ..Default::default()
        })
    }

    pub fn top(self, top: u64) -> Query {
        self.directives(QueryDirectives {
            top: Some(top),
            ..Default::default()
        })
    }

    pub fn skip(self, skip: u64) -> Query {
        self.directives(QueryDirectives {
            skip: Some(skip),
            ..Default::default()
        })
    }

    /// Merge caller-supplied directives into the query's own.
    pub fn directives(mut self, directives: QueryDirectives) -> Query {
        self.directives.merge(directives);
        self
    }

    /// Override the configured dialect preference for this query.
    pub fn prefer(mut self, dialect: Dialect) -> Query {
        self.prefer = Some(dialect);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn query_directives(&self) -> &QueryDirectives {
        &self.directives
    }

    pub fn preference(&self) -> Option<Dialect> {
        self.prefer
    }
}

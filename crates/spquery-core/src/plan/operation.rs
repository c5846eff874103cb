use super::Clause;
use crate::{schema::app::ModelId, Dialect};

/// A single request: a path template plus ordered query-string clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Dialect the operation is rendered for
    pub dialect: Dialect,

    /// Model the operation loads
    pub model: ModelId,

    /// Path template, e.g. `_api/web/lists`
    pub path: String,

    /// Clauses in rendering order
    pub clauses: Vec<Clause>,
}

impl Operation {
    pub fn new(dialect: Dialect, model: ModelId, path: impl Into<String>) -> Operation {
        Operation {
            dialect,
            model,
            path: path.into(),
            clauses: vec![],
        }
    }

    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }
}

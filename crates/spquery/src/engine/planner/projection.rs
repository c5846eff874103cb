use spquery_core::plan::{Clause, FieldPath, Operation};

/// `$select` and `$expand` entries of one operation, without duplicates.
#[derive(Debug, Default)]
pub(super) struct Projection {
    select: Vec<FieldPath>,
    expand: Vec<FieldPath>,
}

impl Projection {
    pub(super) fn select(&mut self, path: FieldPath) {
        if !self.select.contains(&path) {
            self.select.push(path);
        }
    }

    pub(super) fn expand(&mut self, path: FieldPath) {
        if !self.expand.contains(&path) {
            self.expand.push(path);
        }
    }

    /// Pushes the clauses onto `op`. Empty lists emit no clause.
    pub(super) fn apply(self, op: &mut Operation) {
        if !self.select.is_empty() {
            op.push(Clause::Select(self.select));
        }

        if !self.expand.is_empty() {
            op.push(Clause::Expand(self.expand));
        }
    }
}

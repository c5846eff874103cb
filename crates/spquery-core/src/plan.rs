//! Backend-bound compilation units produced by the planner and consumed by
//! the serializers.

mod clause;
pub use clause::{Clause, FieldPath, Predicate, Sort};

mod follow_up;
pub use follow_up::FollowUp;

mod operation;
pub use operation::Operation;

use crate::Dialect;

/// A query resolved against one dialect.
///
/// The primary operation carries paging, sorting and filtering. Follow-ups
/// load expandable collections the dialect cannot expand inline; they are
/// independent of the primary response and may be issued in the same batch.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub dialect: Dialect,

    pub primary: Operation,

    pub follow_ups: Vec<FollowUp>,
}

impl QueryPlan {
    /// True when the whole selection fits in a single request.
    pub fn is_single(&self) -> bool {
        self.follow_ups.is_empty()
    }
}

mod batch;
mod planner;
mod resolve;

use crate::Query;

use spquery_core::{driver::Batch, Dialect, QueryPlan, Result, Schema};

use std::sync::Arc;

/// Translates queries into plans and rendered batches.
///
/// Translation only reads the registry, so one engine may be shared by any
/// number of threads.
#[derive(Debug, Clone)]
pub(crate) struct Engine {
    pub(crate) schema: Arc<Schema>,

    /// Dialect tried first when a query states no preference
    pub(crate) preferred: Dialect,
}

impl Engine {
    pub(crate) fn plan(&self, query: &Query) -> Result<QueryPlan> {
        let resolved = resolve::apply(&self.schema, query)?;
        let preferred = query.preference().unwrap_or(self.preferred);
        planner::apply(&self.schema, resolved, preferred)
    }

    pub(crate) fn prepare(&self, query: &Query) -> Result<Batch> {
        let plan = self.plan(query)?;
        batch::assemble(&self.schema, &plan)
    }
}

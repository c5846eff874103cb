mod builder;
pub use builder::Builder;

use crate::{engine::Engine, Query};

use spquery_core::{
    driver::{Batch, Connection, Merge, Response},
    plan::QueryPlan,
    Dialect, Error, Result, Schema,
};
use tracing::instrument;

use std::sync::Arc;

/// Entry point for translating and running queries.
///
/// Cloning is cheap: clones share the registry and the connection.
#[derive(Debug, Clone)]
pub struct Db {
    engine: Engine,
    connection: Arc<dyn Connection>,
}

/// The rendered batch of a query, together with the raw body returned for
/// each of its requests.
#[derive(Debug)]
pub struct ExecResponse {
    pub batch: Batch,
    pub response: Response,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.engine.schema
    }

    /// Dialect tried first for queries that do not state a preference.
    pub fn preferred_dialect(&self) -> Dialect {
        self.engine.preferred
    }

    /// Resolve and plan a query without rendering it.
    pub fn plan(&self, query: &Query) -> Result<QueryPlan> {
        self.engine.plan(query)
    }

    /// Plan a query and render every request of the plan.
    pub fn prepare(&self, query: &Query) -> Result<Batch> {
        self.engine.prepare(query)
    }

    /// Plan and render a query, then hand the batch to the connection.
    #[instrument(skip_all, fields(model = %query.model()))]
    pub async fn exec(&self, query: &Query) -> Result<ExecResponse> {
        let batch = self.engine.prepare(query)?;
        let response = self.connection.exec(&batch).await?;

        for request in &batch.requests {
            if response.body(request.id).is_none() {
                return Err(Error::invalid_response(format!(
                    "no body for request #{} `{}`",
                    request.id.0, request.url
                )));
            }
        }

        Ok(ExecResponse { batch, response })
    }
}

impl ExecResponse {
    pub fn primary(&self) -> &str {
        self.response
            .body(self.batch.primary().id)
            .unwrap_or_default()
    }

    /// Follow-up bodies with the directive describing where each one attaches.
    pub fn follow_ups(&self) -> impl Iterator<Item = (&Merge, &str)> + '_ {
        self.batch.merges.iter().map(|merge| {
            (
                merge,
                self.response.body(merge.request).unwrap_or_default(),
            )
        })
    }
}

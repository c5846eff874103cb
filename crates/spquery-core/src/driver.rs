mod batch;
pub use batch::{Batch, Merge, Method, Request, RequestId};

mod response;
pub use response::Response;

use crate::async_trait;

use std::fmt::Debug;

/// The execution layer.
///
/// Receives fully rendered requests and returns raw response bodies keyed by
/// request id. Retries, timeouts and authentication belong to the
/// implementation; the translation engine never inspects responses.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Issue every request of the batch.
    async fn exec(&self, batch: &Batch) -> crate::Result<Response>;
}

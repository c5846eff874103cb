pub mod db;
pub use db::Db;

mod engine;

pub mod query;
pub use query::Query;

pub mod schema;

pub use spquery_core::{
    driver::{self, Batch, Connection, Merge, Request, Response},
    plan::{self, QueryPlan},
    stmt::{self, Direction, Filter, OrderBy, QueryDirectives, Selector, Source, Value},
    async_trait, Dialect, Error, Result,
};

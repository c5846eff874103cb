pub mod dialect;
pub use dialect::{Dialect, DialectSet};

pub mod driver;
pub use driver::Connection;

mod error;
pub use error::{Error, IntoError};

pub mod plan;
pub use plan::QueryPlan;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;

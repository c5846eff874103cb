//! Model definitions as written by the user, before registration.
//!
//! These types reference other models and fields by name. `Db::builder()`
//! resolves them into the immutable registry consumed by the engine.

mod endpoint;
pub use endpoint::{DefaultSelect, Endpoint};

mod field;
pub use field::{Expand, Field, FieldTy};

mod model;
pub use model::Model;

pub use spquery_core::schema::{app, Name};

//! Resolved model definitions

mod endpoint;
pub use endpoint::{DefaultSelect, Endpoint};

mod field;
pub use field::{Expand, Field, FieldId, FieldName, FieldTy};

mod model;
pub use model::{Model, ModelId};

mod schema;
pub use schema::Schema;

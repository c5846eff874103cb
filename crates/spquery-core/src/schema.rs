//! The entity metadata registry.
//!
//! The registry is populated once at startup and never mutated afterward;
//! every lookup takes `&self`, so a single [`Schema`] can be shared across
//! threads behind an `Arc`.

pub mod app;
pub use app::Schema;

mod name;
pub use name::Name;

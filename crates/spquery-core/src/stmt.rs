//! Declarative query input: selectors, the normalized selection tree and
//! filter/order/paging directives.

mod directives;
pub use directives::QueryDirectives;

mod filter;
pub use filter::{BinaryOp, Filter};

mod order_by;
pub use order_by::{Direction, OrderBy};

mod selection;
pub use selection::Selection;

mod selector;
pub use selector::Selector;

mod source;
pub use source::Source;

mod value;
pub use value::Value;

use crate::schema::app::FieldId;
use crate::stmt::{BinaryOp, Direction, Value};

/// One query-string clause of an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `$select`; paths are relative to the operation's model
    Select(Vec<FieldPath>),

    /// `$expand`; one entry per inline-expanded path
    Expand(Vec<FieldPath>),

    /// `$filter`; predicates are combined with `and`
    Filter(Vec<Predicate>),

    /// `$orderby`
    OrderBy(Vec<Sort>),

    /// `$top`
    Top(u64),

    /// `$skip`
    Skip(u64),
}

/// A chain of fields starting at an operation's model, e.g.
/// `Lists/ContentTypes/Name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(pub Vec<FieldId>);

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: FieldId,
    pub op: BinaryOp,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: FieldId,
    pub direction: Direction,
}

impl Clause {
    /// The query-string parameter name the clause renders to.
    pub fn name(&self) -> &'static str {
        match self {
            Clause::Select(_) => "$select",
            Clause::Expand(_) => "$expand",
            Clause::Filter(_) => "$filter",
            Clause::OrderBy(_) => "$orderby",
            Clause::Top(_) => "$top",
            Clause::Skip(_) => "$skip",
        }
    }
}

impl FieldPath {
    pub fn single(field: FieldId) -> FieldPath {
        FieldPath(vec![field])
    }

    /// Returns a new path with `field` appended.
    pub fn child(&self, field: FieldId) -> FieldPath {
        let mut steps = self.0.clone();
        steps.push(field);
        FieldPath(steps)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.iter().copied()
    }
}

use super::Operation;
use crate::schema::app::FieldId;

/// An additional request loading one expandable field out-of-band.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    /// The expandable field on the parent model this request satisfies
    pub field: FieldId,

    pub operation: Operation,
}

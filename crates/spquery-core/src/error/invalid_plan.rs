use super::Error;

/// Error when a serializer receives a plan it cannot render.
///
/// The planner never produces such plans; seeing this error means the
/// planner and a serializer disagree about the plan contract.
#[derive(Debug)]
pub(super) struct InvalidPlan {
    message: Box<str>,
}

impl std::error::Error for InvalidPlan {}

impl core::fmt::Display for InvalidPlan {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid plan: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid plan error.
    pub fn invalid_plan(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPlan(InvalidPlan {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid plan error.
    pub fn is_invalid_plan(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidPlan(_))
    }
}

use crate::detail::PointId;
use crate::scene::SubjectId;
use thiserror::Error;

/// Errors raised by the interaction state machines.
///
/// None of these escape a frame: the [`crate::Viewer`] logs them and keeps
/// running. They are returned from the component APIs so callers and tests
/// can observe exactly why an operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("invalid state transition: {attempted} while {from}")]
    InvalidStateTransition {
        from: &'static str,
        attempted: &'static str,
    },
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(&'static str),
    #[error("configuration missing: {0}")]
    ConfigurationMissing(String),
    #[error("detail point {number} is hidden")]
    PointHidden { number: u32 },
    #[error("unknown subject {0:?}")]
    UnknownSubject(SubjectId),
    #[error("unknown detail point {0:?}")]
    UnknownPoint(PointId),
    #[error("object '{0}' is not inspectable")]
    NotInspectable(String),
}

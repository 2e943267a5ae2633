use thiserror::Error;

use super::SectionId;

/// Failures of the section navigation core.
///
/// None of these are surfaced to the visitor: the page keeps rendering and
/// the caller logs and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("section `{0}` is registered more than once")]
    DuplicateSection(SectionId),

    #[error("section registry is empty")]
    EmptyRegistry,

    #[error("viewport observer unavailable: {0}")]
    ObserverUnavailable(String),
}

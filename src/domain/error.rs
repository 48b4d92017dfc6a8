//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::composite::NodeId;

/// Domain errors represent structural violations of the pattern models.
/// These are independent of output and configuration concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("not a container: {0}")]
    NotAContainer(String),

    #[error("node already attached to a container: {0}")]
    AlreadyAttached(String),

    #[error("adding {child} to {parent} would create a cycle")]
    CycleDetected { parent: String, child: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

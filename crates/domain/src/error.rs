//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RestoHubError`] via `#[from]` (no `String` variants).

/// Top-level error shared by services, ports and adapters.
#[derive(Debug, thiserror::Error)]
pub enum RestoHubError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on user-supplied restaurant data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is blank. Carries the wire name of the field.
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable name of the record kind (e.g. `Restaurante`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

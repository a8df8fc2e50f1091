//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from search/web errors.

use super::ServiceId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Service was constructed with no legs
    #[error("service must have at least one leg")]
    EmptyService,

    /// Consecutive legs of a service do not form a chained path
    #[error("service {service} legs do not chain at leg {position}")]
    BrokenChain { service: ServiceId, position: usize },

    /// Route segment was constructed with no legs
    #[error("route segment must span at least one leg")]
    EmptySegment,

    /// Invalid segment construction (endpoints don't match the legs)
    #[error("invalid route segment: {0}")]
    InvalidSegment(&'static str),

    /// Invalid route construction (segments don't compose)
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),
}

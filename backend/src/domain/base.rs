/// Base abstractions for the domain layer
use std::fmt::Debug;

/// Trait for value objects - immutable objects defined by their attributes
/// Value objects are equal if all their attributes are equal
pub trait ValueObject: Clone + PartialEq + Debug {}

/// Trait for entities - objects with identity
/// Entities are equal if their IDs are equal, regardless of other attributes
pub trait Entity: Debug {
    type Id: ValueObject;

    fn id(&self) -> &Self::Id;
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value provided
    InvalidValue(String),
    /// Vector length differs from the configured dimensionality
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            DomainError::DimensionMismatch { expected, actual } => write!(
                f,
                "Embedding size mismatch: expected {} dimensions, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for DomainError {}

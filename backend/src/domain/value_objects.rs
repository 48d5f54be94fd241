/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// String-to-string metadata stored alongside a point
pub type Payload = HashMap<String, String>;

/// Unique identifier for a Point (UUID in string form)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointId(String);

impl PointId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        PointId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PointId {}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a collection in the vector database
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionName(String);

impl CollectionName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidValue(
                "Collection name cannot be empty".to_string(),
            ));
        }
        Ok(CollectionName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CollectionName {}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-empty embedding vector
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingVector(Vec<f32>);

impl EmbeddingVector {
    pub fn new(values: Vec<f32>) -> DomainResult<Self> {
        if values.is_empty() {
            return Err(DomainError::InvalidValue(
                "Embedding vector cannot be empty".to_string(),
            ));
        }
        Ok(EmbeddingVector(values))
    }

    /// Create a vector that must have exactly `expected` dimensions
    pub fn with_dimension(values: Vec<f32>, expected: usize) -> DomainResult<Self> {
        let vector = Self::new(values)?;
        vector.ensure_dimension(expected)?;
        Ok(vector)
    }

    pub fn ensure_dimension(&self, expected: usize) -> DomainResult<()> {
        if self.0.len() != expected {
            return Err(DomainError::DimensionMismatch {
                expected,
                actual: self.0.len(),
            });
        }
        Ok(())
    }

    pub fn dimensions(&self) -> &[f32] {
        &self.0
    }

    pub fn dimension_count(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl ValueObject for EmbeddingVector {}

//! Error types for soft body construction and parameter updates.

use core::fmt;

/// Errors raised when a body or one of its parameters would be invalid.
///
/// The step itself never fails; everything here is caught up front.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A closed ring needs at least 3 vertexes.
    InsufficientVertexes { count: usize },
    /// Radius must be positive and finite.
    InvalidRadius,
    /// Mass must be positive and finite.
    InvalidMass,
    /// Stiffness must be non-negative and finite.
    InvalidStiffness,
    /// Damping coefficient must be non-negative and finite.
    InvalidDamping,
    /// A position, vector or gas parameter was NaN or infinite.
    NonFiniteParameter,
    /// A spring would connect two coincident vertexes.
    DegenerateSpring { index: usize },
    /// Vertex index is out of bounds.
    VertexOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InsufficientVertexes { count } => {
                write!(f, "soft body needs at least 3 vertexes (got {})", count)
            }
            PhysicsError::InvalidRadius => write!(f, "radius must be positive and finite"),
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be non-negative and finite"),
            PhysicsError::InvalidDamping => write!(f, "damping must be non-negative and finite"),
            PhysicsError::NonFiniteParameter => write!(f, "parameter must be finite"),
            PhysicsError::DegenerateSpring { index } => {
                write!(f, "spring {} has zero rest length", index)
            }
            PhysicsError::VertexOutOfBounds { index, count } => {
                write!(f, "vertex index {} out of bounds (count: {})", index, count)
            }
        }
    }
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite<F: crate::Float>(value: F) -> Result<F, PhysicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::NonFiniteParameter)
    }
}

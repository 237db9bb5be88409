//! Error types for construction and configuration.
//!
//! The geometric operations themselves never fail; degenerate inputs are
//! handled by defined fallback behavior instead.

use thiserror::Error;

use crate::collision::Axis;

/// Errors raised when building bodies or resolver settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// A resolver setting is out of its accepted range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A box extent is negative or not finite.
    #[error("Invalid size on {axis} axis: {value}")]
    InvalidSize { axis: Axis, value: f32 },

    /// Friction is negative or not finite.
    #[error("Invalid friction: {0}")]
    InvalidFriction(f32),
}

/// Convenience alias for `Result<T, CollisionError>`.
pub type CollisionResult<T> = Result<T, CollisionError>;

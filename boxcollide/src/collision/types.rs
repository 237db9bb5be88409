/*!
Core collision types and math aliases shared by the collision submodules.

This module contains no algorithms. It defines the data exchanged between:
- overlap (axis-aligned box intersection tests)
- resolve (penetration search and velocity transfer)
- broad (bounding-volume acceleration over many bodies)
- step (sequential resolution of one body against many)

Bodies are owned by the surrounding simulation loop. The collision code only
borrows them: shared borrows for the stationary side of a pair, a mutable
borrow for the side being pushed out.
*/

use nalgebra as na;

use super::settings::DEFAULT_FRICTION;
use crate::error::{CollisionError, CollisionResult};

/// Common math alias for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;

/// One of the three world axes.
///
/// `Axis::ALL` is also the tie-break order used when picking which single axis
/// separates two boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes that are not `self`, in x, y, z order.
    #[inline]
    pub const fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Read access to anything that can take part in a collision.
///
/// The box of a body is always centered on `position`, axis-aligned, and spans
/// `size` (full width, height, depth).
pub trait Body {
    /// Center of the box (world space).
    fn position(&self) -> Vec3;

    /// Current velocity (world units per step).
    fn velocity(&self) -> Vec3;

    /// Full extents of the box. Components must be finite and non-negative.
    fn size(&self) -> Vec3;

    /// Friction applied to bodies sliding along this one.
    ///
    /// Only consulted when this body is the stationary side of a pair.
    #[inline]
    fn friction(&self) -> f32 {
        DEFAULT_FRICTION
    }

    /// The derived box for this body.
    #[inline]
    fn shape(&self) -> BoxShape {
        BoxShape::new(self.position(), self.size())
    }

    /// Whether this body's box strictly intersects `other`'s box.
    #[inline]
    fn overlaps_with<O: Body + ?Sized>(&self, other: &O) -> bool
    where
        Self: Sized,
    {
        super::overlap::overlaps(self.position(), self.size(), other.position(), other.size())
    }
}

/// Write access for the body being pushed out of penetration.
pub trait MovableBody: Body {
    fn set_position(&mut self, position: Vec3);

    fn set_velocity(&mut self, velocity: Vec3);
}

/// An axis-aligned box described by its center and full extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxShape {
    pub center: Vec3,
    pub size: Vec3,
}

impl BoxShape {
    #[inline]
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn from_body<B: Body + ?Sized>(body: &B) -> Self {
        Self::new(body.position(), body.size())
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    /// Minimum corner (world space).
    #[inline]
    pub fn mins(&self) -> Vec3 {
        self.center - self.half_extents()
    }

    /// Maximum corner (world space).
    #[inline]
    pub fn maxs(&self) -> Vec3 {
        self.center + self.half_extents()
    }

    /// Same box moved by `offset`.
    #[inline]
    pub fn shifted(&self, offset: Vec3) -> Self {
        Self::new(self.center + offset, self.size)
    }

    /// Strict (open interval) intersection test against another box.
    #[inline]
    pub fn overlaps_box(&self, other: &BoxShape) -> bool {
        super::overlap::overlaps(self.center, self.size, other.center, other.size)
    }
}

/// A plain value body: the simplest thing that implements [`Body`] and [`MovableBody`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub size: Vec3,
    /// `None` means the default passthrough friction (1.0).
    pub friction: Option<f32>,
}

impl BoxBody {
    /// A resting body with default friction.
    #[inline]
    pub fn new(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            size,
            friction: None,
        }
    }

    /// Like [`BoxBody::new`], but rejects negative or non-finite extents.
    pub fn try_new(position: Vec3, size: Vec3) -> CollisionResult<Self> {
        validate_size(size)?;
        Ok(Self::new(position, size))
    }

    #[inline]
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    /// Set friction, rejecting negative or non-finite values.
    pub fn try_with_friction(self, friction: f32) -> CollisionResult<Self> {
        if !friction.is_finite() || friction < 0.0 {
            return Err(CollisionError::InvalidFriction(friction));
        }
        Ok(self.with_friction(friction))
    }
}

impl Body for BoxBody {
    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    fn size(&self) -> Vec3 {
        self.size
    }

    #[inline]
    fn friction(&self) -> f32 {
        self.friction.unwrap_or(DEFAULT_FRICTION)
    }
}

impl MovableBody for BoxBody {
    #[inline]
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline]
    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
}

/// Check that every extent is finite and non-negative.
pub fn validate_size(size: Vec3) -> CollisionResult<()> {
    for axis in Axis::ALL {
        let value = size[axis.index()];
        if !value.is_finite() || value < 0.0 {
            return Err(CollisionError::InvalidSize { axis, value });
        }
    }
    Ok(())
}

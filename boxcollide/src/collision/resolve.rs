use log::{debug, trace};

use super::{
    overlap::overlaps,
    settings::{ResolverSettings, fallback_direction},
    types::{Axis, Body, BoxShape, MovableBody, Vec3},
};
use crate::error::CollisionResult;

/// Outcome of a single [`PenetrationResolver::resolve_contact`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// The boxes did not overlap; nothing was changed.
    Separate,
    /// Moved out along a single axis.
    Axis {
        axis: Axis,
        /// Fraction (in -1..0) of the relative velocity that was backed off.
        clearance: f32,
    },
    /// No single axis cleared the overlap. The full displacement was applied
    /// and the moving body's velocity was zeroed.
    Fallback { clearance: f32 },
}

impl Resolution {
    /// True when the body came to rest on top of the other one (resolved on y).
    #[inline]
    pub fn is_grounded(&self) -> bool {
        matches!(self, Resolution::Axis { axis: Axis::Y, .. })
    }

    /// True when a position correction was applied.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Separate)
    }
}

/// Pushes a moving body out of another body's box and transfers velocity.
///
/// The resolver holds no per-body state; one instance can be shared across an
/// entire simulation and called once per step for each candidate pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct PenetrationResolver {
    settings: ResolverSettings,
}

impl PenetrationResolver {
    /// Build a resolver, capping the search iteration count at
    /// `MAX_SEARCH_ITERATIONS`. Zero iterations is kept as is.
    ///
    /// [`MAX_SEARCH_ITERATIONS`]: super::settings::MAX_SEARCH_ITERATIONS
    #[inline]
    pub fn new(settings: ResolverSettings) -> Self {
        Self {
            settings: settings.clamped(),
        }
    }

    /// Build a resolver, rejecting out-of-range settings.
    pub fn try_new(settings: ResolverSettings) -> CollisionResult<Self> {
        Ok(Self {
            settings: settings.validated()?,
        })
    }

    #[inline]
    pub fn settings(&self) -> ResolverSettings {
        self.settings
    }

    /// Resolve `body` against `other`.
    ///
    /// Returns true only when the body was pushed out along y, which callers use
    /// as "landed on a surface" (ground contact, jump reset).
    #[inline]
    pub fn resolve<S, O>(&self, body: &mut S, other: &O) -> bool
    where
        S: MovableBody + ?Sized,
        O: Body + ?Sized,
    {
        self.resolve_contact(body, other).is_grounded()
    }

    /// Resolve `body` against `other`, reporting which correction was applied.
    ///
    /// Algorithm:
    /// - If the boxes don't overlap, return [`Resolution::Separate`] untouched.
    /// - Binary search along the relative velocity for the smallest backward
    ///   displacement that clears the overlap.
    /// - Try that displacement on x, then y, then z alone; the first axis that
    ///   clears wins. The body takes `other`'s velocity on that axis and keeps a
    ///   friction-scaled share of its relative velocity on the other two.
    /// - If no single axis clears, apply the whole displacement and stop the body.
    pub fn resolve_contact<S, O>(&self, body: &mut S, other: &O) -> Resolution
    where
        S: MovableBody + ?Sized,
        O: Body + ?Sized,
    {
        let shape = BoxShape::from_body(&*body);
        let other_shape = BoxShape::from_body(other);

        if !shape.overlaps_box(&other_shape) {
            return Resolution::Separate;
        }

        let other_velocity = other.velocity();
        let relative = probe_direction(body.velocity() - other_velocity);
        let clearance =
            search_clearance(&shape, &other_shape, relative, self.settings.search_iterations);

        // Boxes are axis-aligned, so one component of the displacement is
        // normally enough to separate them.
        for axis in Axis::ALL {
            let i = axis.index();
            let mut candidate = shape.center;
            candidate[i] += relative[i] * clearance;

            if overlaps(candidate, shape.size, other_shape.center, other_shape.size) {
                continue;
            }

            let velocity =
                transfer_velocity(body.velocity(), other_velocity, axis, other.friction());
            body.set_position(candidate);
            body.set_velocity(velocity);

            trace!("resolved on {axis} axis (clearance {clearance})");
            return Resolution::Axis { axis, clearance };
        }

        // Only reachable when even a full relative-velocity step back does not
        // clear the overlap (penetration deeper than one step).
        debug!("no single axis clears overlap; applying full displacement (clearance {clearance})");
        body.set_position(shape.center + relative * clearance);
        body.set_velocity(Vec3::zeros());
        Resolution::Fallback { clearance }
    }
}

/// Direction the search probes along: the relative velocity, or the downward
/// fallback when the bodies move identically.
#[inline]
pub fn probe_direction(relative_velocity: Vec3) -> Vec3 {
    if relative_velocity == Vec3::zeros() {
        debug!("zero relative velocity; probing with fallback direction");
        return fallback_direction();
    }
    relative_velocity
}

/// Binary search for the clearing displacement along `direction`.
///
/// Invariants kept across iterations:
/// - `shape` shifted by `direction * high` still overlaps `other` (starts at 0).
/// - `shape` shifted by `direction * low` is taken as clear (starts at -1, one
///   full step back).
///
/// Returns `low`, known to within `2^-iterations` of the true boundary.
pub fn search_clearance(shape: &BoxShape, other: &BoxShape, direction: Vec3, iterations: u32) -> f32 {
    let mut high = 0.0_f32;
    let mut low = -1.0_f32;

    for _ in 0..iterations {
        let mid = (high + low) / 2.0;
        if shape.shifted(direction * mid).overlaps_box(other) {
            // Still inside: go farther back.
            high = mid;
        } else {
            low = mid;
        }
    }

    low
}

/// Velocity after resolving along `axis` against a body moving at `other_velocity`.
///
/// The resolving axis adopts the other body's velocity. The remaining axes keep
/// their velocity relative to the other body scaled by `friction`.
#[inline]
pub fn transfer_velocity(velocity: Vec3, other_velocity: Vec3, axis: Axis, friction: f32) -> Vec3 {
    let mut out = velocity;
    out[axis.index()] = other_velocity[axis.index()];
    for slide in axis.others() {
        let i = slide.index();
        out[i] = (velocity[i] - other_velocity[i]) * friction + other_velocity[i];
    }
    out
}

/*!
Penetration resolver settings and tolerances.

These constants centralize the parameters used by the overlap search and the
velocity transfer applied after a contact. Keeping them together makes tuning
easier and keeps resolution deterministic across platforms.

Notes
- Distances are in world units, velocities in world units per step.
- Search precision is relative: after `n` iterations the clearance scalar is
  known to within `2^-n` of one full relative-velocity step.
- If you want per-body customization, keep these as defaults and override
  through [`ResolverSettings`].
*/

use log::warn;

use super::types::Vec3;
use crate::error::{CollisionError, CollisionResult};

/// Binary search iterations used to find the clearing displacement.
/// 10 iterations resolve to roughly 1/1024 of a relative-velocity step.
pub const DEFAULT_SEARCH_ITERATIONS: u32 = 10;

/// Upper bound accepted by validation. Beyond this, f32 halving stops
/// producing distinct midpoints.
pub const MAX_SEARCH_ITERATIONS: u32 = 32;

/// Friction of a body that does not specify one. 1.0 passes the sliding
/// velocity through unchanged.
pub const DEFAULT_FRICTION: f32 = 1.0;

/// Probe direction used when two overlapping bodies have identical velocity.
/// The search backs off along the negation of this, i.e. upward.
pub const FALLBACK_DIRECTION: [f32; 3] = [0.0, -1.0, 0.0];

/// `FALLBACK_DIRECTION` as a vector.
#[inline]
pub fn fallback_direction() -> Vec3 {
    Vec3::from(FALLBACK_DIRECTION)
}

/// Per-resolver tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Number of halvings performed by the clearance search.
    pub search_iterations: u32,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            search_iterations: DEFAULT_SEARCH_ITERATIONS,
        }
    }
}

impl ResolverSettings {
    #[inline]
    pub fn with_search_iterations(mut self, search_iterations: u32) -> Self {
        self.search_iterations = search_iterations;
        self
    }

    /// Reject settings the search cannot use meaningfully.
    ///
    /// Zero iterations is accepted: the search then keeps `low = -1` and the
    /// resolver backs off one full relative-velocity step.
    pub fn validate(&self) -> CollisionResult<()> {
        if self.search_iterations > MAX_SEARCH_ITERATIONS {
            return Err(CollisionError::InvalidConfig(format!(
                "search_iterations must be at most {MAX_SEARCH_ITERATIONS}, got {}",
                self.search_iterations
            )));
        }
        Ok(())
    }

    /// Validate and log the rejection, for construction paths that surface it.
    pub(crate) fn validated(self) -> CollisionResult<Self> {
        if let Err(err) = self.validate() {
            warn!("rejecting resolver settings {:?}: {}", self, err);
            return Err(err);
        }
        Ok(self)
    }

    /// Same settings with the iteration count capped at `MAX_SEARCH_ITERATIONS`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            search_iterations: self.search_iterations.min(MAX_SEARCH_ITERATIONS),
        }
    }
}

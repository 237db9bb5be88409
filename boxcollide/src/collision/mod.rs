/*!
Collision root module.

Axis-aligned box collision for a simple real-time simulation: detect overlap
between two boxes and push a moving body back out along its relative motion,
transferring velocity so it stops, slides, or rides along with what it hit.

- types:    shared data types (Vec3, Axis, Body traits, BoxShape, BoxBody)
- settings: resolver tunables and defaults
- overlap:  strict open-interval box intersection
- resolve:  binary-search penetration resolver with axis tie-break
- broad:    parry BVH over body AABBs for candidate pairs
- step:     sequential resolution of one body against many
*/

pub mod broad;
pub mod overlap;
pub mod resolve;
pub mod settings;
pub mod step;
pub mod types;

// Re-export commonly used types and functions.
pub use broad::{BodyAccel, build_body_accel, candidate_pairs, overlapping_pairs};
pub use overlap::{overlaps, overlaps_on_axis};
pub use resolve::{PenetrationResolver, Resolution, search_clearance, transfer_velocity};
pub use settings::ResolverSettings;
pub use step::{StepReport, resolve_against_accel, resolve_against_all};
pub use types::{Axis, Body, BoxBody, BoxShape, MovableBody, Vec3};

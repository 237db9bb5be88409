pub mod collision;
pub mod error;
pub mod rapier;

pub use collision::{
    Axis, Body, BodyAccel, BoxBody, BoxShape, MovableBody, PenetrationResolver, Resolution,
    ResolverSettings, StepReport, Vec3, build_body_accel, overlaps, resolve_against_accel,
    resolve_against_all,
};
pub use error::{CollisionError, CollisionResult};
pub use rapier::{BoxColliderDef, collider_from_body, collider_from_def};

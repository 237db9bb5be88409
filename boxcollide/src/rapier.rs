use rapier3d::prelude::*;

use crate::collision::{Body, BoxShape, Vec3};

/// Schema-agnostic description of a body's box as a Rapier collider.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxColliderDef {
    /// World-space center of the box.
    pub translation: Vec3,
    /// Half of the full extents (Rapier cuboids are built from half-extents).
    pub half_extents: Vec3,
    /// Friction carried over from the body.
    pub friction: f32,
}

impl BoxColliderDef {
    pub fn from_body<B: Body + ?Sized>(body: &B) -> Self {
        let shape = BoxShape::from_body(body);
        Self {
            translation: shape.center,
            half_extents: shape.half_extents(),
            friction: body.friction(),
        }
    }
}

/// Build a Rapier cuboid collider matching a body's axis-aligned box.
///
/// The collider is placed with its own translation and no rotation, so it can
/// be inserted into a `ColliderSet` without a parent rigid body.
pub fn collider_from_def(def: &BoxColliderDef) -> Collider {
    let h = def.half_extents;
    ColliderBuilder::cuboid(h.x, h.y, h.z)
        .translation(def.translation)
        .friction(def.friction)
        .build()
}

/// Convenience: [`collider_from_def`] straight from a body.
#[inline]
pub fn collider_from_body<B: Body + ?Sized>(body: &B) -> Collider {
    collider_from_def(&BoxColliderDef::from_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::BoxBody;

    #[test]
    fn collider_mirrors_body_box() {
        let body = BoxBody::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0)).with_friction(0.3);
        let collider = collider_from_body(&body);

        let cuboid = collider.shape().as_cuboid().expect("cuboid shape");
        assert_eq!(cuboid.half_extents, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(*collider.translation(), Vec3::new(1.0, 2.0, 3.0));
        assert!((collider.friction() - 0.3).abs() < 1.0e-6);
    }

    #[test]
    fn def_uses_default_friction_when_unset() {
        let body = BoxBody::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(BoxColliderDef::from_body(&body).friction, 1.0);
    }
}

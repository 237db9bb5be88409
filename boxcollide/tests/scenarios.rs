use boxcollide::{
    Axis, Body, BoxBody, CollisionError, PenetrationResolver, Resolution, ResolverSettings, Vec3,
    build_body_accel, collision::overlapping_pairs, overlaps, resolve_against_accel,
};

fn cube(edge: f32) -> Vec3 {
    Vec3::new(edge, edge, edge)
}

/// A body type owned by some other simulation, exposing only what collision needs.
struct Player {
    pos: Vec3,
    vel: Vec3,
    on_ground: bool,
}

impl Body for Player {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn velocity(&self) -> Vec3 {
        self.vel
    }

    fn size(&self) -> Vec3 {
        Vec3::new(1.0, 2.0, 1.0)
    }
}

impl boxcollide::MovableBody for Player {
    fn set_position(&mut self, position: Vec3) {
        self.pos = position;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.vel = velocity;
    }
}

/// Ice: sliding keeps all of its velocity. Mud: sliding loses most of it.
fn ground(friction: f32) -> BoxBody {
    BoxBody::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(200.0, 2.0, 200.0)).with_friction(friction)
}

#[test]
fn touching_boxes_do_not_overlap() {
    assert!(!overlaps(Vec3::zeros(), cube(2.0), Vec3::new(2.0, 0.0, 0.0), cube(2.0)));
    assert!(overlaps(Vec3::zeros(), cube(2.0), Vec3::new(1.0, 0.0, 0.0), cube(2.0)));
}

#[test]
fn custom_body_lands_and_keeps_sliding_on_ice() {
    let resolver = PenetrationResolver::default();
    let ice = ground(1.0);
    let mut player = Player {
        pos: Vec3::new(0.0, 0.9, 0.0),
        vel: Vec3::new(3.0, -4.0, 0.0),
        on_ground: false,
    };

    player.on_ground = resolver.resolve(&mut player, &ice);

    assert!(player.on_ground);
    assert_eq!(player.vel, Vec3::new(3.0, 0.0, 0.0));
    assert!(!overlaps(player.pos, player.size(), ice.position, ice.size));
}

#[test]
fn mud_scales_sliding_velocity() {
    let resolver = PenetrationResolver::default();
    let mud = ground(0.25);
    let mut player = Player {
        pos: Vec3::new(0.0, 0.9, 0.0),
        vel: Vec3::new(4.0, -4.0, -2.0),
        on_ground: false,
    };

    assert!(resolver.resolve(&mut player, &mud));
    assert!((player.vel.x - 1.0).abs() < 1.0e-6);
    assert_eq!(player.vel.y, 0.0);
    assert!((player.vel.z + 0.5).abs() < 1.0e-6);
}

#[test]
fn riding_a_moving_platform_takes_its_velocity() {
    let resolver = PenetrationResolver::default();
    // Platform moving right and up; top surface at y = 1.
    let platform = BoxBody::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(4.0, 1.0, 4.0))
        .with_velocity(Vec3::new(1.5, 0.5, 0.0));
    let mut rider = BoxBody::new(Vec3::new(0.0, 1.45, 0.0), cube(1.0))
        .with_velocity(Vec3::new(0.0, -1.0, 0.0));

    let res = resolver.resolve_contact(&mut rider, &platform);
    assert!(matches!(res, Resolution::Axis { axis: Axis::Y, .. }));
    assert_eq!(rider.velocity.y, 0.5);
    // Relative x velocity (0 - 1.5) passes through at friction 1.0.
    assert!((rider.velocity.x - 0.0).abs() < 1.0e-6);
    assert!(!rider.overlaps_with(&platform));
}

#[test]
fn invalid_configuration_is_reported() {
    let err = PenetrationResolver::try_new(ResolverSettings::default().with_search_iterations(1000))
        .unwrap_err();
    assert!(matches!(err, CollisionError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("Invalid configuration"));
}

#[test]
fn broad_phase_drives_a_small_world() {
    let resolver = PenetrationResolver::default();
    let mut bodies = vec![
        ground(1.0),
        BoxBody::new(Vec3::new(-3.0, 0.4, 0.0), cube(1.0)).with_velocity(Vec3::new(0.0, -2.0, 0.0)),
        BoxBody::new(Vec3::new(3.0, 0.45, 0.0), cube(1.0)).with_velocity(Vec3::new(0.0, -1.0, 0.0)),
        BoxBody::new(Vec3::new(40.0, 5.0, 0.0), cube(1.0)),
    ];

    let accel = build_body_accel(&bodies);
    assert_eq!(overlapping_pairs(&accel, &bodies), vec![(0, 1), (0, 2)]);

    // Everything but the ground moves; the ground stays put.
    for i in 1..bodies.len() {
        let mut mover = bodies[i];
        let report = resolve_against_accel(&resolver, &mut mover, &bodies, &accel, Some(i));
        bodies[i] = mover;
        assert_eq!(report.grounded, i != 3);
    }

    for i in 1..bodies.len() {
        assert!(!bodies[i].overlaps_with(&bodies[0]));
    }
}

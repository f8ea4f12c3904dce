use crate::core::math::Vec2;
use crate::core::utils::random::Rng;
use crate::domain::constants::{
    COMPONENT_MASS, GALAXY_MAX_RADIUS, GALAXY_MIN_RADIUS, SPAWN_MAX_SPEED, STAR_COMPONENT_EXTENT,
};
use crate::domain::entities::{BodyKind, Component, CompositeBody};

/// Random canvas position and drift shared by every kind of body
fn body_shell(kind: BodyKind, id: u32, canvas: Vec2, rng: &mut Rng) -> CompositeBody {
    let position = Vec2::new(rng.range(0.0, canvas.x), rng.range(0.0, canvas.y));
    let velocity = Vec2::new(
        rng.range(-SPAWN_MAX_SPEED, SPAWN_MAX_SPEED),
        rng.range(-SPAWN_MAX_SPEED, SPAWN_MAX_SPEED),
    );

    CompositeBody {
        id,
        kind,
        position,
        velocity,
        mass: kind.mass(),
        color: kind.color(),
        components: Vec::with_capacity(kind.component_count()),
    }
}

/// A star: a tight square cloud of resting components
pub fn build_star(id: u32, canvas: Vec2, rng: &mut Rng) -> CompositeBody {
    let mut body = body_shell(BodyKind::Star, id, canvas, rng);
    let e = STAR_COMPONENT_EXTENT;

    for _ in 0..BodyKind::Star.component_count() {
        body.components.push(Component {
            offset: Vec2::new(rng.range(-e, e), rng.range(-e, e)),
            velocity: Vec2::ZERO,
            mass: COMPONENT_MASS,
        });
    }
    body
}

/// A galaxy: a drifting annulus of components around the body origin
pub fn build_galaxy(id: u32, canvas: Vec2, rng: &mut Rng) -> CompositeBody {
    let mut body = body_shell(BodyKind::Galaxy, id, canvas, rng);

    for _ in 0..BodyKind::Galaxy.component_count() {
        let angle = rng.angle();
        let radius = rng.range(GALAXY_MIN_RADIUS, GALAXY_MAX_RADIUS);
        body.components.push(Component {
            offset: Vec2::from_polar(radius, angle),
            velocity: Vec2::new(
                rng.range(-SPAWN_MAX_SPEED, SPAWN_MAX_SPEED),
                rng.range(-SPAWN_MAX_SPEED, SPAWN_MAX_SPEED),
            ),
            mass: COMPONENT_MASS,
        });
    }
    body
}

use crate::core::math::Vec2;
use crate::domain::config::SimConfig;
use crate::domain::constants::{DEFAULT_COUPLING, DEFAULT_MIN_DISTANCE, MAX_SPEED};
use crate::domain::entities::Attractor;

/// Integration constants shared by every point in a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceParams {
    pub coupling: f32,
    pub min_distance: f32,
}

impl ForceParams {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            coupling: config.coupling,
            min_distance: config.min_distance,
        }
    }
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            coupling: DEFAULT_COUPLING,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

/// Inverse-square force magnitude, F = M·m / d².
/// `distance` is floored to `min_distance` so F stays bounded.
#[inline(always)]
pub fn attraction(attractor_mass: f32, point_mass: f32, distance: f32, min_distance: f32) -> f32 {
    let d = distance.max(min_distance);
    attractor_mass * (point_mass / (d * d))
}

/// Pull a point toward the attractor and advance it one frame.
///
/// The point lives at `origin + local`; only `local` and `velocity` are
/// written. Bodies pass `Vec2::ZERO` as origin, components pass their
/// parent's position.
///
/// Speed is capped at `MAX_SPEED`, so state stays finite for any finite
/// mass and coupling.
///
/// Returns the distance to the attractor measured before the move.
#[inline(always)]
pub fn integrate(
    attractor: &Attractor,
    origin: Vec2,
    local: &mut Vec2,
    velocity: &mut Vec2,
    mass: f32,
    params: ForceParams,
) -> f32 {
    let delta = attractor.position() - (origin + *local);
    let distance = delta.length();

    // At d == 0 the direction is undefined: no impulse this frame.
    if distance > 0.0 {
        let force = attraction(attractor.mass(), mass, distance, params.min_distance);
        let raw = force * params.coupling;
        let kick = if raw.is_nan() { 0.0 } else { raw.clamp(-MAX_SPEED, MAX_SPEED) };
        let direction = Vec2::new(delta.x / distance, delta.y / distance);
        *velocity += direction * kick;
        *velocity = velocity.clamp_length(MAX_SPEED);
    }

    *local += *velocity;
    distance
}

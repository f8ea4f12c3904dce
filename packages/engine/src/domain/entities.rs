use serde::Serialize;

use crate::core::math::Vec2;

use super::color::Color;
use super::constants::{
    GALAXY_COMPONENTS, GALAXY_MASS, MAX_ATTRACTOR_MASS, MIN_ATTRACTOR_MASS, PHOTON_SPHERE_FACTOR,
    STAR_COMPONENTS, STAR_MASS,
};

/// The central black hole
#[derive(Clone, Debug, PartialEq)]
pub struct Attractor {
    position: Vec2,
    mass: f32,
    radius: f32,
    event_horizon_radius: f32,
    photon_sphere_radius: f32,
}

impl Attractor {
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Self {
        let mut attractor = Self {
            position,
            mass: mass.clamp(MIN_ATTRACTOR_MASS, MAX_ATTRACTOR_MASS),
            radius,
            event_horizon_radius: 0.0,
            photon_sphere_radius: 0.0,
        };
        attractor.refresh_radii();
        attractor
    }

    pub fn position(&self) -> Vec2 { self.position }

    pub fn mass(&self) -> f32 { self.mass }

    pub fn radius(&self) -> f32 { self.radius }

    pub fn event_horizon_radius(&self) -> f32 { self.event_horizon_radius }

    pub fn photon_sphere_radius(&self) -> f32 { self.photon_sphere_radius }

    /// Add (or with a negative amount, remove) mass.
    ///
    /// Non-finite amounts are ignored and the result stays within
    /// `[MIN_ATTRACTOR_MASS, MAX_ATTRACTOR_MASS]`. Returns true when the
    /// result had to be clamped.
    pub fn add_mass(&mut self, amount: f32) -> bool {
        if !amount.is_finite() {
            return false;
        }
        let next = self.mass + amount;
        self.mass = next.clamp(MIN_ATTRACTOR_MASS, MAX_ATTRACTOR_MASS);
        self.refresh_radii();
        self.mass != next
    }

    /// Derived radii follow `radius`, which mass changes leave untouched.
    fn refresh_radii(&mut self) {
        self.event_horizon_radius = self.radius;
        self.photon_sphere_radius = self.radius * PHOTON_SPHERE_FACTOR;
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.position.distance(point)
    }

    /// True when `point` is strictly inside the event horizon
    pub fn captures(&self, point: Vec2) -> bool {
        self.distance_to(point) < self.event_horizon_radius
    }

    /// Removal rule for anything that moved this frame: inside the horizon
    /// before or after the move. Non-finite state counts as captured.
    pub fn swallows(&self, start_distance: f32, end: Vec2) -> bool {
        let end_distance = self.distance_to(end);
        let outside = |d: f32| d.is_finite() && d >= self.event_horizon_radius;
        !(outside(start_distance) && outside(end_distance))
    }
}

/// A lightweight accretion-disk particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiskParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Also used as the drawn diameter
    pub mass: f32,
}

impl DiskParticle {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32) -> Self {
        Self { position, velocity, mass }
    }
}

/// Kinds of composite bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Galaxy,
}

impl BodyKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Galaxy => "galaxy",
        }
    }

    pub fn mass(&self) -> f32 {
        match self {
            Self::Star => STAR_MASS,
            Self::Galaxy => GALAXY_MASS,
        }
    }

    pub fn component_count(&self) -> usize {
        match self {
            Self::Star => STAR_COMPONENTS,
            Self::Galaxy => GALAXY_COMPONENTS,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Star => Color::STAR_YELLOW,
            Self::Galaxy => Color::GALAXY_BLUE,
        }
    }
}

/// A sub-particle of a composite body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Component {
    /// Offset from the parent body's position
    pub offset: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
}

/// A star or galaxy: one heavy point plus components that feel the pull on their own
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeBody {
    pub id: u32,
    pub kind: BodyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub color: Color,
    pub components: Vec<Component>,
}

impl CompositeBody {
    /// Absolute (canvas) position of every component
    pub fn component_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        let origin = self.position;
        self.components.iter().map(move |c| origin + c.offset)
    }
}

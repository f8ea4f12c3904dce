use crate::core::math::Vec2;
use crate::core::utils::random::Rng;
use crate::domain::entities::{Attractor, BodyKind, CompositeBody};
use crate::systems::gravity::{integrate, ForceParams};

use super::spawn::{build_galaxy, build_star};

/// Manages all composite bodies in the simulation
pub struct BodySet {
    bodies: Vec<CompositeBody>,
    next_id: u32,
}

/// Bodies swallowed during one step
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyStepReport {
    pub captured: Vec<u32>,
}

impl BodySet {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Add a star somewhere on the canvas. Returns the body ID.
    pub fn add_star(&mut self, canvas: Vec2, rng: &mut Rng) -> u32 {
        let id = self.take_id();
        self.bodies.push(build_star(id, canvas, rng));
        id
    }

    /// Add a galaxy somewhere on the canvas. Returns the body ID.
    pub fn add_galaxy(&mut self, canvas: Vec2, rng: &mut Rng) -> u32 {
        let id = self.take_id();
        self.bodies.push(build_galaxy(id, canvas, rng));
        id
    }

    pub fn add(&mut self, kind: BodyKind, canvas: Vec2, rng: &mut Rng) -> u32 {
        match kind {
            BodyKind::Star => self.add_star(canvas, rng),
            BodyKind::Galaxy => self.add_galaxy(canvas, rng),
        }
    }

    /// Insert a prebuilt body; its id is replaced by a fresh one.
    pub fn insert(&mut self, mut body: CompositeBody) -> u32 {
        let id = self.take_id();
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Remove a body by ID. Returns false if no such body.
    pub fn remove(&mut self, id: u32) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    /// Remove all bodies (used by Simulation::reset()).
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    pub fn get(&self, id: u32) -> Option<&CompositeBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompositeBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.bodies.iter().map(|b| b.components.len()).sum()
    }

    /// Main update loop.
    ///
    /// Body first, then its components against the body's new position.
    /// Captured bodies are compacted out in the same pass; each body is
    /// visited exactly once.
    pub fn step(&mut self, attractor: &Attractor, params: ForceParams) -> BodyStepReport {
        let mut report = BodyStepReport::default();

        self.bodies.retain_mut(|body| {
            let start_distance = integrate(
                attractor,
                Vec2::ZERO,
                &mut body.position,
                &mut body.velocity,
                body.mass,
                params,
            );

            let origin = body.position;
            for component in body.components.iter_mut() {
                integrate(
                    attractor,
                    origin,
                    &mut component.offset,
                    &mut component.velocity,
                    component.mass,
                    params,
                );
            }

            let captured = attractor.swallows(start_distance, body.position);
            if captured {
                report.captured.push(body.id);
            }
            !captured
        });

        report
    }
}

impl Default for BodySet {
    fn default() -> Self {
        Self::new()
    }
}

use crate::core::math::Vec2;
use crate::core::utils::random::Rng;
use crate::domain::config::SimConfig;
use crate::domain::constants::{
    DEFAULT_DISK_INNER_MARGIN, DEFAULT_SPAWN_INTERVAL, DISK_PARTICLE_MAX_MASS,
    DISK_PARTICLE_MIN_MASS, SPAWN_MAX_SPEED,
};
use crate::domain::entities::{Attractor, DiskParticle};
use crate::systems::gravity::{integrate, ForceParams};

/// What one `step` did to the population
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiskStepReport {
    pub removed: u32,
    pub spawned: u32,
}

/// Owns every accretion-disk particle
pub struct ParticleField {
    particles: Vec<DiskParticle>,
    /// Steps taken so far (drives the spawn cadence)
    frame: u64,
    spawn_interval: u64,
    inner_margin: f32,
    max_particles: Option<usize>,
}

impl ParticleField {
    pub fn new(spawn_interval: u32, inner_margin: f32, max_particles: Option<u32>) -> Self {
        Self {
            particles: Vec::new(),
            frame: 0,
            spawn_interval: spawn_interval.max(1) as u64,
            inner_margin,
            max_particles: max_particles.map(|m| m as usize),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            config.spawn_interval,
            config.disk_inner_margin,
            config.max_disk_particles,
        )
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn particles(&self) -> &[DiskParticle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiskParticle> {
        self.particles.iter()
    }

    fn is_full(&self) -> bool {
        self.max_particles.is_some_and(|max| self.particles.len() >= max)
    }

    /// Insert a particle as-is. Returns false when the cap is reached.
    pub fn insert(&mut self, particle: DiskParticle) -> bool {
        if self.is_full() {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Place a fresh particle on the spawn ring.
    ///
    /// Radius is uniform in [horizon + inner_margin, canvas_width / 2]; when
    /// the canvas is too narrow for that ring the inner radius is used.
    pub fn spawn_particle(&mut self, attractor: &Attractor, canvas_width: f32, rng: &mut Rng) -> bool {
        if self.is_full() {
            return false;
        }

        let angle = rng.angle();
        let inner = attractor.event_horizon_radius() + self.inner_margin;
        let radius = rng.range(inner, canvas_width / 2.0);
        let velocity = Vec2::new(
            rng.range(-SPAWN_MAX_SPEED, SPAWN_MAX_SPEED),
            rng.range(-SPAWN_MAX_SPEED, SPAWN_MAX_SPEED),
        );
        let mass = rng.range(DISK_PARTICLE_MIN_MASS, DISK_PARTICLE_MAX_MASS);

        self.particles.push(DiskParticle::new(
            attractor.position() + Vec2::from_polar(radius, angle),
            velocity,
            mass,
        ));
        true
    }

    /// Spawn up to `count` particles; returns how many were placed
    pub fn seed(&mut self, count: u32, attractor: &Attractor, canvas_width: f32, rng: &mut Rng) -> u32 {
        let mut placed = 0;
        for _ in 0..count {
            if !self.spawn_particle(attractor, canvas_width, rng) {
                break;
            }
            placed += 1;
        }
        placed
    }

    /// Advance every particle one frame, evict captured ones, then replenish.
    ///
    /// A particle is captured when it is inside the horizon before *or*
    /// after its move. Eviction is a single compaction pass, so each
    /// particle is integrated exactly once and none is skipped.
    pub fn step(
        &mut self,
        attractor: &Attractor,
        params: ForceParams,
        canvas_width: f32,
        rng: &mut Rng,
    ) -> DiskStepReport {
        self.frame += 1;

        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            let start_distance = integrate(
                attractor,
                Vec2::ZERO,
                &mut p.position,
                &mut p.velocity,
                p.mass,
                params,
            );
            !attractor.swallows(start_distance, p.position)
        });
        let removed = (before - self.particles.len()) as u32;

        let mut spawned = 0;
        if self.frame % self.spawn_interval == 0 && self.spawn_particle(attractor, canvas_width, rng) {
            spawned = 1;
        }

        DiskStepReport { removed, spawned }
    }

    /// Drop every particle and restart the cadence
    pub fn clear(&mut self) {
        self.particles.clear();
        self.frame = 0;
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN_INTERVAL, DEFAULT_DISK_INNER_MARGIN, None)
    }
}

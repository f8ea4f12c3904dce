use crate::core::math::Vec2;
use crate::core::utils::random::Rng;
use crate::domain::config::SimConfig;
use crate::domain::entities::Attractor;
use crate::systems::bodies::BodySet;
use crate::systems::disk::ParticleField;

use super::perf_stats::PerfStats;
use super::render_extract::RenderBuffers;
use super::Simulation;

pub(super) fn create_simulation(width: u32, height: u32, config: SimConfig) -> Simulation {
    let mut sim = Simulation {
        attractor: attractor_for(width, height, &config),
        field: ParticleField::from_config(&config),
        bodies: BodySet::new(),
        rng: Rng::new(config.seed),
        render: RenderBuffers::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
        width,
        height,
    };
    seed_disk(&mut sim);
    sim
}

/// Attractor at the canvas center
pub(super) fn attractor_for(width: u32, height: u32, config: &SimConfig) -> Attractor {
    Attractor::new(
        Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
        config.attractor_mass,
        config.attractor_radius,
    )
}

pub(super) fn seed_disk(sim: &mut Simulation) {
    let width = sim.width as f32;
    let placed = sim.field.seed(
        sim.config.initial_disk_particles,
        &sim.attractor,
        width,
        &mut sim.rng,
    );
    engine_log!(
        "Simulation {}x{}: attractor mass {}, {} disk particles",
        sim.width,
        sim.height,
        sim.attractor.mass(),
        placed
    );
}

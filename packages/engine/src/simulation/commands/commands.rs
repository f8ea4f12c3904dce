use crate::core::utils::random::Rng;
use crate::domain::entities::BodyKind;

use super::init::{attractor_for, seed_disk};
use super::render_extract::RenderBuffers;
use super::Simulation;

fn spawn_body(sim: &mut Simulation, kind: BodyKind) -> u32 {
    let canvas = sim.canvas();
    let id = sim.bodies.add(kind, canvas, &mut sim.rng);
    engine_log!("Spawned {} #{} ({} bodies)", kind.name(), id, sim.bodies.len());
    id
}

pub(super) fn spawn_star(sim: &mut Simulation) -> u32 {
    spawn_body(sim, BodyKind::Star)
}

pub(super) fn spawn_galaxy(sim: &mut Simulation) -> u32 {
    spawn_body(sim, BodyKind::Galaxy)
}

pub(super) fn remove_body(sim: &mut Simulation, id: u32) -> bool {
    sim.bodies.remove(id)
}

pub(super) fn increase_attractor_mass(sim: &mut Simulation, amount: f32) {
    if sim.attractor.add_mass(amount) {
        engine_warn!(
            "Attractor mass change of {} clamped, mass is now {}",
            amount,
            sim.attractor.mass()
        );
    }
}

pub(super) fn press(sim: &mut Simulation) {
    let amount = sim.config.mass_increment;
    increase_attractor_mass(sim, amount);
}

pub(super) fn reset(sim: &mut Simulation) {
    sim.attractor = attractor_for(sim.width, sim.height, &sim.config);
    sim.field.clear();
    sim.bodies.clear();
    sim.rng = Rng::new(sim.config.seed);
    sim.render = RenderBuffers::default();
    sim.perf_stats.reset();
    seed_disk(sim);
}

use super::render_extract;
use super::{PerfTimer, Simulation};

pub(super) fn step(sim: &mut Simulation) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let mut lap = if perf_on { Some(PerfTimer::start()) } else { None };

    let params = sim.force_params();
    let width = sim.width as f32;

    // === ACCRETION DISK ===
    let disk = sim.field.step(&sim.attractor, params, width, &mut sim.rng);
    if let Some(t) = lap.as_mut() {
        sim.perf_stats.disk_ms = t.lap_ms();
    }

    // === COMPOSITE BODIES ===
    // Runs after the disk; both read the same attractor state.
    let bodies = sim.bodies.step(&sim.attractor, params);
    if let Some(t) = lap.as_mut() {
        sim.perf_stats.bodies_ms = t.lap_ms();
    }

    for id in &bodies.captured {
        engine_log!("Body #{} crossed the event horizon at frame {}", id, sim.field.frame());
    }

    if perf_on {
        let stats = &mut sim.perf_stats;
        stats.step_ms = stats.disk_ms + stats.bodies_ms;
        stats.particles_spawned = disk.spawned;
        stats.particles_removed = disk.removed;
        stats.bodies_captured = bodies.captured.len() as u32;
        stats.disk_particles = sim.field.len() as u32;
        stats.bodies = sim.bodies.len() as u32;
        stats.components = sim.bodies.component_count() as u32;
    }
}

pub(super) fn advance_frame(sim: &mut Simulation) {
    step(sim);

    let t0 = if sim.perf_enabled { Some(PerfTimer::start()) } else { None };
    render_extract::extract(sim);
    if let Some(t0) = t0 {
        sim.perf_stats.render_ms = t0.elapsed_ms();
        sim.perf_stats.lensing_samples = sim.render.lensing_samples as u32;
        sim.perf_stats.primitives = sim.render.len() as u32;
    }
}

//! Simulation - the black hole scene as one explicit aggregate
//!
//! Owns the Attractor, the accretion disk, the composite bodies, the random
//! stream and the render buffers. Nothing lives in ambient scope, so any
//! number of independent simulations can run side by side.
//!
//! Frame order (single writer, strictly sequential):
//! 1. disk step  - integrate, evict captured particles, replenish
//! 2. body step  - integrate bodies then their components, evict captured
//! 3. extraction - attractor, disk, photon sphere, bodies, lensing field
//!
//! Spawns and mass changes take `&mut self`, so they always land between
//! frames.

use crate::core::math::Vec2;
use crate::core::utils::random::Rng;
use crate::domain::config::SimConfig;
use crate::domain::entities::Attractor;
use crate::systems::bodies::BodySet;
use crate::systems::disk::ParticleField;
use crate::systems::gravity::ForceParams;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{AbiLayout, World};
pub use perf_stats::PerfStats;
pub use render_extract::{AttractorView, Primitive, Scene};

use perf_timer::PerfTimer;
use render_extract::RenderBuffers;

pub(crate) struct AbiLayoutData {
    pub(crate) kinds_ptr: *const u8,
    pub(crate) kinds_len_elements: usize,
    pub(crate) kinds_len_bytes: usize,
    pub(crate) geometry_ptr: *const f32,
    pub(crate) geometry_len_elements: usize,
    pub(crate) geometry_len_bytes: usize,
    pub(crate) colors_ptr: *const u32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
}

/// The simulation aggregate
pub struct Simulation {
    config: SimConfig,
    width: u32,
    height: u32,

    attractor: Attractor,
    field: ParticleField,
    bodies: BodySet,
    rng: Rng,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    /// Create a simulation for a canvas of the given size with default settings
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation(width, height, SimConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: SimConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_simulation(width, height, config))
    }

    pub fn from_config_json(width: u32, height: u32, json: &str) -> Result<Self, String> {
        let config = SimConfig::from_json(json)?;
        Ok(init::create_simulation(width, height, config))
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    /// Steps taken since creation or the last reset
    pub fn frame(&self) -> u64 { self.field.frame() }

    pub fn attractor(&self) -> &Attractor { &self.attractor }

    pub fn field(&self) -> &ParticleField { &self.field }

    pub fn bodies(&self) -> &BodySet { &self.bodies }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    pub(crate) fn canvas(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub(crate) fn force_params(&self) -> ForceParams {
        ForceParams::from_config(&self.config)
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    /// Add a star at a random canvas position. Returns the body ID.
    pub fn spawn_star(&mut self) -> u32 {
        commands::spawn_star(self)
    }

    /// Add a galaxy at a random canvas position. Returns the body ID.
    pub fn spawn_galaxy(&mut self) -> u32 {
        commands::spawn_galaxy(self)
    }

    /// Remove a body by ID
    pub fn remove_body(&mut self, id: u32) -> bool {
        commands::remove_body(self, id)
    }

    pub fn increase_attractor_mass(&mut self, amount: f32) {
        commands::increase_attractor_mass(self, amount);
    }

    /// Pointer press: add the configured mass increment
    pub fn press(&mut self) {
        commands::press(self);
    }

    /// Back to the initial scene (same seed, same particles)
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    // === FRAME ===

    /// Physics only: disk then bodies
    pub fn step(&mut self) {
        step::step(self);
    }

    /// One full frame: physics then render extraction
    pub fn advance_frame(&mut self) {
        step::advance_frame(self);
    }

    // === RENDER OUTPUT ===

    /// Primitives extracted by the last `advance_frame`
    pub fn primitive_count(&self) -> usize {
        self.render.len()
    }

    pub fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.render.primitives()
    }

    pub fn primitive_kinds(&self) -> &[u8] {
        &self.render.kinds
    }

    pub fn primitive_geometry(&self) -> &[f32] {
        &self.render.geometry
    }

    pub fn primitive_colors(&self) -> &[u32] {
        &self.render.colors
    }

    /// Lensing samples emitted by the last extraction
    pub fn lensing_sample_count(&self) -> usize {
        self.render.lensing_samples
    }

    pub fn scene(&self) -> Scene {
        render_extract::scene(self)
    }

    pub fn scene_json(&self) -> String {
        serde_json::to_string(&self.scene()).unwrap_or_else(|_| "{}".to_string())
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            kinds_ptr: self.render.kinds.as_ptr(),
            kinds_len_elements: self.render.kinds.len(),
            kinds_len_bytes: self.render.kinds.len(),
            geometry_ptr: self.render.geometry.as_ptr(),
            geometry_len_elements: self.render.geometry.len(),
            geometry_len_bytes: self.render.geometry.len() * std::mem::size_of::<f32>(),
            colors_ptr: self.render.colors.as_ptr(),
            colors_len_elements: self.render.colors.len(),
            colors_len_bytes: self.render.colors.len() * std::mem::size_of::<u32>(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

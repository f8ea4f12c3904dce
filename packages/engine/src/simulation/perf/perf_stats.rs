use wasm_bindgen::prelude::*;

/// Per-frame timings and population counters.
/// Only filled while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) disk_ms: f64,
    pub(super) bodies_ms: f64,
    pub(super) render_ms: f64,

    pub(super) particles_spawned: u32,
    pub(super) particles_removed: u32,
    pub(super) bodies_captured: u32,
    pub(super) lensing_samples: u32,
    pub(super) primitives: u32,

    pub(super) disk_particles: u32,
    pub(super) bodies: u32,
    pub(super) components: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Physics time (disk + bodies)
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn disk_ms(&self) -> f64 { self.disk_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_ms(&self) -> f64 { self.bodies_ms }
    /// Render extraction time (includes the lensing walk)
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_spawned(&self) -> u32 { self.particles_spawned }
    #[wasm_bindgen(getter)]
    pub fn particles_removed(&self) -> u32 { self.particles_removed }
    #[wasm_bindgen(getter)]
    pub fn bodies_captured(&self) -> u32 { self.bodies_captured }
    #[wasm_bindgen(getter)]
    pub fn lensing_samples(&self) -> u32 { self.lensing_samples }
    #[wasm_bindgen(getter)]
    pub fn primitives(&self) -> u32 { self.primitives }
    #[wasm_bindgen(getter)]
    pub fn disk_particles(&self) -> u32 { self.disk_particles }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn components(&self) -> u32 { self.components }
}

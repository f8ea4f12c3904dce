use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::Simulation;

#[wasm_bindgen]
pub struct AbiLayout {
    kinds_ptr: u32,
    kinds_len_elements: u32,
    kinds_len_bytes: u32,
    geometry_ptr: u32,
    geometry_len_elements: u32,
    geometry_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn kinds_ptr(&self) -> u32 { self.kinds_ptr }
    #[wasm_bindgen(getter)]
    pub fn kinds_len_elements(&self) -> u32 { self.kinds_len_elements }
    #[wasm_bindgen(getter)]
    pub fn kinds_len_bytes(&self) -> u32 { self.kinds_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn geometry_ptr(&self) -> u32 { self.geometry_ptr }
    #[wasm_bindgen(getter)]
    pub fn geometry_len_elements(&self) -> u32 { self.geometry_len_elements }
    #[wasm_bindgen(getter)]
    pub fn geometry_len_bytes(&self) -> u32 { self.geometry_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }
}

#[wasm_bindgen]
pub struct World {
    core: Simulation,
}

#[wasm_bindgen]
impl World {
    /// Create a scene for a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: Simulation::new(width, height),
        }
    }

    /// Create a scene from a JSON settings document (missing fields keep defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: u32, height: u32, json: String) -> Result<World, JsValue> {
        let core = Simulation::from_config_json(width, height, &json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn attractor_x(&self) -> f32 { self.core.attractor().position().x }

    #[wasm_bindgen(getter)]
    pub fn attractor_y(&self) -> f32 { self.core.attractor().position().y }

    #[wasm_bindgen(getter)]
    pub fn attractor_mass(&self) -> f32 { self.core.attractor().mass() }

    #[wasm_bindgen(getter)]
    pub fn event_horizon_radius(&self) -> f32 { self.core.attractor().event_horizon_radius() }

    #[wasm_bindgen(getter)]
    pub fn photon_sphere_radius(&self) -> f32 { self.core.attractor().photon_sphere_radius() }

    #[wasm_bindgen(getter)]
    pub fn disk_particle_count(&self) -> u32 { self.core.field().len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.bodies().len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> u32 { self.core.bodies().component_count() as u32 }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    // === COMMANDS ===

    /// Spawn a star at a random canvas position
    /// Returns the body ID
    pub fn spawn_star(&mut self) -> u32 {
        self.core.spawn_star()
    }

    /// Spawn a galaxy at a random canvas position
    /// Returns the body ID
    pub fn spawn_galaxy(&mut self) -> u32 {
        self.core.spawn_galaxy()
    }

    /// Remove a body by ID
    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    pub fn increase_attractor_mass(&mut self, amount: f32) {
        self.core.increase_attractor_mass(amount);
    }

    /// Pointer press on the canvas
    pub fn press(&mut self) {
        self.core.press();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Advance one frame: physics, then rebuild the primitive buffers
    pub fn step(&mut self) {
        self.core.advance_frame();
    }

    // === RENDER API ===

    pub fn primitive_count(&self) -> usize {
        self.core.primitive_count()
    }

    /// Get pointer to primitive kinds (one u8 per primitive)
    pub fn kinds_ptr(&self) -> *const u8 {
        self.core.primitive_kinds().as_ptr()
    }

    pub fn kinds_len(&self) -> usize {
        self.core.primitive_kinds().len()
    }

    /// Get pointer to geometry (x, y, radius, stroke_width per primitive)
    pub fn geometry_ptr(&self) -> *const f32 {
        self.core.primitive_geometry().as_ptr()
    }

    pub fn geometry_len(&self) -> usize {
        self.core.primitive_geometry().len()
    }

    /// Get pointer to packed ABGR colors
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.primitive_colors().as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.primitive_colors().len()
    }

    pub fn lensing_sample_count(&self) -> usize {
        self.core.lensing_sample_count()
    }

    pub fn scene_json(&self) -> String {
        self.core.scene_json()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            kinds_ptr: data.kinds_ptr as u32,
            kinds_len_elements: data.kinds_len_elements as u32,
            kinds_len_bytes: data.kinds_len_bytes as u32,
            geometry_ptr: data.geometry_ptr as u32,
            geometry_len_elements: data.geometry_len_elements as u32,
            geometry_len_bytes: data.geometry_len_bytes as u32,
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
        }
    }
}

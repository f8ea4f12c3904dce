//! Accretion Engine - 2D black hole scene simulation in WASM
//!
//! A central Attractor pulls on a self-replenishing accretion disk and on
//! composite bodies (stars, galaxies) whose components feel the pull on
//! their own. Each frame is flattened into draw primitives for the host.
//!
//! Architecture:
//! - core/       - math, random stream, logging macros
//! - domain/     - entities, colors, tuning constants, config
//! - systems/    - gravity, disk, bodies, lensing
//! - simulation/ - the aggregate, frame loop and wasm facade

// Logging macros must be first for macro export
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Accretion engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimConfig;
pub use domain::entities::BodyKind;
pub use simulation::{AbiLayout, PerfStats, Primitive, Scene, Simulation, World};

// Primitive kind ids for JS
#[wasm_bindgen]
pub fn prim_disk() -> u8 { domain::constants::PRIM_DISK }
#[wasm_bindgen]
pub fn prim_ring() -> u8 { domain::constants::PRIM_RING }
#[wasm_bindgen]
pub fn prim_point() -> u8 { domain::constants::PRIM_POINT }

//! Domain model - what lives in the simulation and how it is tuned
//!
//! - constants - default tuning values and primitive kind ids
//! - color     - packed RGBA colors handed to the host renderer
//! - entities  - attractor, disk particles, composite bodies
//! - config    - JSON-loadable simulation settings

pub mod color;
pub mod config;
pub mod constants;
pub mod entities;

//! ParticleField - the accretion disk
//!
//! A self-replenishing population of light particles:
//! - every live particle is integrated once per step
//! - particles inside the event horizon are dropped in the same step
//! - one replacement is injected every `spawn_interval` steps
//!
//! The population is unbounded unless `max_disk_particles` is configured.

mod field;

pub use field::{DiskStepReport, ParticleField};

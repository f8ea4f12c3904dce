//! Systems - per-frame behavior, one module per population
//!
//! - gravity - the shared force integrator
//! - disk    - self-replenishing accretion disk
//! - bodies  - stars and galaxies with internal components
//! - lensing - stateless screen-space distortion sampler

pub mod bodies;
pub mod disk;
pub mod gravity;
pub mod lensing;

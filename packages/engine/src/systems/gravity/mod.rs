//! Gravity - attraction toward the single Attractor
//!
//! Frame-locked semi-implicit Euler: velocity is updated from the force,
//! then position from the new velocity. There is no dt; one call is one
//! rendered frame.

mod forces;

pub use forces::{attraction, integrate, ForceParams};

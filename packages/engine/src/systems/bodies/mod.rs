//! BodySet - stars and galaxies orbiting the Attractor
//!
//! Each body is integrated twice per step:
//! - once as a single heavy point (moves the body's origin)
//! - once per component, at `body.position + offset`, so components drift
//!   apart from a rigid layout (simplified tidal stretching)
//!
//! Only the body's own position is tested against the event horizon.
//! Components live and die with their parent.

mod spawn;
mod system;

pub use spawn::{build_galaxy, build_star};
pub use system::{BodySet, BodyStepReport};

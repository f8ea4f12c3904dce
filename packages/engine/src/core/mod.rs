//! Core building blocks shared by every system
//!
//! - utils/ - logging macros, seeded random stream
//! - math/  - 2D vector type

// Macros must be declared before any module that logs.
#[macro_use]
pub mod utils;
pub mod math;

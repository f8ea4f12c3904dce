//! Default tuning values
//!
//! Distances are canvas units, mass is dimensionless. One integration step
//! is one rendered frame, so velocities are units per frame.

// === ATTRACTOR ===
pub const DEFAULT_ATTRACTOR_MASS: f32 = 10_000.0;
pub const DEFAULT_ATTRACTOR_RADIUS: f32 = 30.0;
/// Mass added by one pointer press
pub const DEFAULT_MASS_INCREMENT: f32 = 5_000.0;
/// Photon sphere ring sits at this multiple of the horizon radius
pub const PHOTON_SPHERE_FACTOR: f32 = 1.5;
/// Attractor mass never drops below this
pub const MIN_ATTRACTOR_MASS: f32 = 1.0;
/// Attractor mass never exceeds this, so M·m stays well inside f32
pub const MAX_ATTRACTOR_MASS: f32 = 1.0e12;

// === INTEGRATOR ===
pub const DEFAULT_COUPLING: f32 = 0.01;
/// Floor applied to the force denominator
pub const DEFAULT_MIN_DISTANCE: f32 = 1.0;
/// Speed ceiling in units per frame
pub const MAX_SPEED: f32 = 1.0e6;

// === ACCRETION DISK ===
pub const DEFAULT_INITIAL_DISK_PARTICLES: u32 = 200;
pub const DEFAULT_SPAWN_INTERVAL: u32 = 10;
/// Spawn ring starts this far outside the event horizon
pub const DEFAULT_DISK_INNER_MARGIN: f32 = 50.0;
pub const DISK_PARTICLE_MIN_MASS: f32 = 1.0;
pub const DISK_PARTICLE_MAX_MASS: f32 = 3.0;
pub const SPAWN_MAX_SPEED: f32 = 1.0;

// === COMPOSITE BODIES ===
pub const STAR_MASS: f32 = 100.0;
pub const STAR_COMPONENTS: usize = 100;
/// Star components start inside [-extent, extent]²
pub const STAR_COMPONENT_EXTENT: f32 = 10.0;
pub const GALAXY_MASS: f32 = 500.0;
pub const GALAXY_COMPONENTS: usize = 500;
pub const GALAXY_MIN_RADIUS: f32 = 50.0;
pub const GALAXY_MAX_RADIUS: f32 = 100.0;
pub const COMPONENT_MASS: f32 = 1.0;
/// Drawn radius of a body component (2-unit diameter)
pub const COMPONENT_RADIUS: f32 = 1.0;

// === LENSING ===
pub const DEFAULT_LENSING_STRIDE: f32 = 20.0;
pub const DEFAULT_LENSING_STRENGTH: f32 = 1000.0;

// === RENDER ===
pub const GLOW_RINGS: u32 = 10;
pub const PHOTON_SPHERE_STROKE: f32 = 2.0;

/// Primitive kinds in the render buffers
pub const PRIM_DISK: u8 = 0;
pub const PRIM_RING: u8 = 1;
pub const PRIM_POINT: u8 = 2;
/// f32 slots per primitive: x, y, radius, stroke_width
pub const GEOMETRY_STRIDE: usize = 4;

use serde::Serialize;

use crate::core::math::Vec2;
use crate::domain::color::Color;
use crate::domain::constants::{
    COMPONENT_RADIUS, GEOMETRY_STRIDE, GLOW_RINGS, PHOTON_SPHERE_STROKE, PRIM_DISK, PRIM_POINT,
    PRIM_RING,
};
use crate::systems::lensing;

use super::Simulation;

/// Frame primitives as parallel arrays, read by the host through raw pointers.
#[derive(Default)]
pub(super) struct RenderBuffers {
    pub(super) kinds: Vec<u8>,
    pub(super) geometry: Vec<f32>,
    pub(super) colors: Vec<u32>,
    pub(super) lensing_samples: usize,
}

impl RenderBuffers {
    pub(super) fn len(&self) -> usize {
        self.kinds.len()
    }

    pub(super) fn clear(&mut self) {
        self.kinds.clear();
        self.geometry.clear();
        self.colors.clear();
        self.lensing_samples = 0;
    }

    #[inline]
    fn push(&mut self, kind: u8, at: Vec2, radius: f32, stroke_width: f32, color: Color) {
        self.kinds.push(kind);
        self.geometry.extend_from_slice(&[at.x, at.y, radius, stroke_width]);
        self.colors.push(color.packed());
    }

    fn push_disk(&mut self, at: Vec2, radius: f32, color: Color) {
        self.push(PRIM_DISK, at, radius, 0.0, color);
    }

    fn push_ring(&mut self, at: Vec2, radius: f32, stroke_width: f32, color: Color) {
        self.push(PRIM_RING, at, radius, stroke_width, color);
    }

    fn push_point(&mut self, at: Vec2, color: Color) {
        self.push(PRIM_POINT, at, 0.0, 0.0, color);
    }

    /// Decode the buffers back into typed primitives
    pub(super) fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.kinds
            .iter()
            .zip(self.geometry.chunks_exact(GEOMETRY_STRIDE))
            .zip(self.colors.iter())
            .filter_map(|((&kind, g), &packed)| {
                let color = Color::from_packed(packed);
                match kind {
                    PRIM_DISK => Some(Primitive::Disk { x: g[0], y: g[1], radius: g[2], color }),
                    PRIM_RING => Some(Primitive::Ring {
                        x: g[0],
                        y: g[1],
                        radius: g[2],
                        stroke_width: g[3],
                        color,
                    }),
                    PRIM_POINT => Some(Primitive::Point { x: g[0], y: g[1], color }),
                    _ => None,
                }
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Disk { x: f32, y: f32, radius: f32, color: Color },
    Ring { x: f32, y: f32, radius: f32, stroke_width: f32, color: Color },
    Point { x: f32, y: f32, color: Color },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AttractorView {
    pub x: f32,
    pub y: f32,
    pub mass: f32,
    pub event_horizon_radius: f32,
    pub photon_sphere_radius: f32,
}

/// Everything the host needs to draw one frame
#[derive(Clone, Debug, Serialize)]
pub struct Scene {
    pub frame: u64,
    pub attractor: AttractorView,
    pub primitives: Vec<Primitive>,
}

/// Glow ring `i` of `GLOW_RINGS`: diameter runs 2x to 3x the horizon, alpha 50 to 0.
fn glow_ring(horizon: f32, i: u32) -> (f32, Color) {
    let t = i as f32 / GLOW_RINGS as f32;
    let radius = horizon * (1.0 + 0.5 * t);
    let alpha = (50.0 * (1.0 - t)).round() as u8;
    (radius, Color::rgb(255, 0, 0).with_alpha(alpha))
}

/// Rebuild the render buffers from the current state, in draw order.
pub(super) fn extract(sim: &mut Simulation) {
    let Simulation {
        render,
        attractor,
        field,
        bodies,
        config,
        width,
        height,
        ..
    } = sim;
    render.clear();

    let center = attractor.position();
    let horizon = attractor.event_horizon_radius();

    // === ATTRACTOR + GLOW ===
    render.push_disk(center, horizon, Color::BLACK);
    for i in 0..GLOW_RINGS {
        let (radius, color) = glow_ring(horizon, i);
        render.push_disk(center, radius, color);
    }

    // === ACCRETION DISK ===
    for particle in field.iter() {
        // Drawn diameter equals mass.
        render.push_disk(particle.position, particle.mass * 0.5, Color::DISK_BLUE);
    }

    // === PHOTON SPHERE ===
    render.push_ring(
        center,
        attractor.photon_sphere_radius(),
        PHOTON_SPHERE_STROKE,
        Color::PHOTON_RING,
    );

    // === COMPOSITE BODIES ===
    for body in bodies.iter() {
        for at in body.component_positions() {
            render.push_disk(at, COMPONENT_RADIUS, body.color);
        }
    }

    // === LENSING ===
    let before = render.len();
    for at in lensing::sample(
        attractor,
        *width as f32,
        *height as f32,
        config.lensing_stride,
        config.lensing_strength,
    ) {
        render.push_point(at, Color::LENSING_POINT);
    }
    render.lensing_samples = render.len() - before;
}

pub(super) fn scene(sim: &Simulation) -> Scene {
    let attractor = sim.attractor();
    let center = attractor.position();
    Scene {
        frame: sim.frame(),
        attractor: AttractorView {
            x: center.x,
            y: center.y,
            mass: attractor.mass(),
            event_horizon_radius: attractor.event_horizon_radius(),
            photon_sphere_radius: attractor.photon_sphere_radius(),
        },
        primitives: sim.primitives().collect(),
    }
}

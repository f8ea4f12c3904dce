//! Lensing - screen-space light bending approximation
//!
//! Purely visual and stateless: every frame a fixed-stride grid is walked
//! and each grid point outside the event horizon is pushed away from the
//! Attractor by `strength / d`. Nothing is cached between frames.

use crate::core::math::Vec2;
use crate::domain::entities::Attractor;

/// Displace one grid point. `None` inside (or on) the event horizon.
#[inline]
pub fn displace(attractor: &Attractor, point: Vec2, strength: f32) -> Option<Vec2> {
    let delta = point - attractor.position();
    let distance = delta.length();
    if distance <= attractor.event_horizon_radius() {
        return None;
    }
    let distortion = strength / distance;
    Some(point + delta * distortion)
}

/// Lazy walk over the sample grid (columns outer, rows inner)
pub struct LensingSamples<'a> {
    attractor: &'a Attractor,
    stride: f32,
    strength: f32,
    cols: u32,
    rows: u32,
    col: u32,
    row: u32,
}

impl<'a> LensingSamples<'a> {
    pub fn new(attractor: &'a Attractor, width: f32, height: f32, stride: f32, strength: f32) -> Self {
        let cells = |extent: f32| {
            if stride > 0.0 && extent > 0.0 {
                (extent / stride).ceil() as u32
            } else {
                0
            }
        };
        let (cols, rows) = (cells(width), cells(height));
        Self {
            attractor,
            stride,
            strength,
            // An empty axis means an empty grid.
            cols: if rows == 0 { 0 } else { cols },
            rows,
            col: 0,
            row: 0,
        }
    }

    /// Grid points visited per frame (including skipped ones)
    pub fn grid_len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

impl Iterator for LensingSamples<'_> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        while self.col < self.cols {
            let point = Vec2::new(self.col as f32 * self.stride, self.row as f32 * self.stride);

            self.row += 1;
            if self.row >= self.rows {
                self.row = 0;
                self.col += 1;
            }

            if let Some(sample) = displace(self.attractor, point, self.strength) {
                return Some(sample);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let visited = self.col as usize * self.rows as usize + self.row as usize;
        (0, Some(self.grid_len().saturating_sub(visited)))
    }
}

/// Samples for the whole canvas
pub fn sample<'a>(
    attractor: &'a Attractor,
    width: f32,
    height: f32,
    stride: f32,
    strength: f32,
) -> LensingSamples<'a> {
    LensingSamples::new(attractor, width, height, stride, strength)
}

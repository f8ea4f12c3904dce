use serde::Serialize;

/// RGBA8 color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const STAR_YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GALAXY_BLUE: Color = Color::rgb(100, 100, 255);
    pub const DISK_BLUE: Color = Color::rgba(100, 150, 255, 150);
    pub const PHOTON_RING: Color = Color::rgba(255, 255, 0, 100);
    pub const LENSING_POINT: Color = Color::rgba(255, 255, 255, 100);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Pack as ABGR (little-endian RGBA bytes, matches canvas ImageData)
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
            a: (value >> 24) as u8,
        }
    }
}

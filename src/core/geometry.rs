use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in absolute pixel units, origin top-left.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Rectangle in unit-square coordinates with a bottom-left origin, the frame
/// the recognition engine reports in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NormalizedBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Scale to pixel units and flip the vertical axis so the origin moves
    /// from bottom-left to top-left. Extents are clamped to zero so the
    /// output never carries a negative width or height.
    pub fn to_pixels(&self, image_width: u32, image_height: u32) -> BoundingBox {
        let w = f64::from(image_width);
        let h = f64::from(image_height);
        let px_width = (self.width * w).max(0.0);
        let px_height = (self.height * h).max(0.0);
        BoundingBox {
            x: self.x * w,
            y: h - self.y * h - px_height,
            width: px_width,
            height: px_height,
        }
    }
}

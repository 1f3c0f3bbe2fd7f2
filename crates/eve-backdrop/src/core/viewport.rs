use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Size of the browser viewport in CSS pixels. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Far corner of the viewport.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// The viewport grown by `margin` on every side.
    pub fn padded(&self, margin: f32) -> Bounds {
        Bounds {
            min: Vec2::splat(-margin),
            max: self.extent() + Vec2::splat(margin),
        }
    }

    /// Negative or NaN sizes are clamped to zero.
    pub fn sanitized(self) -> Self {
        let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(fix(self.width), fix(self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Axis-aligned rectangle, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_bounds_grow_every_side() {
        let b = Viewport::new(100.0, 50.0).padded(10.0);
        assert_eq!(b.min, Vec2::new(-10.0, -10.0));
        assert_eq!(b.max, Vec2::new(110.0, 60.0));
        assert!(b.contains(Vec2::new(-10.0, 60.0)));
        assert!(!b.contains(Vec2::new(-10.1, 0.0)));
    }

    #[test]
    fn sanitized_clamps_bad_sizes() {
        let v = Viewport::new(-5.0, f32::NAN).sanitized();
        assert_eq!(v, Viewport::new(0.0, 0.0));
    }
}

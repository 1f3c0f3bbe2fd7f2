// extensions/easing.rs
//
// Easing curves for timeline interpolation. Pure math, no engine state.

use std::f32::consts::PI;

/// CSS-style cubic Bézier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn x_at(&self, s: f32) -> f32 {
        bezier_axis(self.x1, self.x2, s)
    }

    fn y_at(&self, s: f32) -> f32 {
        bezier_axis(self.y1, self.y2, s)
    }

    fn dx_at(&self, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * self.x1 + 6.0 * inv * s * (self.x2 - self.x1) + 3.0 * s * s * (1.0 - self.x2)
    }

    /// Curve output for input progress `t` in [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        // Newton first; fall back to bisection where the slope flattens out.
        let mut s = t;
        for _ in 0..8 {
            let err = self.x_at(s) - t;
            if err.abs() < 1e-5 {
                return self.y_at(s);
            }
            let slope = self.dx_at(s);
            if slope.abs() < 1e-6 {
                break;
            }
            s = (s - err / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = t;
        for _ in 0..32 {
            let x = self.x_at(s);
            if (x - t).abs() < 1e-5 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        self.y_at(s)
    }
}

#[inline]
fn bezier_axis(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Easing curve applied to normalized segment progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant velocity. Used by the sweeps and rotations.
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineInOut,
    /// Overshoots the target then settles; stands in for a damped spring.
    BackOut,
    Bezier(CubicBezier),
}

impl Easing {
    /// The browser's default `ease-in-out` timing function.
    pub const EASE_IN_OUT: Easing = Easing::Bezier(CubicBezier::new(0.42, 0.0, 0.58, 1.0));

    /// Apply the curve to `t`, clamped to [0, 1]. BackOut may exceed 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
            Easing::Bezier(curve) => curve.apply(t),
        }
    }
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for e in [
            Easing::Linear,
            Easing::QuadInOut,
            Easing::CubicOut,
            Easing::SineInOut,
            Easing::BackOut,
            Easing::EASE_IN_OUT,
        ] {
            assert!(e.apply(0.0).abs() < 1e-4, "{:?} at 0", e);
            assert!((e.apply(1.0) - 1.0).abs() < 1e-4, "{:?} at 1", e);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let e = Easing::EASE_IN_OUT;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-3);
        let a = e.apply(0.25);
        let b = e.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-3);
        assert!(a < 0.25, "should start slow, got {}", a);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let e = Easing::Bezier(CubicBezier::new(0.0, 0.0, 1.0, 1.0));
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((e.apply(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..20).map(|i| Easing::BackOut.apply(i as f32 / 20.0)).fold(0.0, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn ease_interpolates() {
        assert!((ease(100.0, 200.0, 0.5, Easing::Linear) - 150.0).abs() < 1e-4);
        assert_eq!(lerp(-300.0, 1000.0, 1.0), 1000.0);
    }
}

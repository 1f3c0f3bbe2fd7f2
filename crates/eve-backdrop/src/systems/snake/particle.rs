use glam::Vec2;

use super::config::{SnakeConfig, SpawnEdge};
use crate::api::types::SnakeId;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;

/// Opacity floor for trail dots.
pub const TRAIL_MIN_OPACITY: f32 = 0.4;

/// A single moving decorative point with a fading trail.
///
/// Speed and trail length are fixed at creation. Direction only changes by
/// sign when the head crosses a viewport edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    id: SnakeId,
    position: Vec2,
    direction: Vec2,
    speed: f32,
    trail_len: usize,
    /// Reflections so far on the x and y axes.
    flips: [u32; 2],
}

/// Which direction components were re-signed during a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

/// One rendered trail dot in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub position: Vec2,
    pub opacity: f32,
}

impl Snake {
    pub fn new(id: SnakeId, position: Vec2, direction: Vec2, speed: f32, trail_len: usize) -> Self {
        Self {
            id,
            position,
            direction,
            speed,
            trail_len,
            flips: [0, 0],
        }
    }

    /// Create a particle just outside a randomly chosen spawn edge, heading in.
    pub fn spawn(config: &SnakeConfig, viewport: Viewport, rng: &mut Rng) -> Self {
        let edge = rng.pick(&config.spawn_edges).copied().unwrap_or(SpawnEdge::Left);
        let drift = if config.max_drift > 0.0 {
            rng.range(-config.max_drift, config.max_drift)
        } else {
            0.0
        };
        let inset = config.spawn_inset;
        // Keep clear of the top/bottom (or left/right) tenth of the screen.
        let across_y = rng.range(viewport.height * 0.1, viewport.height * 0.9);
        let across_x = rng.range(viewport.width * 0.1, viewport.width * 0.9);

        let (position, heading) = match edge {
            SpawnEdge::Left => (Vec2::new(-inset, across_y), Vec2::new(1.0, drift)),
            SpawnEdge::Right => (Vec2::new(viewport.width + inset, across_y), Vec2::new(-1.0, drift)),
            SpawnEdge::Top => (Vec2::new(across_x, -inset), Vec2::new(drift, 1.0)),
            SpawnEdge::Bottom => (Vec2::new(across_x, viewport.height + inset), Vec2::new(drift, -1.0)),
        };

        let speed = rng.range(config.base_speed, config.base_speed + config.speed_variation);
        let trail_len = config.base_length + rng.next_int(config.length_variation as u32) as usize;

        Self::new(SnakeId(rng.next_u64()), position, heading.normalize_or_zero(), speed, trail_len)
    }

    pub fn id(&self) -> SnakeId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn trail_len(&self) -> usize {
        self.trail_len
    }

    /// Number of reflections on the x axis since creation.
    pub fn x_flips(&self) -> u32 {
        self.flips[0]
    }

    /// Number of reflections on the y axis since creation.
    pub fn y_flips(&self) -> u32 {
        self.flips[1]
    }

    /// Move one tick along the current heading.
    ///
    /// A component flips when the step carries the head past 0 or past the
    /// viewport extent on that axis while still heading outward. Particles
    /// entering from outside are therefore never bounced back out.
    pub fn advance(&mut self, extent: Vec2) -> Reflection {
        let next = self.position + self.direction * self.speed;
        let mut reflection = Reflection::default();

        if crossed(next.x, self.direction.x, extent.x) {
            self.direction.x = -self.direction.x;
            self.flips[0] += 1;
            reflection.x = true;
        }
        if crossed(next.y, self.direction.y, extent.y) {
            self.direction.y = -self.direction.y;
            self.flips[1] += 1;
            reflection.y = true;
        }

        self.position = next;
        reflection
    }

    /// Trail dots from the head backwards, opacity fading to the floor.
    pub fn trail(&self, fade_length: usize, spacing: f32) -> impl Iterator<Item = TrailDot> + '_ {
        let back = -self.direction * spacing;
        (0..self.trail_len).map(move |i| TrailDot {
            position: self.position + back * i as f32,
            opacity: trail_opacity(i, fade_length),
        })
    }
}

#[inline]
fn crossed(next: f32, heading: f32, extent: f32) -> bool {
    (next < 0.0 && heading < 0.0) || (next > extent && heading > 0.0)
}

/// Opacity of the trail dot at `index`: linear fade over `fade_length`,
/// never below `TRAIL_MIN_OPACITY`.
pub fn trail_opacity(index: usize, fade_length: usize) -> f32 {
    if fade_length == 0 {
        return TRAIL_MIN_OPACITY;
    }
    let fade = fade_length as f32;
    ((fade - index as f32) / fade).max(TRAIL_MIN_OPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving_right(x: f32, speed: f32) -> Snake {
        Snake::new(SnakeId(1), Vec2::new(x, 50.0), Vec2::new(1.0, 0.0), speed, 10)
    }

    #[test]
    fn advance_moves_by_direction_times_speed() {
        let mut s = Snake::new(SnakeId(1), Vec2::new(10.0, 10.0), Vec2::new(0.6, 0.8), 5.0, 4);
        s.advance(Vec2::new(500.0, 500.0));
        assert!((s.position() - Vec2::new(13.0, 14.0)).length() < 1e-5);
    }

    #[test]
    fn reflects_at_right_edge_only_on_x() {
        let mut s = Snake::new(SnakeId(1), Vec2::new(98.0, 50.0), Vec2::new(0.8, 0.6), 5.0, 4);
        let r = s.advance(Vec2::new(100.0, 100.0));
        assert_eq!(r, Reflection { x: true, y: false });
        assert!(s.direction().x < 0.0);
        assert!(s.direction().y > 0.0);
        assert_eq!(s.x_flips(), 1);
        assert_eq!(s.y_flips(), 0);
    }

    #[test]
    fn reflection_preserves_magnitude() {
        let mut s = Snake::new(SnakeId(1), Vec2::new(1.0, 1.0), Vec2::new(-0.6, -0.8), 5.0, 4);
        let before = s.direction();
        s.advance(Vec2::new(100.0, 100.0));
        assert_eq!(s.direction(), -before);
    }

    #[test]
    fn entering_from_outside_does_not_flip() {
        let mut s = moving_right(-37.5, 6.0);
        let r = s.advance(Vec2::new(100.0, 100.0));
        assert_eq!(r, Reflection::default());
        assert_eq!(s.direction().x, 1.0);
    }

    #[test]
    fn no_flip_strictly_inside() {
        let mut s = moving_right(50.0, 6.0);
        for _ in 0..5 {
            assert_eq!(s.advance(Vec2::new(200.0, 100.0)), Reflection::default());
        }
    }

    #[test]
    fn spawn_left_edge_heads_right() {
        let mut rng = Rng::new(3);
        let cfg = SnakeConfig::classic();
        let vp = Viewport::new(800.0, 600.0);
        for _ in 0..20 {
            let s = Snake::spawn(&cfg, vp, &mut rng);
            assert_eq!(s.position().x, -cfg.spawn_inset);
            assert!(s.position().y >= 60.0 && s.position().y <= 540.0);
            assert_eq!(s.direction(), Vec2::new(1.0, 0.0));
            assert!(s.speed() >= 6.0 && s.speed() < 9.0);
            assert!(s.trail_len() >= 52 && s.trail_len() < 72);
        }
    }

    #[test]
    fn spawn_with_drift_stays_unit_length() {
        let mut rng = Rng::new(11);
        let cfg = SnakeConfig::capped();
        for _ in 0..20 {
            let s = Snake::spawn(&cfg, Viewport::default(), &mut rng);
            assert!((s.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn trail_fades_to_floor() {
        assert_eq!(trail_opacity(0, 35), 1.0);
        assert!((trail_opacity(7, 35) - 0.8).abs() < 1e-6);
        assert_eq!(trail_opacity(30, 35), TRAIL_MIN_OPACITY);
        assert_eq!(trail_opacity(60, 35), TRAIL_MIN_OPACITY);
    }

    #[test]
    fn trail_runs_behind_head() {
        let s = moving_right(100.0, 6.0);
        let dots: Vec<_> = s.trail(35, 2.0).collect();
        assert_eq!(dots.len(), 10);
        assert_eq!(dots[0].position, Vec2::new(100.0, 50.0));
        assert_eq!(dots[3].position, Vec2::new(94.0, 50.0));
    }
}

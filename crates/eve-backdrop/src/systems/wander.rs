use glam::Vec2;

use crate::api::types::TimelineId;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::extensions::{Easing, Timeline, TimelineSet};

/// Drifts a decoration to a random on-screen point every few seconds.
#[derive(Debug, Clone)]
pub struct Wander {
    x: TimelineId,
    y: TimelineId,
    /// Seconds until the next move.
    countdown: f32,
    pub min_interval: f32,
    pub max_interval: f32,
    /// Duration of one move.
    pub travel: f32,
    /// Targets stay within `(width - inset, height - inset)`.
    pub inset: f32,
}

impl Wander {
    pub const DEFAULT_INSET: f32 = 400.0;

    /// Register the x/y timelines, resting at a random point.
    pub fn install(set: &mut TimelineSet, rng: &mut Rng, viewport: Viewport) -> Self {
        let mut wander = Self {
            x: set.add(Timeline::new(0.0)),
            y: set.add(Timeline::new(0.0)),
            countdown: 0.0,
            min_interval: 2.0,
            max_interval: 5.0,
            travel: 2.0,
            inset: Self::DEFAULT_INSET,
        };
        let start = wander.random_target(rng, viewport);
        wander.retarget(set, start, start);
        wander.countdown = wander.roll_interval(rng);
        wander
    }

    /// Count down and start a new move when due. Returns true on a new move.
    pub fn update(&mut self, dt: f32, set: &mut TimelineSet, rng: &mut Rng, viewport: Viewport) -> bool {
        self.countdown -= dt.max(0.0);
        if self.countdown > 0.0 {
            return false;
        }
        let from = self.position(set);
        let to = self.random_target(rng, viewport);
        self.retarget(set, from, to);
        self.countdown = self.roll_interval(rng);
        true
    }

    pub fn position(&self, set: &TimelineSet) -> Vec2 {
        Vec2::new(
            set.value(self.x).unwrap_or(0.0),
            set.value(self.y).unwrap_or(0.0),
        )
    }

    /// Time left before the next move.
    pub fn countdown(&self) -> f32 {
        self.countdown
    }

    fn random_target(&self, rng: &mut Rng, viewport: Viewport) -> Vec2 {
        let w = (viewport.width - self.inset).max(0.0);
        let h = (viewport.height - self.inset).max(0.0);
        Vec2::new(rng.next_f32() * w, rng.next_f32() * h)
    }

    fn roll_interval(&self, rng: &mut Rng) -> f32 {
        rng.range(self.min_interval, self.max_interval)
    }

    fn retarget(&self, set: &mut TimelineSet, from: Vec2, to: Vec2) {
        for (id, a, b) in [(self.x, from.x, to.x), (self.y, from.y, to.y)] {
            if let Some(t) = set.get_mut(id) {
                *t = Timeline::tween(a, b, self.travel, Easing::EASE_IN_OUT);
            }
        }
    }
}

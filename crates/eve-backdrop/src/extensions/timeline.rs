// extensions/timeline.rs
//
// Keyframed scalar timelines: the looping interpolators behind every
// decorative effect that is not the particle field.
//
// Usage:
//   let mut timelines = TimelineSet::new();
//   let sweep = timelines.add(Timeline::looping(0.0, 1.0, 15.0, Easing::Linear));
//   timelines.tick(dt);
//   let y = timelines.value(sweep).unwrap_or(0.0);

use std::collections::HashMap;

use super::easing::{ease, Easing};
use crate::api::types::TimelineId;

/// One segment: animate from the previous value to `to` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub to: f32,
    pub duration: f32,
    pub easing: Easing,
}

/// What happens when the last keyframe is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Stop on the final value.
    #[default]
    Once,
    /// Start over from the first keyframe.
    Loop,
    /// Play backwards, then forwards again.
    PingPong,
}

/// A start value followed by keyframes.
#[derive(Debug, Clone)]
pub struct Timeline {
    from: f32,
    keyframes: Vec<Keyframe>,
    repeat: Repeat,
    elapsed: f32,
    playing: bool,
    /// For ping-pong: current direction (true = forward).
    forward: bool,
    finished: bool,
    /// Tag reported through `TimelineSet::drain_completed` when a `Once`
    /// timeline reaches its end.
    on_complete: Option<u32>,
}

impl Timeline {
    /// A timeline resting at `from` with no keyframes yet.
    pub fn new(from: f32) -> Self {
        Self {
            from,
            keyframes: Vec::new(),
            repeat: Repeat::Once,
            elapsed: 0.0,
            playing: true,
            forward: true,
            finished: false,
            on_complete: None,
        }
    }

    /// Single-segment tween from `from` to `to`.
    pub fn tween(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(from).then(to, duration, easing)
    }

    /// `from → to` over `duration`, restarting forever.
    pub fn looping(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::tween(from, to, duration, easing).with_repeat(Repeat::Loop)
    }

    /// `from → to → from`, each leg taking `half_period`, forever.
    pub fn oscillate(from: f32, to: f32, half_period: f32, easing: Easing) -> Self {
        Self::tween(from, to, half_period, easing).with_repeat(Repeat::PingPong)
    }

    // -- Builder methods --

    pub fn then(mut self, to: f32, duration: f32, easing: Easing) -> Self {
        self.keyframes.push(Keyframe {
            to,
            duration: duration.max(0.0),
            easing,
        });
        self
    }

    /// Stay on the current end value for `duration`.
    pub fn hold(self, duration: f32) -> Self {
        let value = self.end_value();
        self.then(value, duration, Easing::Linear)
    }

    /// Snap to `to` without interpolation.
    pub fn jump(self, to: f32) -> Self {
        self.then(to, 0.0, Easing::Linear)
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_on_complete(mut self, tag: u32) -> Self {
        self.on_complete = Some(tag);
        self
    }

    pub fn paused(mut self) -> Self {
        self.playing = false;
        self
    }

    // -- Queries --

    /// Total length of one pass in seconds.
    pub fn duration(&self) -> f32 {
        self.keyframes.iter().map(|k| k.duration).sum()
    }

    /// Value after the last keyframe.
    pub fn end_value(&self) -> f32 {
        self.keyframes.last().map_or(self.from, |k| k.to)
    }

    /// Value at `time` seconds into a forward pass.
    pub fn sample(&self, time: f32) -> f32 {
        let mut start = self.from;
        let mut t = time.max(0.0);
        for kf in &self.keyframes {
            if kf.duration > 0.0 && t < kf.duration {
                return ease(start, kf.to, t / kf.duration, kf.easing);
            }
            t -= kf.duration;
            start = kf.to;
        }
        start
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        if self.forward {
            self.sample(self.elapsed)
        } else {
            self.sample(self.duration() - self.elapsed)
        }
    }

    /// Normalized progress through the current pass, in [0, 1].
    pub fn progress(&self) -> f32 {
        let total = self.duration();
        if total <= 0.0 {
            1.0
        } else {
            (self.elapsed / total).clamp(0.0, 1.0)
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// A `Once` timeline that reached its end, or any cancelled timeline.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    // -- Control --

    /// Advance by `dt` seconds. Returns true when a `Once` timeline completes
    /// on this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing || self.finished {
            return false;
        }
        let total = self.duration();
        self.elapsed += dt.max(0.0);

        if total <= 0.0 {
            self.elapsed = 0.0;
            if self.repeat == Repeat::Once {
                self.finish();
                return true;
            }
            return false;
        }
        if self.elapsed < total {
            return false;
        }

        match self.repeat {
            Repeat::Once => {
                self.elapsed = total;
                self.finish();
                true
            }
            Repeat::Loop => {
                self.elapsed %= total;
                false
            }
            Repeat::PingPong => {
                let passes = (self.elapsed / total).floor();
                self.elapsed -= passes * total;
                if passes as u32 % 2 == 1 {
                    self.forward = !self.forward;
                }
                false
            }
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        if !self.finished {
            self.playing = true;
        }
    }

    /// Rewind to the start and play.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.forward = true;
        self.finished = false;
        self.playing = true;
    }

    /// Stop for good without reporting completion.
    pub fn cancel(&mut self) {
        self.playing = false;
        self.finished = true;
    }

    fn finish(&mut self) {
        self.playing = false;
        self.finished = true;
    }
}

/// Owns a group of independently ticking timelines.
///
/// Finished timelines stay in the set (holding their final value) until
/// removed, so a one-shot effect can be re-triggered with `restart`.
#[derive(Debug, Default)]
pub struct TimelineSet {
    timelines: HashMap<TimelineId, Timeline>,
    next_id: u32,
    completed: Vec<u32>,
    /// Set-wide pause. Individual play states are left untouched.
    suspended: bool,
}

impl TimelineSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, timeline: Timeline) -> TimelineId {
        let id = TimelineId(self.next_id);
        self.next_id += 1;
        self.timelines.insert(id, timeline);
        id
    }

    pub fn remove(&mut self, id: TimelineId) -> bool {
        self.timelines.remove(&id).is_some()
    }

    pub fn get(&self, id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(&id)
    }

    pub fn get_mut(&mut self, id: TimelineId) -> Option<&mut Timeline> {
        self.timelines.get_mut(&id)
    }

    /// Current value of a timeline.
    pub fn value(&self, id: TimelineId) -> Option<f32> {
        self.timelines.get(&id).map(Timeline::value)
    }

    pub fn restart(&mut self, id: TimelineId) {
        if let Some(t) = self.timelines.get_mut(&id) {
            t.restart();
        }
    }

    /// Freeze the whole set. Timelines paused on their own stay paused
    /// after `resume_all`.
    pub fn pause_all(&mut self) {
        self.suspended = true;
    }

    pub fn resume_all(&mut self) {
        self.suspended = false;
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Advance every timeline. Returns how many completed on this tick.
    pub fn tick(&mut self, dt: f32) -> usize {
        if self.suspended {
            return 0;
        }
        let mut count = 0;
        for timeline in self.timelines.values_mut() {
            if timeline.tick(dt) {
                count += 1;
                if let Some(tag) = timeline.on_complete {
                    self.completed.push(tag);
                }
            }
        }
        count
    }

    /// Completion tags collected since the last drain.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = u32> + '_ {
        self.completed.drain(..)
    }

    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    pub fn clear(&mut self) {
        self.timelines.clear();
        self.completed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn tween_reaches_end_and_completes() {
        let mut t = Timeline::tween(0.0, 100.0, 1.0, Easing::Linear);
        assert!(!t.tick(0.5));
        assert!(close(t.value(), 50.0));
        assert!(t.tick(0.5));
        assert!(close(t.value(), 100.0));
        assert!(t.is_finished());
        assert!(!t.tick(1.0));
    }

    #[test]
    fn looping_sweep_wraps() {
        let mut t = Timeline::looping(-300.0, 1000.0, 15.0, Easing::Linear);
        t.tick(7.5);
        assert!(close(t.value(), 350.0));
        t.tick(7.5 + 1.5);
        assert!(close(t.value(), -300.0 + 1300.0 * 0.1));
        assert!(!t.is_finished());
    }

    #[test]
    fn jump_segment_snaps_back() {
        let t = Timeline::tween(0.0, 1.0, 2.0, Easing::Linear).jump(0.0);
        assert!(close(t.sample(1.999), 0.9995));
        assert_eq!(t.sample(2.0), 0.0);
        assert_eq!(t.duration(), 2.0);
    }

    #[test]
    fn ping_pong_reverses() {
        let mut t = Timeline::oscillate(0.0, -40.0, 2.0, Easing::Linear);
        t.tick(2.0);
        assert!(close(t.value(), -40.0));
        t.tick(1.0);
        assert!(close(t.value(), -20.0));
        t.tick(1.0);
        assert!(close(t.value(), 0.0));
    }

    #[test]
    fn values_stay_in_range_over_many_cycles() {
        let mut t = Timeline::oscillate(0.4, 1.0, 1.0, Easing::EASE_IN_OUT);
        for _ in 0..1000 {
            t.tick(0.037);
            let v = t.value();
            assert!((0.4 - 1e-4..=1.0 + 1e-4).contains(&v), "value {}", v);
        }
    }

    #[test]
    fn multi_segment_sequence_with_hold() {
        let t = Timeline::tween(0.0, 1.0, 0.2, Easing::Linear)
            .hold(0.5)
            .then(0.0, 0.3, Easing::Linear);
        assert!(close(t.duration(), 1.0));
        assert!(close(t.sample(0.1), 0.5));
        assert!(close(t.sample(0.5), 1.0));
        assert!(close(t.sample(0.85), 0.5));
        assert_eq!(t.sample(2.0), 0.0);
    }

    #[test]
    fn cancel_stops_without_completion() {
        let mut set = TimelineSet::new();
        let id = set.add(Timeline::tween(0.0, 1.0, 1.0, Easing::Linear).with_on_complete(7));
        set.get_mut(id).unwrap().cancel();
        assert_eq!(set.tick(2.0), 0);
        assert_eq!(set.drain_completed().count(), 0);
    }

    #[test]
    fn set_reports_completion_tags_and_keeps_finished() {
        let mut set = TimelineSet::new();
        let flash = set.add(Timeline::tween(0.0, 1.0, 0.2, Easing::Linear).with_on_complete(3));
        let sweep = set.add(Timeline::looping(0.0, 1.0, 1.0, Easing::Linear));

        assert_eq!(set.tick(0.25), 1);
        let tags: Vec<u32> = set.drain_completed().collect();
        assert_eq!(tags, vec![3]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.value(flash), Some(1.0));

        set.restart(flash);
        assert_eq!(set.value(flash), Some(0.0));
        assert!(set.get(sweep).unwrap().is_playing());
    }

    #[test]
    fn pause_all_freezes_values() {
        let mut set = TimelineSet::new();
        let id = set.add(Timeline::looping(0.0, 10.0, 1.0, Easing::Linear));
        set.tick(0.3);
        set.pause_all();
        set.tick(0.3);
        assert!(close(set.value(id).unwrap(), 3.0));
        set.resume_all();
        set.tick(0.3);
        assert!(close(set.value(id).unwrap(), 6.0));
    }

    #[test]
    fn resume_all_keeps_individually_paused() {
        let mut set = TimelineSet::new();
        let idle = set.add(Timeline::tween(0.0, 1.0, 1.0, Easing::Linear).paused());
        set.pause_all();
        set.resume_all();
        set.tick(0.5);
        assert_eq!(set.value(idle), Some(0.0));
        assert!(!set.get(idle).unwrap().is_playing());
    }
}

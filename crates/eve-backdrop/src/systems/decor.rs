//! Decorative timelines: the scrolling data stream, the floating
//! octahedron, the breathing stats panel, the status dot and the click flash.

use crate::api::types::TimelineId;
use crate::extensions::{Easing, Timeline, TimelineSet};
use crate::renderer::channels::ChannelBuffer;

/// Channel slots the host reads each frame.
pub mod channel {
    pub const DATA_STREAM_Y: usize = 0;
    pub const OCTAHEDRON_ROTATION: usize = 1;
    pub const OCTAHEDRON_FLOAT: usize = 2;
    pub const PANEL_SCALE: usize = 3;
    pub const STATUS_OPACITY: usize = 4;
    pub const FLASH_OPACITY: usize = 5;
    pub const FLASH_SCALE: usize = 6;
    pub const OCTAHEDRON_X: usize = 7;
    pub const OCTAHEDRON_Y: usize = 8;
    pub const OCTAHEDRON_VISIBLE: usize = 9;

    /// Slots used by the built-in effects.
    pub const COUNT: usize = 10;
}

/// Completion tag reported when the flash finishes.
pub const FLASH_DONE_TAG: u32 = 1;

/// Vertical sweep of the data-stream line: `-300 → 1000` in 15 s, then snap back.
pub fn data_stream() -> Timeline {
    Timeline::looping(-300.0, 1000.0, 15.0, Easing::Linear)
}

/// Full turn of the octahedron every 30 s, in degrees.
pub fn octahedron_rotation() -> Timeline {
    Timeline::looping(0.0, 360.0, 30.0, Easing::Linear)
}

/// Vertical bob: up 40 px over 2 s and back.
pub fn octahedron_float() -> Timeline {
    Timeline::oscillate(0.0, -40.0, 2.0, Easing::SineInOut)
}

/// Stats panel scale pulse.
pub fn breathing() -> Timeline {
    Timeline::oscillate(1.0, 1.025, 2.0, Easing::SineInOut)
}

/// Status indicator opacity.
pub fn blink() -> Timeline {
    Timeline::oscillate(0.4, 1.0, 1.0, Easing::Linear)
}

/// One-shot flash opacity: fade in 200 ms, hold 500 ms, fade out 300 ms.
/// Created paused; started by `Decor::trigger_flash`.
pub fn flash_opacity() -> Timeline {
    Timeline::new(0.0)
        .then(1.0, 0.2, Easing::QuadOut)
        .hold(0.5)
        .then(0.0, 0.3, Easing::QuadIn)
        .with_on_complete(FLASH_DONE_TAG)
        .paused()
}

/// One-shot flash scale `1 → 1.2 → 1`, overshooting like a spring.
/// Tracks the opacity phases: grows with the fade-in, holds, settles with the fade-out.
pub fn flash_scale() -> Timeline {
    Timeline::new(1.0)
        .then(1.2, 0.2, Easing::BackOut)
        .hold(0.5)
        .then(1.0, 0.3, Easing::BackOut)
        .paused()
}

/// Handles to the built-in effect timelines.
#[derive(Debug, Clone, Copy)]
pub struct Decor {
    pub data_stream: TimelineId,
    pub rotation: TimelineId,
    pub float: TimelineId,
    pub breathing: TimelineId,
    pub blink: TimelineId,
    pub flash_opacity: TimelineId,
    pub flash_scale: TimelineId,
}

impl Decor {
    /// Register every effect in `set`. Looping effects start immediately.
    pub fn install(set: &mut TimelineSet) -> Self {
        Self {
            data_stream: set.add(data_stream()),
            rotation: set.add(octahedron_rotation()),
            float: set.add(octahedron_float()),
            breathing: set.add(breathing()),
            blink: set.add(blink()),
            flash_opacity: set.add(flash_opacity()),
            flash_scale: set.add(flash_scale()),
        }
    }

    /// Play the flash from the start, interrupting one in progress.
    pub fn trigger_flash(&self, set: &mut TimelineSet) {
        set.restart(self.flash_opacity);
        set.restart(self.flash_scale);
    }

    pub fn is_flashing(&self, set: &TimelineSet) -> bool {
        set.get(self.flash_opacity).is_some_and(Timeline::is_playing)
    }

    /// Copy current effect values into their channel slots.
    pub fn write_channels(&self, set: &TimelineSet, channels: &mut ChannelBuffer) {
        let slots = [
            (channel::DATA_STREAM_Y, self.data_stream, -300.0),
            (channel::OCTAHEDRON_ROTATION, self.rotation, 0.0),
            (channel::OCTAHEDRON_FLOAT, self.float, 0.0),
            (channel::PANEL_SCALE, self.breathing, 1.0),
            (channel::STATUS_OPACITY, self.blink, 1.0),
            (channel::FLASH_OPACITY, self.flash_opacity, 0.0),
            (channel::FLASH_SCALE, self.flash_scale, 1.0),
        ];
        for (slot, id, fallback) in slots {
            channels.set(slot, set.value(id).unwrap_or(fallback));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn data_stream_wraps_after_fifteen_seconds() {
        let mut t = data_stream();
        t.tick(7.5);
        assert!(approx(t.value(), 350.0));
        t.tick(7.5);
        assert!(approx(t.value(), -300.0));
        t.tick(1.5);
        assert!(approx(t.value(), -170.0));
    }

    #[test]
    fn float_returns_after_four_seconds() {
        let mut t = octahedron_float();
        t.tick(2.0);
        assert!(approx(t.value(), -40.0));
        t.tick(2.0);
        assert!(approx(t.value(), 0.0));
    }

    #[test]
    fn blink_stays_in_range() {
        let mut t = blink();
        for _ in 0..100 {
            t.tick(0.037);
            assert!(t.value() >= 0.4 - 1e-4 && t.value() <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn flash_runs_once_when_triggered() {
        let mut set = TimelineSet::new();
        let decor = Decor::install(&mut set);
        set.tick(0.5);
        assert_eq!(set.value(decor.flash_opacity), Some(0.0));
        assert!(!decor.is_flashing(&set));

        decor.trigger_flash(&mut set);
        set.tick(0.2);
        assert!(approx(set.value(decor.flash_opacity).unwrap(), 1.0));
        set.tick(0.5);
        assert!(approx(set.value(decor.flash_opacity).unwrap(), 1.0));
        set.tick(0.3);
        assert!(approx(set.value(decor.flash_opacity).unwrap(), 0.0));
        assert_eq!(set.drain_completed().collect::<Vec<_>>(), vec![FLASH_DONE_TAG]);

        // Re-triggerable after finishing.
        decor.trigger_flash(&mut set);
        assert!(decor.is_flashing(&set));
    }

    #[test]
    fn flash_scale_overshoots_then_settles() {
        let mut t = flash_scale();
        t.resume();
        let mut peak: f32 = 1.0;
        for _ in 0..110 {
            t.tick(0.01);
            peak = peak.max(t.value());
        }
        assert!(peak >= 1.2);
        assert!(approx(t.value(), 1.0));
    }

    #[test]
    fn flash_scale_holds_with_opacity() {
        let mut set = TimelineSet::new();
        let decor = Decor::install(&mut set);
        decor.trigger_flash(&mut set);
        set.tick(0.2);
        assert!(approx(set.value(decor.flash_scale).unwrap(), 1.2));
        set.tick(0.25);
        assert!(approx(set.value(decor.flash_scale).unwrap(), 1.2));
        set.tick(0.24);
        assert!(approx(set.value(decor.flash_scale).unwrap(), 1.2));
        assert_eq!(
            set.get(decor.flash_scale).map(Timeline::duration),
            set.get(decor.flash_opacity).map(Timeline::duration)
        );
    }

    #[test]
    fn channels_receive_values() {
        let mut set = TimelineSet::new();
        let decor = Decor::install(&mut set);
        let mut ch = ChannelBuffer::new(channel::COUNT);
        set.tick(16.0);
        decor.write_channels(&set, &mut ch);
        assert!(approx(ch.get(channel::OCTAHEDRON_ROTATION), 192.0));
        assert!(approx(ch.get(channel::FLASH_SCALE), 1.0));
        assert!(approx(ch.get(channel::PANEL_SCALE), 1.0));
    }
}

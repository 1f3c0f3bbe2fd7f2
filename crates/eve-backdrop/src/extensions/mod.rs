// extensions/mod.rs
//
// Scalar animation helpers. Decoupled from the particle field; effects
// opt in by adding timelines to the context's `TimelineSet`.

pub mod easing;
pub mod timeline;

pub use easing::{ease, lerp, CubicBezier, Easing};
pub use timeline::{Keyframe, Repeat, Timeline, TimelineSet};

//! Particle-line ("snake") background animation.
//!
//! A small population of points drifts across the viewport, reflecting off
//! its edges. The field is advanced by a throttled tick and rendered as
//! fading trails of dots.

mod config;
mod field;
mod particle;

pub use config::{SnakeConfig, SpawnEdge};
pub use field::{SnakeField, TickReport};
pub use particle::{trail_opacity, Reflection, Snake, TrailDot, TRAIL_MIN_OPACITY};

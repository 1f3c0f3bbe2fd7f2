pub mod api;
pub mod bridge;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod site;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::backdrop::{Backdrop, BackdropConfig, EffectContext, FrameReport, RenderContext};
pub use api::types::{SiteEvent, SnakeId, TimelineId};
pub use bridge::protocol::{FrameData, ProtocolLayout};
pub use core::rng::Rng;
pub use core::time::{Debounce, FrameThrottle};
pub use core::viewport::{Bounds, Viewport};
pub use error::{BackdropError, Result};
pub use input::queue::{HostEvent, InputQueue};
pub use layout::{style_for, Breakpoint, StyleCache, StyleSet, ViewportFlags};
pub use renderer::{ChannelBuffer, DotBuffer, DotInstance};
pub use site::{DocTabs, ProtocolCard, RoadmapPhase, Route, RouteSet, SiteManifest, StatsPanel};
pub use systems::decor::{channel, Decor};
pub use systems::render::build_dot_buffer;
pub use systems::snake::{SnakeConfig, SnakeField, SpawnEdge};
pub use systems::wander::Wander;

pub use extensions::{ease, lerp, CubicBezier, Easing, Keyframe, Repeat, Timeline, TimelineSet};

/// Shared buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Dots: max_dots × 4 floats]
/// [Channels: max_channels × 1 float]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header at init.
/// The host reads them back to compute offsets.

use crate::api::backdrop::BackdropConfig;
use crate::api::types::SiteEvent;
use crate::renderer::instance::DotInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_DOTS: usize = 2;
pub const HEADER_DOT_COUNT: usize = 3;
pub const HEADER_VIEWPORT_WIDTH: usize = 4;
pub const HEADER_VIEWPORT_HEIGHT: usize = 5;
pub const HEADER_MAX_CHANNELS: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_PROTOCOL_VERSION: usize = 9;
pub const HEADER_BREAKPOINT: usize = 10;
pub const HEADER_POPULATION: usize = 11;

pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per dot: x, y, size, alpha.
pub const DOT_FLOATS: usize = DotInstance::FLOATS;

/// Floats per event: kind, a, b, c.
pub const EVENT_FLOATS: usize = SiteEvent::FLOATS;

/// Buffer layout computed from the configured capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_dots: usize,
    pub max_channels: usize,
    pub max_events: usize,

    pub dot_data_offset: usize,
    pub channel_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_dots: usize, max_channels: usize, max_events: usize) -> Self {
        let dot_data_offset = HEADER_FLOATS;
        let channel_data_offset = dot_data_offset + max_dots * DOT_FLOATS;
        let event_data_offset = channel_data_offset + max_channels;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_dots,
            max_channels,
            max_events,
            dot_data_offset,
            channel_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &BackdropConfig) -> Self {
        Self::new(config.max_dots, config.max_channels, config.max_events)
    }

    /// A zeroed buffer with the capacities and version already in the header.
    pub fn allocate(&self) -> Vec<f32> {
        let mut buf = vec![0.0; self.buffer_total_floats];
        buf[HEADER_MAX_DOTS] = self.max_dots as f32;
        buf[HEADER_MAX_CHANNELS] = self.max_channels as f32;
        buf[HEADER_MAX_EVENTS] = self.max_events as f32;
        buf[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buf
    }

    /// Copy one frame into `buf`, truncating each section to its capacity.
    /// The lock float is raised while writing.
    pub fn write_frame(&self, buf: &mut [f32], frame: &FrameData<'_>) {
        if buf.len() < self.buffer_total_floats {
            return;
        }
        buf[HEADER_LOCK] = 1.0;

        let dot_floats = frame.dots.len().min(self.max_dots * DOT_FLOATS);
        buf[self.dot_data_offset..self.dot_data_offset + dot_floats]
            .copy_from_slice(&frame.dots[..dot_floats]);

        let channels = frame.channels.len().min(self.max_channels);
        buf[self.channel_data_offset..self.channel_data_offset + channels]
            .copy_from_slice(&frame.channels[..channels]);

        let events = frame.events.len().min(self.max_events);
        let event_floats: &[f32] = bytemuck::cast_slice(&frame.events[..events]);
        buf[self.event_data_offset..self.event_data_offset + event_floats.len()]
            .copy_from_slice(event_floats);

        buf[HEADER_FRAME_COUNTER] = frame.frame as f32;
        buf[HEADER_DOT_COUNT] = (dot_floats / DOT_FLOATS) as f32;
        buf[HEADER_VIEWPORT_WIDTH] = frame.viewport_width;
        buf[HEADER_VIEWPORT_HEIGHT] = frame.viewport_height;
        buf[HEADER_EVENT_COUNT] = events as f32;
        buf[HEADER_BREAKPOINT] = frame.breakpoint as f32;
        buf[HEADER_POPULATION] = frame.population as f32;
        buf[HEADER_LOCK] = 0.0;
    }
}

/// Everything one frame publishes to the host.
pub struct FrameData<'a> {
    pub frame: u64,
    pub dots: &'a [f32],
    pub channels: &'a [f32],
    pub events: &'a [SiteEvent],
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub breakpoint: u32,
    pub population: usize,
}

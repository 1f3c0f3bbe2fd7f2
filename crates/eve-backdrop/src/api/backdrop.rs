use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::types::SiteEvent;
use crate::core::rng::Rng;
use crate::core::time::{Debounce, FrameThrottle};
use crate::core::viewport::Viewport;
use crate::error::{BackdropError, Result};
use crate::extensions::TimelineSet;
use crate::input::queue::InputQueue;
use crate::layout::Breakpoint;
use crate::renderer::channels::ChannelBuffer;
use crate::renderer::instance::DotBuffer;
use crate::systems::snake::{SnakeConfig, SnakeField, TickReport};

/// Configuration for the backdrop, provided by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Minimum time between particle ticks, in seconds (default: 0.1).
    pub tick_interval: f32,
    /// Quiet time before a resize is applied, in seconds (default: 0.25).
    pub resize_debounce: f32,
    /// Viewport assumed until the host reports the real one.
    pub viewport: Viewport,
    /// RNG seed. The same seed replays the same particle field.
    pub seed: u64,
    /// Maximum trail dots written per frame (default: 2048).
    pub max_dots: usize,
    /// Scalar channel slots (default: 16).
    pub max_channels: usize,
    /// Maximum events per frame (default: 32).
    pub max_events: usize,
    pub snake: SnakeConfig,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            tick_interval: 0.1,
            resize_debounce: 0.25,
            viewport: Viewport::default(),
            seed: 42,
            max_dots: 2048,
            max_channels: 16,
            max_events: 32,
            snake: SnakeConfig::classic(),
        }
    }
}

impl BackdropConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BackdropConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("tick_interval", self.tick_interval),
            ("resize_debounce", self.resize_debounce),
        ] {
            if !(value > 0.0) {
                return Err(BackdropError::InvalidTiming { name, value });
            }
        }
        self.snake.validate()
    }
}

/// The contract every backdrop variant fulfills.
pub trait Backdrop {
    /// Return configuration. Called once before init.
    fn config(&self) -> BackdropConfig {
        BackdropConfig::default()
    }

    /// Register timelines and other per-variant state.
    fn init(&mut self, ctx: &mut EffectContext);

    /// Per-frame hook, called after input is collected and before the
    /// context advances. React to clicks and custom events here.
    fn update(&mut self, ctx: &mut EffectContext, input: &InputQueue, dt: f32);

    /// Write per-frame outputs. Dots are already rebuilt when this runs.
    fn render(&self, _ctx: &EffectContext, _out: &mut RenderContext) {}
}

/// What `EffectContext::advance` did this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// Present when the particle field ticked.
    pub snakes: Option<TickReport>,
    /// Present when a debounced resize was applied.
    pub resized: Option<Viewport>,
    /// One-shot timelines that completed.
    pub completed: usize,
}

/// All live backdrop state, passed explicitly to the variant.
pub struct EffectContext {
    pub viewport: Viewport,
    pub rng: Rng,
    pub snakes: SnakeField,
    pub timelines: TimelineSet,
    pub events: Vec<SiteEvent>,
    throttle: FrameThrottle,
    resize: Debounce<Viewport>,
    max_events: usize,
    running: bool,
}

impl EffectContext {
    pub fn new(config: &BackdropConfig) -> Result<Self> {
        config.validate()?;
        let viewport = config.viewport.sanitized();
        Ok(Self {
            viewport,
            rng: Rng::new(config.seed),
            snakes: SnakeField::new(config.snake.clone(), viewport)?,
            timelines: TimelineSet::new(),
            events: Vec::with_capacity(config.max_events),
            throttle: FrameThrottle::new(config.tick_interval),
            resize: Debounce::new(config.resize_debounce),
            max_events: config.max_events,
            running: false,
        })
    }

    /// Begin animating: fill the particle floor and resume timelines.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.throttle.reset();
        let spawned = self.snakes.populate(&mut self.rng);
        self.timelines.resume_all();
        info!(
            "backdrop started: {}x{}, {} particles",
            self.viewport.width, self.viewport.height, spawned
        );
    }

    /// Stop animating and drop live particle state.
    ///
    /// A resize still inside its debounce wait is applied, so the next
    /// `start` populates against the latest viewport.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(viewport) = self.resize.flush() {
            self.apply_resize(viewport);
        }
        self.snakes.clear();
        self.timelines.pause_all();
        self.events.clear();
        info!("backdrop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Queue a host resize. Applied once the debounce wait passes quietly.
    pub fn request_resize(&mut self, viewport: Viewport) {
        self.resize.push(viewport.sanitized());
    }

    /// Apply a viewport change immediately.
    pub fn apply_resize(&mut self, viewport: Viewport) {
        let viewport = viewport.sanitized();
        self.viewport = viewport;
        self.snakes.resize(viewport);
        let bp = Breakpoint::from_width(viewport.width);
        info!("viewport {}x{} ({:?})", viewport.width, viewport.height, bp);
        self.emit_event(SiteEvent::new(
            SiteEvent::KIND_RESIZED,
            viewport.width,
            viewport.height,
            bp.index() as f32,
        ));
    }

    /// Advance by one display frame of `dt` seconds.
    ///
    /// Timelines tick every frame; the particle field ticks only when the
    /// throttle lets it through.
    pub fn advance(&mut self, dt: f32) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.running {
            return report;
        }

        report.completed = self.timelines.tick(dt);
        let tags: Vec<u32> = self.timelines.drain_completed().collect();
        for tag in tags {
            self.emit_event(SiteEvent::new(SiteEvent::KIND_TIMELINE_DONE, tag as f32, 0.0, 0.0));
        }

        if let Some(viewport) = self.resize.poll(dt) {
            self.apply_resize(viewport);
            report.resized = Some(viewport);
        }

        if self.throttle.poll(dt) {
            let tick = self.snakes.tick(&mut self.rng);
            if tick.spawned > 0 {
                self.emit_event(SiteEvent::new(
                    SiteEvent::KIND_POPULATION,
                    self.snakes.len() as f32,
                    tick.removed as f32,
                    tick.spawned as f32,
                ));
            }
            report.snakes = Some(tick);
        }
        report
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.viewport.width)
    }

    /// Queue an event for the host. Dropped past the per-frame limit.
    pub fn emit_event(&mut self, event: SiteEvent) {
        if self.events.len() >= self.max_events {
            warn!("event limit {} reached, dropping kind {}", self.max_events, event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        if !self.events.is_empty() {
            debug!("clearing {} events", self.events.len());
        }
        self.events.clear();
    }
}

/// Per-frame outputs handed to `Backdrop::render`.
pub struct RenderContext<'a> {
    pub dots: &'a mut DotBuffer,
    pub channels: &'a mut ChannelBuffer,
}

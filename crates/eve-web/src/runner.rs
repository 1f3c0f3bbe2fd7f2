use log::{error, info, warn};

use eve_backdrop::{
    build_dot_buffer, Backdrop, BackdropConfig, ChannelBuffer, DocTabs, DotBuffer,
    EffectContext, FrameData, HostEvent, InputQueue, ProtocolLayout, RenderContext, Result,
    RouteSet, SiteManifest, StyleCache, Viewport, ViewportFlags,
};

/// Generic runner that wires a backdrop variant to the host.
///
/// Each page crate keeps one `BackdropRunner` in a `thread_local!` and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct BackdropRunner<B: Backdrop> {
    backdrop: B,
    ctx: EffectContext,
    input: InputQueue,
    dots: DotBuffer,
    channels: ChannelBuffer,
    config: BackdropConfig,
    layout: ProtocolLayout,
    /// Flat shared buffer the host reads after every tick.
    buffer: Vec<f32>,
    frame: u64,
    initialized: bool,
    site: Option<SiteManifest>,
    routes: RouteSet,
    tabs: DocTabs,
    styles: StyleCache,
}

impl<B: Backdrop> BackdropRunner<B> {
    pub fn new(backdrop: B) -> Result<Self> {
        let config = backdrop.config();
        let ctx = EffectContext::new(&config)?;
        let layout = ProtocolLayout::from_config(&config);

        Ok(Self {
            backdrop,
            ctx,
            input: InputQueue::new(),
            dots: DotBuffer::new(config.max_dots),
            channels: ChannelBuffer::new(config.max_channels),
            buffer: layout.allocate(),
            layout,
            config,
            frame: 0,
            initialized: false,
            site: None,
            routes: RouteSet::default(),
            tabs: DocTabs::new(&[]),
            styles: StyleCache::new(),
        })
    }

    /// Let the variant register its effects. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.backdrop.init(&mut self.ctx);
        self.initialized = true;
        self.publish();
    }

    pub fn start(&mut self) {
        if !self.initialized {
            warn!("start before init ignored");
            return;
        }
        self.ctx.start();
        self.rebuild_dots();
        self.publish();
    }

    /// Stop animating and blank the published frame.
    pub fn stop(&mut self) {
        self.forward_resizes();
        self.ctx.stop();
        self.input.clear();
        self.dots.clear();
        self.channels.reset();
        self.publish();
    }

    pub fn is_running(&self) -> bool {
        self.ctx.is_running()
    }

    pub fn push_input(&mut self, event: HostEvent) {
        self.input.push(event);
    }

    /// Report a new window size. Applied after the debounce wait.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.push_input(HostEvent::Resize { width, height });
    }

    /// Run one display frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized || !self.ctx.is_running() {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.ctx.clear_frame_data();

        self.forward_resizes();
        self.backdrop.update(&mut self.ctx, &self.input, dt);
        self.input.clear();

        let report = self.ctx.advance(dt);
        if report.snakes.is_some() || report.resized.is_some() {
            self.rebuild_dots();
        }

        {
            let mut out = RenderContext {
                dots: &mut self.dots,
                channels: &mut self.channels,
            };
            self.backdrop.render(&self.ctx, &mut out);
        }

        self.frame += 1;
        self.publish();
    }

    fn forward_resizes(&mut self) {
        for event in self.input.iter() {
            if let HostEvent::Resize { width, height } = *event {
                self.ctx.request_resize(Viewport::new(width, height));
            }
        }
    }

    fn rebuild_dots(&mut self) {
        build_dot_buffer(&self.ctx.snakes, &mut self.dots);
    }

    fn publish(&mut self) {
        let viewport = self.ctx.viewport;
        self.layout.write_frame(
            &mut self.buffer,
            &FrameData {
                frame: self.frame,
                dots: self.dots.as_floats(),
                channels: self.channels.as_slice(),
                events: &self.ctx.events,
                viewport_width: viewport.width,
                viewport_height: viewport.height,
                breakpoint: self.ctx.breakpoint().index(),
                population: self.ctx.snakes.len(),
            },
        );
    }

    // ---- Site content ----

    /// Parse and install the site manifest. The previous one is kept on error.
    pub fn load_site(&mut self, json: &str) -> Result<()> {
        match SiteManifest::from_json(json) {
            Ok(site) => {
                self.routes = site.route_set();
                self.tabs = DocTabs::new(&site.docs);
                info!(
                    "site loaded: {} docs, {} routes",
                    site.docs.len(),
                    self.routes.iter().count()
                );
                self.site = Some(site);
                Ok(())
            }
            Err(e) => {
                error!("site manifest rejected: {}", e);
                Err(e)
            }
        }
    }

    pub fn site(&self) -> Option<&SiteManifest> {
        self.site.as_ref()
    }

    /// Route index for a location path.
    pub fn route(&self, path: &str) -> Result<u32> {
        self.routes.resolve(path).map(|r| r.index())
    }

    pub fn select_tab(&mut self, id: &str) -> Result<()> {
        self.tabs.select(id)
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.tabs.active()
    }

    /// Style set for `width`, as JSON.
    pub fn style_json(&mut self, width: f32) -> Result<String> {
        Ok(serde_json::to_string(self.styles.get(width))?)
    }

    pub fn flags_json(&self, width: f32) -> Result<String> {
        Ok(serde_json::to_string(&ViewportFlags::from_width(width))?)
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn dots_ptr(&self) -> *const f32 {
        self.dots.dots_ptr()
    }

    pub fn dot_count(&self) -> u32 {
        self.dots.dot_count()
    }

    pub fn channels_ptr(&self) -> *const f32 {
        self.channels.as_slice().as_ptr()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.viewport.width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.viewport.height
    }

    pub fn population(&self) -> u32 {
        self.ctx.snakes.len() as u32
    }

    // ---- Capacity accessors ----

    pub fn max_dots(&self) -> u32 {
        self.config.max_dots as u32
    }

    pub fn max_channels(&self) -> u32 {
        self.config.max_channels as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }

    #[cfg(test)]
    fn buffer(&self) -> &[f32] {
        &self.buffer
    }
}

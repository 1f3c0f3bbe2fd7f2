use glam::Vec2;
use log::debug;

use eve_backdrop::{
    channel, Backdrop, BackdropConfig, Decor, EffectContext, HostEvent, InputQueue,
    RenderContext, SnakeConfig, ViewportFlags, Wander,
};

/// Custom event kind the page sends to fire the flash without a click.
pub const EVENT_FLASH: u32 = 1;

/// Side of the octahedron's square hit box, in CSS pixels.
const OCTAHEDRON_SIZE: f32 = 400.0;

/// Landing page backdrop: particle lines, the data stream, the wandering
/// octahedron and the status panel animations.
pub struct LandingBackdrop {
    snake: SnakeConfig,
    decor: Option<Decor>,
    wander: Option<Wander>,
}

impl LandingBackdrop {
    pub fn new() -> Self {
        Self::with_snakes(SnakeConfig::classic())
    }

    pub fn with_snakes(snake: SnakeConfig) -> Self {
        Self {
            snake,
            decor: None,
            wander: None,
        }
    }

    fn octahedron_origin(&self, ctx: &EffectContext) -> Option<Vec2> {
        let wander = self.wander.as_ref()?;
        let decor = self.decor.as_ref()?;
        let float = ctx.timelines.value(decor.float).unwrap_or(0.0);
        Some(wander.position(&ctx.timelines) + Vec2::new(0.0, float))
    }

    fn hits_octahedron(&self, ctx: &EffectContext, p: Vec2) -> bool {
        if !ViewportFlags::from_width(ctx.viewport.width).show_octahedron {
            return false;
        }
        self.octahedron_origin(ctx).is_some_and(|o| {
            p.cmpge(o).all() && p.cmple(o + Vec2::splat(OCTAHEDRON_SIZE)).all()
        })
    }
}

impl Default for LandingBackdrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Backdrop for LandingBackdrop {
    fn config(&self) -> BackdropConfig {
        BackdropConfig {
            snake: self.snake.clone(),
            max_channels: channel::COUNT,
            ..Default::default()
        }
    }

    fn init(&mut self, ctx: &mut EffectContext) {
        self.decor = Some(Decor::install(&mut ctx.timelines));
        self.wander = Some(Wander::install(&mut ctx.timelines, &mut ctx.rng, ctx.viewport));
    }

    fn update(&mut self, ctx: &mut EffectContext, input: &InputQueue, dt: f32) {
        let mut flash = false;
        for event in input.iter() {
            match *event {
                HostEvent::PointerDown { x, y } => {
                    if self.hits_octahedron(ctx, Vec2::new(x, y)) {
                        flash = true;
                    }
                }
                HostEvent::Custom { kind: EVENT_FLASH, .. } => flash = true,
                _ => {}
            }
        }
        if flash {
            if let Some(decor) = &self.decor {
                debug!("flash triggered");
                decor.trigger_flash(&mut ctx.timelines);
            }
        }

        if ViewportFlags::from_width(ctx.viewport.width).show_octahedron {
            if let Some(wander) = &mut self.wander {
                wander.update(dt, &mut ctx.timelines, &mut ctx.rng, ctx.viewport);
            }
        }
    }

    fn render(&self, ctx: &EffectContext, out: &mut RenderContext) {
        if let Some(decor) = &self.decor {
            decor.write_channels(&ctx.timelines, out.channels);
        }
        if let Some(wander) = &self.wander {
            let p = wander.position(&ctx.timelines);
            out.channels.set(channel::OCTAHEDRON_X, p.x);
            out.channels.set(channel::OCTAHEDRON_Y, p.y);
        }
        let visible = ViewportFlags::from_width(ctx.viewport.width).show_octahedron;
        out.channels.set(channel::OCTAHEDRON_VISIBLE, if visible { 1.0 } else { 0.0 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eve_backdrop::{ChannelBuffer, DotBuffer, SiteManifest, Viewport};

    fn setup(width: f32) -> (LandingBackdrop, EffectContext) {
        let mut backdrop = LandingBackdrop::new();
        let config = BackdropConfig {
            viewport: Viewport::new(width, 900.0),
            ..backdrop.config()
        };
        let mut ctx = EffectContext::new(&config).unwrap();
        backdrop.init(&mut ctx);
        ctx.start();
        (backdrop, ctx)
    }

    fn flash_opacity(b: &LandingBackdrop, ctx: &EffectContext) -> f32 {
        ctx.timelines.value(b.decor.unwrap().flash_opacity).unwrap()
    }

    #[test]
    fn custom_event_triggers_flash() {
        let (mut b, mut ctx) = setup(1440.0);
        let mut input = InputQueue::new();
        input.push(HostEvent::Custom { kind: EVENT_FLASH, a: 0.0, b: 0.0, c: 0.0 });
        b.update(&mut ctx, &input, 0.0);
        ctx.advance(0.2);
        assert!((flash_opacity(&b, &ctx) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn click_on_octahedron_triggers_flash() {
        let (mut b, mut ctx) = setup(1440.0);
        let origin = b.octahedron_origin(&ctx).unwrap();
        let mut input = InputQueue::new();
        input.push(HostEvent::PointerDown { x: origin.x + 10.0, y: origin.y + 10.0 });
        b.update(&mut ctx, &input, 0.0);
        ctx.advance(0.1);
        assert!(flash_opacity(&b, &ctx) > 0.0);
    }

    #[test]
    fn octahedron_hidden_and_inert_on_narrow_screens() {
        let (mut b, mut ctx) = setup(1000.0);
        let origin = b.octahedron_origin(&ctx).unwrap();
        let mut input = InputQueue::new();
        input.push(HostEvent::PointerDown { x: origin.x + 1.0, y: origin.y + 1.0 });
        b.update(&mut ctx, &input, 0.0);
        ctx.advance(0.1);
        assert_eq!(flash_opacity(&b, &ctx), 0.0);

        let mut dots = DotBuffer::new(16);
        let mut channels = ChannelBuffer::new(channel::COUNT);
        b.render(&ctx, &mut RenderContext { dots: &mut dots, channels: &mut channels });
        assert_eq!(channels.get(channel::OCTAHEDRON_VISIBLE), 0.0);
    }

    #[test]
    fn render_fills_effect_channels() {
        let (b, mut ctx) = setup(1440.0);
        ctx.advance(1.0);
        let mut dots = DotBuffer::new(16);
        let mut channels = ChannelBuffer::new(channel::COUNT);
        b.render(&ctx, &mut RenderContext { dots: &mut dots, channels: &mut channels });
        assert_eq!(channels.get(channel::OCTAHEDRON_VISIBLE), 1.0);
        assert!((channels.get(channel::OCTAHEDRON_ROTATION) - 12.0).abs() < 1e-3);
        assert!(channels.get(channel::PANEL_SCALE) > 1.0);
    }

    #[test]
    fn bundled_site_manifest_is_valid() {
        let site = SiteManifest::from_json(include_str!("../assets/site.json")).unwrap();
        assert_eq!(site.docs[0].id, "introduction");
        assert_eq!(site.docs.len(), 4);
        assert_eq!(site.stats.daily_usage.len(), 7);
        assert_eq!(site.stats.metrics.len(), 3);
        assert_eq!(site.policies.len(), 3);
        assert_eq!(site.roadmap.len(), 3);
        assert_eq!(site.active_phase().map(|p| p.title.as_str()), Some("Foundation Phase"));
        assert!(site.roadmap.iter().all(|p| p.milestones.len() == 3));
        assert_eq!(site.protocol_cards.len(), 3);
        assert_eq!(site.protocol_cards[2].term, "en·ti·ty");
    }
}

use bytemuck::{Pod, Zeroable};

/// Opaque identifier of a particle line, drawn from the seeded RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnakeId(pub u64);

/// Handle to a timeline in a `TimelineSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelineId(pub u32);

/// An event communicated from Rust to the host via the shared buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SiteEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SiteEvent {
    pub const FLOATS: usize = 4;

    /// Viewport settled after a resize. a = width, b = height, c = breakpoint index.
    pub const KIND_RESIZED: f32 = 1.0;
    /// A one-shot timeline finished. a = completion tag.
    pub const KIND_TIMELINE_DONE: f32 = 2.0;
    /// Population was refilled. a = live count, b = removed, c = spawned.
    pub const KIND_POPULATION: f32 = 3.0;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

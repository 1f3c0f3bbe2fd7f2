use bytemuck::{Pod, Zeroable};

/// One trail dot written to the shared buffer for the host renderer.
/// Must match the host protocol: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DotInstance {
    /// X position in CSS pixels.
    pub x: f32,
    /// Y position in CSS pixels.
    pub y: f32,
    /// Diameter in CSS pixels.
    pub size: f32,
    /// Opacity in [0, 1].
    pub alpha: f32,
}

impl DotInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Fixed-capacity list of dots for one frame. Pushes past capacity are dropped.
pub struct DotBuffer {
    instances: Vec<DotInstance>,
    capacity: usize,
    dropped: usize,
}

impl DotBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.dropped = 0;
    }

    /// Returns false when the buffer is full and the dot was dropped.
    pub fn push(&mut self, dot: DotInstance) -> bool {
        if self.instances.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.instances.push(dot);
        true
    }

    pub fn instances(&self) -> &[DotInstance] {
        &self.instances
    }

    pub fn dot_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Dots rejected since the last clear.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Flat f32 view of the dot data.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to dot data for shared-memory reads.
    pub fn dots_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

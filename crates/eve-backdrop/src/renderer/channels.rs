use log::warn;

/// Per-frame scalar outputs (rotation, float offset, opacity...) the host
/// reads by slot index.
pub struct ChannelBuffer {
    values: Vec<f32>,
}

impl ChannelBuffer {
    pub fn new(slots: usize) -> Self {
        Self {
            values: vec![0.0; slots],
        }
    }

    /// Write a slot. Out-of-range slots are ignored with a warning.
    pub fn set(&mut self, slot: usize, value: f32) {
        match self.values.get_mut(slot) {
            Some(v) => *v = value,
            None => warn!("channel {} out of range ({} slots)", slot, self.values.len()),
        }
    }

    pub fn get(&self, slot: usize) -> f32 {
        self.values.get(slot).copied().unwrap_or(0.0)
    }

    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0.0);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_and_ignore_out_of_range() {
        let mut ch = ChannelBuffer::new(3);
        ch.set(1, 0.5);
        ch.set(7, 9.0);
        assert_eq!(ch.get(1), 0.5);
        assert_eq!(ch.get(7), 0.0);
        assert_eq!(ch.as_slice(), &[0.0, 0.5, 0.0]);
        ch.reset();
        assert_eq!(ch.get(1), 0.0);
    }
}

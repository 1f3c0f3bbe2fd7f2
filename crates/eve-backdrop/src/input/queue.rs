/// Host events the backdrop understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The browser window changed size (undebounced).
    Resize { width: f32, height: f32 },
    /// A click or touch began at page coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// The cursor moved to page coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A custom event from the page UI (tab switch, button press).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Events pushed by the host between frames, drained by the runner.
pub struct InputQueue {
    events: Vec<HostEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(HostEvent::Resize { width: 800.0, height: 600.0 });
        q.push(HostEvent::PointerDown { x: 10.0, y: 20.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[1], HostEvent::PointerDown { x: 10.0, y: 20.0 });
        assert!(q.is_empty());
    }

    #[test]
    fn custom_event_keeps_payload() {
        let mut q = InputQueue::new();
        q.push(HostEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        let first = q.iter().next().copied();
        match first {
            Some(HostEvent::Custom { kind, a, b, c }) => {
                assert_eq!((kind, a, b, c), (7, 1.5, 2.5, 3.5));
            }
            other => panic!("expected Custom, got {:?}", other),
        }
    }
}

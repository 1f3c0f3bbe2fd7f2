use log::warn;

use crate::renderer::instance::{DotBuffer, DotInstance};
use crate::systems::snake::SnakeField;

/// Diameter of one trail dot, in CSS pixels.
pub const DOT_SIZE: f32 = 4.0;

/// Rebuild the dot buffer from the live particle lines, head first.
/// Returns the number of dots written.
pub fn build_dot_buffer(field: &SnakeField, buffer: &mut DotBuffer) -> usize {
    buffer.clear();
    let config = field.config();

    for snake in field.iter() {
        for dot in snake.trail(config.fade_length, config.dot_spacing) {
            buffer.push(DotInstance {
                x: dot.position.x,
                y: dot.position.y,
                size: DOT_SIZE,
                alpha: dot.opacity,
            });
        }
    }

    if buffer.dropped() > 0 {
        warn!(
            "dot buffer full: {} dots dropped (capacity {})",
            buffer.dropped(),
            buffer.capacity()
        );
    }
    buffer.dot_count() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::core::viewport::Viewport;
    use crate::systems::snake::{SnakeConfig, TRAIL_MIN_OPACITY};

    fn field() -> (SnakeField, Rng) {
        let mut rng = Rng::new(11);
        let mut field = SnakeField::new(SnakeConfig::classic(), Viewport::new(800.0, 600.0)).unwrap();
        field.populate(&mut rng);
        (field, rng)
    }

    #[test]
    fn writes_every_trail_dot() {
        let (field, _) = field();
        let mut buf = DotBuffer::new(4096);
        let written = build_dot_buffer(&field, &mut buf);
        assert_eq!(written, field.dot_count());
        let first = buf.instances()[0];
        assert_eq!(first.alpha, 1.0);
        assert_eq!(first.size, DOT_SIZE);
        assert!(buf.instances().iter().all(|d| d.alpha >= TRAIL_MIN_OPACITY));
    }

    #[test]
    fn truncates_at_capacity() {
        let (field, _) = field();
        let mut buf = DotBuffer::new(10);
        assert_eq!(build_dot_buffer(&field, &mut buf), 10);
        assert!(buf.dropped() > 0);
    }
}

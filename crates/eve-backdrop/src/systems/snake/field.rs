use log::{debug, warn};

use super::config::SnakeConfig;
use super::particle::Snake;
use crate::api::types::SnakeId;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::error::Result;

/// Outcome of one field tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Direction components re-signed this tick.
    pub reflections: usize,
    /// Particles culled for leaving the padded viewport.
    pub removed: usize,
    /// Replacements created to restore the population floor.
    pub spawned: usize,
}

/// The live set of particle lines.
///
/// Between ticks the population is always within
/// `[config.min_snakes, config.max_snakes]` once populated, and every
/// particle lies inside the viewport grown by `config.margin`.
pub struct SnakeField {
    config: SnakeConfig,
    viewport: Viewport,
    snakes: Vec<Snake>,
}

impl SnakeField {
    pub fn new(config: SnakeConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;
        let snakes = Vec::with_capacity(config.max_snakes);
        Ok(Self {
            config,
            viewport: viewport.sanitized(),
            snakes,
        })
    }

    /// Create particles until the population floor is reached.
    /// Returns how many were created.
    pub fn populate(&mut self, rng: &mut Rng) -> usize {
        let mut spawned = 0;
        while self.snakes.len() < self.config.min_snakes {
            if self.spawn(rng).is_none() {
                break;
            }
            spawned += 1;
        }
        spawned
    }

    /// Create one particle at a random spawn edge. `None` at the cap.
    pub fn spawn(&mut self, rng: &mut Rng) -> Option<SnakeId> {
        if self.is_full() {
            return None;
        }
        let snake = Snake::spawn(&self.config, self.viewport, rng);
        self.insert(snake)
    }

    /// Add a prepared particle. Refused (returns `None`) at the cap.
    pub fn insert(&mut self, snake: Snake) -> Option<SnakeId> {
        if self.is_full() {
            warn!("snake field: cap of {} reached, insert refused", self.config.max_snakes);
            return None;
        }
        let id = snake.id();
        self.snakes.push(snake);
        Some(id)
    }

    /// Advance every particle, cull those outside the padded viewport and
    /// refill the population floor.
    pub fn tick(&mut self, rng: &mut Rng) -> TickReport {
        let extent = self.viewport.extent();
        let mut reflections = 0;
        for snake in &mut self.snakes {
            let r = snake.advance(extent);
            reflections += r.x as usize + r.y as usize;
        }

        let bounds = self.viewport.padded(self.config.margin);
        let before = self.snakes.len();
        self.snakes.retain(|s| bounds.contains(s.position()));
        let removed = before - self.snakes.len();

        let spawned = self.populate(rng);
        if removed > 0 || spawned > 0 {
            debug!(
                "snake field: removed {}, spawned {}, live {}",
                removed,
                spawned,
                self.snakes.len()
            );
        }

        TickReport { reflections, removed, spawned }
    }

    /// Change the viewport. Particles outside the new padded region are
    /// culled on the next tick.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport.sanitized();
    }

    /// Drop every particle.
    pub fn clear(&mut self) {
        self.snakes.clear();
    }

    pub fn is_full(&self) -> bool {
        self.snakes.len() >= self.config.max_snakes
    }

    pub fn len(&self) -> usize {
        self.snakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snakes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter()
    }

    pub fn get(&self, id: SnakeId) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id() == id)
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total trail dots across all particles.
    pub fn dot_count(&self) -> usize {
        self.snakes.iter().map(Snake::trail_len).sum()
    }
}

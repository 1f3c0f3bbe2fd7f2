use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};

/// Viewport edge a particle enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Population and motion parameters for the particle-line field.
///
/// Distances are CSS pixels, speeds are pixels per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Population floor; refilled every tick.
    pub min_snakes: usize,
    /// Population ceiling; never exceeded by any insertion.
    pub max_snakes: usize,
    pub base_speed: f32,
    /// Speed is drawn from [base_speed, base_speed + speed_variation).
    pub speed_variation: f32,
    /// Trail dot count is drawn from [base_length, base_length + length_variation).
    pub base_length: usize,
    pub length_variation: usize,
    /// Dots past this index render at the opacity floor.
    pub fade_length: usize,
    /// How far outside the viewport a new particle starts.
    pub spawn_inset: f32,
    /// Particles beyond the viewport grown by this margin are culled.
    pub margin: f32,
    /// Distance between consecutive trail dots.
    pub dot_spacing: f32,
    /// Largest sideways direction component given to a new particle.
    pub max_drift: f32,
    pub spawn_edges: Vec<SpawnEdge>,
}

impl SnakeConfig {
    /// Home page configuration: left-to-right lines, 5..15 of them.
    pub fn classic() -> Self {
        Self {
            min_snakes: 5,
            max_snakes: 15,
            base_speed: 6.0,
            speed_variation: 3.0,
            base_length: 52,
            length_variation: 20,
            fade_length: 35,
            spawn_inset: 37.5,
            margin: 50.0,
            dot_spacing: 2.0,
            max_drift: 0.0,
            spawn_edges: vec![SpawnEdge::Left],
        }
    }

    /// Variant that never keeps more than 10 lines and lets them wander
    /// slightly off the horizontal.
    pub fn capped() -> Self {
        Self {
            max_snakes: 10,
            max_drift: 0.25,
            spawn_edges: vec![SpawnEdge::Left, SpawnEdge::Right],
            ..Self::classic()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(BackdropError::InvalidSnakeConfig(msg));
        if self.max_snakes == 0 {
            return fail("max_snakes must be at least 1".into());
        }
        if self.min_snakes > self.max_snakes {
            return fail(format!(
                "min_snakes ({}) exceeds max_snakes ({})",
                self.min_snakes, self.max_snakes
            ));
        }
        if !(self.base_speed > 0.0) || self.speed_variation < 0.0 {
            return fail(format!(
                "speed range [{}, +{}) must be positive",
                self.base_speed, self.speed_variation
            ));
        }
        if self.base_length == 0 {
            return fail("base_length must be at least 1".into());
        }
        if self.spawn_inset > self.margin {
            return fail(format!(
                "spawn_inset ({}) lies outside the cull margin ({})",
                self.spawn_inset, self.margin
            ));
        }
        if self.spawn_edges.is_empty() {
            return fail("spawn_edges is empty".into());
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self::classic()
    }
}

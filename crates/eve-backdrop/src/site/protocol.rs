use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};

/// One phase of the development roadmap on the protocol page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub number: u32,
    pub title: String,
    /// Badge text such as "IN PROGRESS". Only the current phase carries one.
    #[serde(default)]
    pub status: Option<String>,
    pub description: String,
    #[serde(default)]
    pub milestones: Vec<String>,
}

impl RoadmapPhase {
    /// Zero-padded badge label ("01").
    pub fn label(&self) -> String {
        format!("{:02}", self.number)
    }

    /// The highlighted phase: the one with a status badge. It also gets the
    /// breathing scale.
    pub fn is_active(&self) -> bool {
        self.status.is_some()
    }
}

/// Dictionary-style card: a term with its pronunciation and definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolCard {
    /// Hyphenated headword, e.g. "en·ti·ty".
    pub term: String,
    #[serde(default)]
    pub phonetic: String,
    pub part_of_speech: String,
    pub definition: String,
}

/// Phases must be numbered in strictly increasing order.
pub(crate) fn validate_roadmap(phases: &[RoadmapPhase]) -> Result<()> {
    for pair in phases.windows(2) {
        if pair[1].number <= pair[0].number {
            return Err(BackdropError::InvalidManifest(format!(
                "roadmap phase {} follows phase {}",
                pair[1].number, pair[0].number
            )));
        }
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};

/// One tab of the documentation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// Tab strip state for the documentation page. Starts on the first section.
#[derive(Debug, Clone)]
pub struct DocTabs {
    ids: Vec<String>,
    active: usize,
}

impl DocTabs {
    pub fn new(sections: &[DocSection]) -> Self {
        Self {
            ids: sections.iter().map(|s| s.id.clone()).collect(),
            active: 0,
        }
    }

    /// Id of the active tab, `None` when there are no sections.
    pub fn active(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Switch tabs by id. The active tab is unchanged on error.
    pub fn select(&mut self, id: &str) -> Result<()> {
        let idx = self
            .ids
            .iter()
            .position(|s| s == id)
            .ok_or_else(|| BackdropError::UnknownDocTab(id.to_string()))?;
        self.active = idx;
        Ok(())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }
}

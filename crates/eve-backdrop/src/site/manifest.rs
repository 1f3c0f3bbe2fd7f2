use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::docs::DocSection;
use super::protocol::{validate_roadmap, ProtocolCard, RoadmapPhase};
use super::route::{Route, RouteSet};
use super::stats::StatsPanel;
use crate::error::{BackdropError, Result};

/// Site content: every piece of copy, link and mock number the page shows.
/// Loaded from a JSON file at runtime so text never lives in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteManifest {
    /// Routes this variant serves.
    #[serde(default = "default_routes")]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Documentation tabs, in display order. The first is the default tab.
    pub docs: Vec<DocSection>,
    pub stats: StatsPanel,
    #[serde(default)]
    pub onboarding: Vec<OnboardingStep>,
    #[serde(default)]
    pub features: Vec<FeatureCard>,
    /// Protocol page roadmap, in phase order.
    #[serde(default)]
    pub roadmap: Vec<RoadmapPhase>,
    #[serde(default)]
    pub protocol_cards: Vec<ProtocolCard>,
    /// Footer policy documents.
    #[serde(default)]
    pub policies: Vec<ExternalLink>,
    #[serde(default)]
    pub social: Vec<ExternalLink>,
    /// Third-party widgets the host injects; the engine never loads them.
    #[serde(default)]
    pub embeds: Vec<EmbedScript>,
}

/// In-app navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub route: Route,
}

/// Outbound link, always opened in a new browsing context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

impl ExternalLink {
    /// Window target the host should pass to `window.open`.
    pub const TARGET: &'static str = "_blank";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingStep {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
}

/// A script-injected widget (survey form, consent banner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedScript {
    pub name: String,
    pub src: String,
}

fn default_routes() -> Vec<Route> {
    Route::ALL.to_vec()
}

fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

impl SiteManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: SiteManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(BackdropError::InvalidManifest(msg));

        if self.docs.is_empty() {
            return fail("at least one documentation section is required".into());
        }
        let mut seen = HashSet::new();
        for section in &self.docs {
            if !seen.insert(section.id.as_str()) {
                return fail(format!("duplicate documentation id '{}'", section.id));
            }
        }

        let urls = self
            .policies
            .iter()
            .chain(&self.social)
            .map(|l| l.url.as_str())
            .chain(self.onboarding.iter().filter_map(|s| s.link.as_deref()))
            .chain(self.embeds.iter().map(|e| e.src.as_str()));
        for url in urls {
            if !is_web_url(url) {
                return fail(format!("'{}' is not an http(s) url", url));
            }
        }

        if let Some(day) = self.stats.daily_usage.iter().find(|d| !(d.hours >= 0.0)) {
            return fail(format!("negative usage hours on {}", day.day));
        }

        validate_roadmap(&self.roadmap)?;

        let routes = self.route_set();
        if let Some(link) = self.nav.iter().find(|l| !routes.contains(l.route)) {
            return fail(format!("nav link '{}' points at a disabled route", link.label));
        }
        Ok(())
    }

    pub fn route_set(&self) -> RouteSet {
        RouteSet::new(self.routes.iter().copied())
    }

    pub fn doc(&self, id: &str) -> Option<&DocSection> {
        self.docs.iter().find(|d| d.id == id)
    }

    /// The roadmap phase currently in progress.
    pub fn active_phase(&self) -> Option<&RoadmapPhase> {
        self.roadmap.iter().find(|p| p.is_active())
    }
}

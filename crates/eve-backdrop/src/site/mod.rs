//! Static site content: routes, documentation tabs, mock statistics, the
//! protocol roadmap and outbound links, loaded from a JSON manifest.

mod docs;
mod manifest;
mod protocol;
mod route;
mod stats;

pub use docs::{DocSection, DocTabs};
pub use manifest::{EmbedScript, ExternalLink, FeatureCard, NavLink, OnboardingStep, SiteManifest};
pub use protocol::{ProtocolCard, RoadmapPhase};
pub use route::{Route, RouteSet};
pub use stats::{Bar, DailyUsage, Metric, StatsPanel, Trend};

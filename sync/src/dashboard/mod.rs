//! Refresh orchestrator and owner of every dashboard component.
//!
//! A full refresh first replaces the entity cache, then re-renders the
//! dataset list, re-derives both forms' visibility gates and selector options,
//! and only then asks for relationships, thresholds and recommendations. The
//! gates and selectors read the cache, so this order is required for
//! correctness. Each list fetch fails on its own without stopping the others.

mod command;
mod messages;
mod update;

pub use command::{Command, Request};
pub use messages::Msg;

use common::model::capabilities::Capabilities;
use common::model::config::ClientConfig;

use crate::cache::EntityCache;
use crate::datasets::DatasetPanel;
use crate::notifier::{NoticeKind, NoticeScope, Notices};
use crate::recommendations::RecommendationViewer;
use crate::relationships::RelationshipManager;
use crate::thresholds::ThresholdManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Lifetime of a transient notice.
    pub notice_timeout_ms: u32,
    /// Used when `GET /capabilities` fails; empty means none.
    pub fallback_capabilities: Capabilities,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for Settings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            notice_timeout_ms: config.notice_timeout_ms,
            fallback_capabilities: config.fallback_capabilities.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    settings: Settings,
    cache: EntityCache,
    datasets: DatasetPanel,
    relationships: RelationshipManager,
    thresholds: ThresholdManager,
    recommendations: RecommendationViewer,
    notices: Notices,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Dashboard {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            cache: EntityCache::new(),
            datasets: DatasetPanel::default(),
            relationships: RelationshipManager::new(),
            thresholds: ThresholdManager::new(),
            recommendations: RecommendationViewer::default(),
            notices: Notices::default(),
        }
    }

    /// Initial load: threshold capabilities plus a full refresh.
    pub fn init(&mut self) -> Vec<Command> {
        let mut commands = vec![Command::Fetch(Request::Capabilities)];
        commands.extend(self.refresh());
        commands
    }

    /// Entry point after a successful upload.
    pub fn on_upload_success(&mut self) -> Vec<Command> {
        self.refresh()
    }

    /// Entry point whenever the set of tables changed.
    pub fn on_tables_changed(&mut self) -> Vec<Command> {
        self.refresh()
    }

    /// Step one of a full refresh. The remaining steps run when the dataset
    /// collection arrives (see `Msg::DatasetsLoaded`).
    fn refresh(&mut self) -> Vec<Command> {
        vec![Command::Fetch(Request::Datasets)]
    }

    fn notify(&mut self, scope: NoticeScope, kind: NoticeKind, text: impl Into<String>) -> Command {
        let generation = self.notices.scope_mut(scope).show(text, kind);
        Command::ExpireNotice {
            scope,
            generation,
            after_ms: self.settings.notice_timeout_ms,
        }
    }

    pub fn cache(&self) -> &EntityCache {
        &self.cache
    }

    pub fn datasets(&self) -> &DatasetPanel {
        &self.datasets
    }

    pub fn relationships(&self) -> &RelationshipManager {
        &self.relationships
    }

    pub fn thresholds(&self) -> &ThresholdManager {
        &self.thresholds
    }

    pub fn recommendations(&self) -> &RecommendationViewer {
        &self.recommendations
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }
}

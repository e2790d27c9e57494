//! Component state of the dashboard.

use std::rc::Rc;

use yew::prelude::*;

use common::model::config::ClientConfig;
use dashboard_sync::{Dashboard, Settings};

use crate::api::HttpBackend;

pub struct DashboardComponent {
    /// Synchronization core; the single source of truth for the view.
    pub dashboard: Dashboard,

    /// Shared with in-flight requests.
    pub backend: Rc<HttpBackend>,

    /// The `<input type="file" multiple>` holding the CSV files to upload.
    pub file_input_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        let config = ClientConfig::default();
        Self {
            dashboard: Dashboard::new(Settings::from(&config)),
            backend: Rc::new(HttpBackend::new(&config.api_base_url)),
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Rebuilds core and backend for the configuration served by the host.
    pub fn configure(&mut self, config: &ClientConfig) {
        self.dashboard = Dashboard::new(Settings::from(config));
        self.backend = Rc::new(HttpBackend::new(&config.api_base_url));
    }
}

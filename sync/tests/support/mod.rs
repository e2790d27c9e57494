#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use common::model::capabilities::Capabilities;
use common::model::dataset::{Dataset, DatasetId};
use common::model::preview::TablePreview;
use common::model::recommendation::Recommendation;
use common::model::relationship::Relationship;
use common::model::threshold::Threshold;
use common::requests::{CurrentValueQuery, NewRelationship, NewThreshold};
use common::responses::{ActionReply, CurrentValue};
use dashboard_sync::runtime::perform;
use dashboard_sync::{Backend, ClientError, Command, Dashboard, Msg, Settings};
use futures::executor::block_on;

pub fn dataset(id: i64, name: &str, headers: &[&str]) -> Dataset {
    Dataset {
        id: DatasetId(id),
        original_filename: name.to_string(),
        name: name.to_lowercase(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
    }
}

pub fn rejection(status: u16, message: &str) -> ClientError {
    ClientError::BackendRejection {
        status,
        message: Some(message.to_string()),
    }
}

pub fn offline() -> ClientError {
    ClientError::TransportFailure("connection refused".to_string())
}

/// In-memory backend that records every call it receives.
///
/// Successful creations are stored so that the next list call returns them,
/// the way the real backend behaves.
pub struct FakeBackend {
    pub calls: RefCell<Vec<&'static str>>,
    pub capabilities: RefCell<Result<Capabilities, ClientError>>,
    pub datasets: RefCell<Result<Vec<Dataset>, ClientError>>,
    pub preview: RefCell<Result<TablePreview, ClientError>>,
    pub relationships: RefCell<Result<Vec<Relationship>, ClientError>>,
    pub create_relationship: RefCell<Result<ActionReply, ClientError>>,
    pub thresholds: RefCell<Result<Vec<Threshold>, ClientError>>,
    pub create_threshold: RefCell<Result<ActionReply, ClientError>>,
    pub current_value: RefCell<Result<CurrentValue, ClientError>>,
    pub recommendations: RefCell<Result<Vec<Recommendation>, ClientError>>,
}

impl FakeBackend {
    pub fn with_datasets(datasets: Vec<Dataset>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            capabilities: RefCell::new(Ok(Capabilities {
                functions: ["avg", "max", "min", "sum", "count"].map(String::from).to_vec(),
                operators: [">", "<", "=", ">=", "<="].map(String::from).to_vec(),
            })),
            datasets: RefCell::new(Ok(datasets)),
            preview: RefCell::new(Err(rejection(404, "Table not found"))),
            relationships: RefCell::new(Ok(Vec::new())),
            create_relationship: RefCell::new(Ok(ActionReply {
                message: "Relationship created successfully!".to_string(),
                id: Some(1),
            })),
            thresholds: RefCell::new(Ok(Vec::new())),
            create_threshold: RefCell::new(Ok(ActionReply {
                message: "Threshold created successfully!".to_string(),
                id: Some(1),
            })),
            current_value: RefCell::new(Ok(CurrentValue { current_value: Some(0.0) })),
            recommendations: RefCell::new(Ok(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }

    fn table_name(&self, id: DatasetId) -> String {
        match &*self.datasets.borrow() {
            Ok(datasets) => datasets
                .iter()
                .find(|d| d.id == id)
                .map(|d| d.original_filename.clone())
                .unwrap_or_default(),
            Err(_) => String::new(),
        }
    }
}

impl Backend for FakeBackend {
    async fn capabilities(&self) -> Result<Capabilities, ClientError> {
        self.record("capabilities");
        self.capabilities.borrow().clone()
    }

    async fn list_datasets(&self) -> Result<Vec<Dataset>, ClientError> {
        self.record("datasets");
        self.datasets.borrow().clone()
    }

    async fn dataset_preview(&self, _id: DatasetId) -> Result<TablePreview, ClientError> {
        self.record("preview");
        self.preview.borrow().clone()
    }

    async fn list_relationships(&self) -> Result<Vec<Relationship>, ClientError> {
        self.record("relationships");
        self.relationships.borrow().clone()
    }

    async fn create_relationship(&self, request: &NewRelationship) -> Result<ActionReply, ClientError> {
        self.record("create_relationship");
        let reply = self.create_relationship.borrow().clone();
        if reply.is_ok() {
            let created = Relationship {
                id: None,
                source_table_name: self.table_name(request.source_table_id),
                source_column: request.source_column.clone(),
                target_table_name: self.table_name(request.target_table_id),
                target_column: request.target_column.clone(),
            };
            if let Ok(list) = &mut *self.relationships.borrow_mut() {
                list.push(created);
            }
        }
        reply
    }

    async fn list_thresholds(&self) -> Result<Vec<Threshold>, ClientError> {
        self.record("thresholds");
        self.thresholds.borrow().clone()
    }

    async fn create_threshold(&self, request: &NewThreshold) -> Result<ActionReply, ClientError> {
        self.record("create_threshold");
        let reply = self.create_threshold.borrow().clone();
        if reply.is_ok() {
            let created = Threshold {
                id: None,
                table_name: self.table_name(request.table_id),
                column_name: request.column_name.clone(),
                function: request.function.clone(),
                operator: request.operator.clone(),
                value: request.value,
            };
            if let Ok(list) = &mut *self.thresholds.borrow_mut() {
                list.push(created);
            }
        }
        reply
    }

    async fn current_value(&self, _query: &CurrentValueQuery) -> Result<CurrentValue, ClientError> {
        self.record("current_value");
        self.current_value.borrow().clone()
    }

    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, ClientError> {
        self.record("recommendations");
        self.recommendations.borrow().clone()
    }
}

/// Runs a `Dashboard` against a `FakeBackend` until no effect is left.
///
/// Backend requests are answered immediately, in the order they were issued.
/// Notice timers are collected instead of waited on.
pub struct Harness {
    pub dashboard: Dashboard,
    pub backend: FakeBackend,
    pub upload_result: Result<ActionReply, ClientError>,
    pub uploads: usize,
    pub expiries: Vec<Command>,
}

impl Harness {
    pub fn new(backend: FakeBackend) -> Self {
        Self::with_settings(
            backend,
            Settings {
                notice_timeout_ms: 5000,
                fallback_capabilities: Capabilities::default(),
            },
        )
    }

    pub fn with_settings(backend: FakeBackend, settings: Settings) -> Self {
        Self {
            dashboard: Dashboard::new(settings),
            backend,
            upload_result: Ok(ActionReply {
                message: "Files uploaded".to_string(),
                id: None,
            }),
            uploads: 0,
            expiries: Vec::new(),
        }
    }

    /// A harness that has already completed the initial load.
    pub fn started(backend: FakeBackend) -> Self {
        Self::new(backend).start()
    }

    /// Runs the initial load.
    pub fn start(mut self) -> Self {
        let commands = self.dashboard.init();
        self.run(commands);
        self
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let commands = self.dashboard.update(msg);
        self.run(commands);
    }

    pub fn run(&mut self, commands: Vec<Command>) {
        let mut queue: VecDeque<Command> = commands.into();
        while let Some(command) = queue.pop_front() {
            match command {
                Command::Fetch(request) => {
                    let msg = block_on(perform(&self.backend, request));
                    queue.extend(self.dashboard.update(msg));
                }
                Command::Upload => {
                    self.uploads += 1;
                    let msg = Msg::UploadFinished(self.upload_result.clone());
                    queue.extend(self.dashboard.update(msg));
                }
                expiry @ Command::ExpireNotice { .. } => self.expiries.push(expiry),
            }
        }
    }

    pub fn notice_text(&self, scope: dashboard_sync::notifier::NoticeScope) -> Option<String> {
        self.dashboard.notices().current(scope).map(|n| n.text.clone())
    }
}

//! The backend seen from the client: one async method per exchange.
//!
//! The browser build implements this over HTTP; tests substitute an
//! in-memory fake. Futures are not required to be `Send` since everything runs
//! on the single UI thread.

use common::model::capabilities::Capabilities;
use common::model::dataset::{Dataset, DatasetId};
use common::model::preview::TablePreview;
use common::model::recommendation::Recommendation;
use common::model::relationship::Relationship;
use common::model::threshold::Threshold;
use common::requests::{CurrentValueQuery, NewRelationship, NewThreshold};
use common::responses::{ActionReply, CurrentValue};

use crate::error::ClientError;

#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /capabilities`
    async fn capabilities(&self) -> Result<Capabilities, ClientError>;

    /// `GET /tables`
    async fn list_datasets(&self) -> Result<Vec<Dataset>, ClientError>;

    /// `GET /tables/{id}/data`
    async fn dataset_preview(&self, id: DatasetId) -> Result<TablePreview, ClientError>;

    /// `GET /relationships`
    async fn list_relationships(&self) -> Result<Vec<Relationship>, ClientError>;

    /// `POST /relationships`
    async fn create_relationship(&self, request: &NewRelationship) -> Result<ActionReply, ClientError>;

    /// `GET /thresholds`
    async fn list_thresholds(&self) -> Result<Vec<Threshold>, ClientError>;

    /// `POST /thresholds`
    async fn create_threshold(&self, request: &NewThreshold) -> Result<ActionReply, ClientError>;

    /// `GET /tables/{id}/columns/{column}/{function}/current_value`
    async fn current_value(&self, query: &CurrentValueQuery) -> Result<CurrentValue, ClientError>;

    /// `GET /recommendations`
    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, ClientError>;
}

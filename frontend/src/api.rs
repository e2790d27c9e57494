//! HTTP implementation of the dashboard `Backend` on top of `gloo-net`.
//!
//! Every exchange is classified the same way: a success status with a
//! decodable body is `Ok`, any other status is a `BackendRejection` carrying
//! the body's `error` field when there is one, and a network or decoding
//! failure is a `TransportFailure`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use common::model::capabilities::Capabilities;
use common::model::dataset::{Dataset, DatasetId};
use common::model::preview::TablePreview;
use common::model::recommendation::Recommendation;
use common::model::relationship::Relationship;
use common::model::threshold::Threshold;
use common::requests::{CurrentValueQuery, NewRelationship, NewThreshold};
use common::responses::{
    ActionReply, CurrentValue, ErrorReply, RecommendationsEnvelope, RelationshipsEnvelope, TablesEnvelope,
    ThresholdsEnvelope,
};
use dashboard_sync::{Backend, ClientError};

pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = Request::get(&self.url(path)).send().await.map_err(transport)?;
        decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// `POST /upload` with a multipart body of `files[]` parts.
    pub async fn upload(&self, form: FormData) -> Result<ActionReply, ClientError> {
        let response = Request::post(&self.url("/upload"))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}

impl Backend for HttpBackend {
    async fn capabilities(&self) -> Result<Capabilities, ClientError> {
        self.get("/capabilities").await
    }

    async fn list_datasets(&self) -> Result<Vec<Dataset>, ClientError> {
        let envelope: TablesEnvelope = self.get("/tables").await?;
        Ok(envelope.tables)
    }

    async fn dataset_preview(&self, id: DatasetId) -> Result<TablePreview, ClientError> {
        self.get(&format!("/tables/{id}/data")).await
    }

    async fn list_relationships(&self) -> Result<Vec<Relationship>, ClientError> {
        let envelope: RelationshipsEnvelope = self.get("/relationships").await?;
        Ok(envelope.relationships)
    }

    async fn create_relationship(&self, request: &NewRelationship) -> Result<ActionReply, ClientError> {
        self.post("/relationships", request).await
    }

    async fn list_thresholds(&self) -> Result<Vec<Threshold>, ClientError> {
        let envelope: ThresholdsEnvelope = self.get("/thresholds").await?;
        Ok(envelope.thresholds)
    }

    async fn create_threshold(&self, request: &NewThreshold) -> Result<ActionReply, ClientError> {
        self.post("/thresholds", request).await
    }

    async fn current_value(&self, query: &CurrentValueQuery) -> Result<CurrentValue, ClientError> {
        let column = String::from(js_sys::encode_uri_component(&query.column_name));
        let function = String::from(js_sys::encode_uri_component(&query.function));
        self.get(&format!(
            "/tables/{}/columns/{column}/{function}/current_value",
            query.table_id
        ))
        .await
    }

    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, ClientError> {
        let envelope: RecommendationsEnvelope = self.get("/recommendations").await?;
        Ok(envelope.recommendations)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if response.ok() {
        return response.json::<T>().await.map_err(transport);
    }
    let status = response.status();
    let message = response.json::<ErrorReply>().await.ok().map(|reply| reply.error);
    Err(ClientError::BackendRejection { status, message })
}

fn transport(err: gloo_net::Error) -> ClientError {
    gloo_console::error!(format!("backend exchange failed: {err}"));
    ClientError::TransportFailure(err.to_string())
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

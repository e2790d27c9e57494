//! Executes `Request` effects against a `Backend`.

use crate::backend::Backend;
use crate::dashboard::{Msg, Request};

/// Performs one backend exchange and wraps the outcome in the message the
/// dashboard expects back.
pub async fn perform<B: Backend>(backend: &B, request: Request) -> Msg {
    log::debug!("performing {}", request.describe());
    match request {
        Request::Capabilities => Msg::CapabilitiesLoaded(backend.capabilities().await),
        Request::Datasets => Msg::DatasetsLoaded(backend.list_datasets().await),
        Request::Preview(id) => Msg::PreviewLoaded {
            id,
            result: backend.dataset_preview(id).await,
        },
        Request::Relationships => Msg::RelationshipsLoaded(backend.list_relationships().await),
        Request::CreateRelationship(body) => {
            Msg::RelationshipCreated(backend.create_relationship(&body).await)
        }
        Request::Thresholds => Msg::ThresholdsLoaded(backend.list_thresholds().await),
        Request::CreateThreshold(body) => Msg::ThresholdCreated(backend.create_threshold(&body).await),
        Request::CurrentValue { token, query } => {
            let result = backend.current_value(&query).await;
            Msg::CurrentValueLoaded { token, query, result }
        }
        Request::Recommendations => {
            Msg::RecommendationsLoaded(backend.list_recommendations().await)
        }
    }
}

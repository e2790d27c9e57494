use common::model::capabilities::Capabilities;
use common::model::dataset::{Dataset, DatasetId};
use common::model::preview::TablePreview;
use common::model::recommendation::Recommendation;
use common::model::relationship::Relationship;
use common::model::threshold::Threshold;
use common::requests::CurrentValueQuery;
use common::responses::{ActionReply, CurrentValue};

use crate::error::ClientError;
use crate::notifier::NoticeScope;

/// Everything that can happen to the dashboard: user input on the forms and
/// the outcome of every backend exchange.
///
/// `String` payloads are raw `<select>`/`<input>` values; an empty string is
/// the placeholder.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Re-fetch all four collections. Sent after any change to the set of
    /// tables.
    Refresh,
    CapabilitiesLoaded(Result<Capabilities, ClientError>),
    DatasetsLoaded(Result<Vec<Dataset>, ClientError>),

    UploadRequested { file_count: usize },
    UploadFinished(Result<ActionReply, ClientError>),

    PreviewRequested(DatasetId),
    PreviewLoaded {
        id: DatasetId,
        result: Result<TablePreview, ClientError>,
    },
    PreviewClosed,

    RelationshipSourceDatasetChanged(String),
    RelationshipSourceColumnChanged(String),
    RelationshipTargetDatasetChanged(String),
    RelationshipTargetColumnChanged(String),
    RelationshipSubmitted,
    RelationshipCreated(Result<ActionReply, ClientError>),
    RelationshipsLoaded(Result<Vec<Relationship>, ClientError>),

    ThresholdDatasetChanged(String),
    ThresholdColumnChanged(String),
    ThresholdFunctionChanged(String),
    ThresholdOperatorChanged(String),
    ThresholdValueChanged(String),
    ThresholdSubmitted,
    ThresholdCreated(Result<ActionReply, ClientError>),
    ThresholdsLoaded(Result<Vec<Threshold>, ClientError>),
    CurrentValueLoaded {
        token: u64,
        query: CurrentValueQuery,
        result: Result<CurrentValue, ClientError>,
    },

    RecommendationsLoaded(Result<Vec<Recommendation>, ClientError>),

    NoticeExpired { scope: NoticeScope, generation: u64 },
}

use common::model::dataset::DatasetId;
use common::requests::{CurrentValueQuery, NewRelationship, NewThreshold};

use crate::notifier::NoticeScope;

/// An effect the shell must run on behalf of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A backend exchange; run it with [`crate::runtime::perform`].
    Fetch(Request),
    /// Upload the files currently picked in the upload control, then report
    /// `Msg::UploadFinished`.
    Upload,
    /// After `after_ms`, send `Msg::NoticeExpired { scope, generation }`.
    ExpireNotice {
        scope: NoticeScope,
        generation: u64,
        after_ms: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Capabilities,
    Datasets,
    Preview(DatasetId),
    Relationships,
    CreateRelationship(NewRelationship),
    Thresholds,
    CreateThreshold(NewThreshold),
    CurrentValue { token: u64, query: CurrentValueQuery },
    Recommendations,
}

impl Request {
    /// Short name for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Request::Capabilities => "capabilities",
            Request::Datasets => "datasets",
            Request::Preview(_) => "dataset preview",
            Request::Relationships => "relationships",
            Request::CreateRelationship(_) => "create relationship",
            Request::Thresholds => "thresholds",
            Request::CreateThreshold(_) => "create threshold",
            Request::CurrentValue { .. } => "current value",
            Request::Recommendations => "recommendations",
        }
    }
}

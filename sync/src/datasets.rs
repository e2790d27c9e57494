//! Dataset list and the per-dataset data preview pane.
//!
//! The list is derived from the entity cache; this module only adds the
//! rendering and the preview pane state.

use common::model::dataset::{Dataset, DatasetId};
use common::model::preview::TablePreview;

use crate::cache::EntityCache;
use crate::listing::Listing;

pub const LIST_FAILED: &str = "Failed to load tables. Please check backend connection.";
pub const EMPTY_LIST: &str = "No tables uploaded yet.";
pub const PREVIEW_FAILED: &str = "Failed to load table data.";
pub const PREVIEW_UNREACHABLE: &str = "Failed to connect to the server or retrieve table data.";
pub const PREVIEW_LOADING: &str = "Loading data...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCard {
    pub id: DatasetId,
    pub display_name: String,
    pub internal_name: String,
    pub columns: Vec<String>,
}

impl From<&Dataset> for DatasetCard {
    fn from(d: &Dataset) -> Self {
        Self {
            id: d.id,
            display_name: d.original_filename.clone(),
            internal_name: d.name.clone(),
            columns: d.headers.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewPane {
    #[default]
    Closed,
    Loading(DatasetId),
    Open(TablePreview),
}

impl PreviewPane {
    pub fn title(&self) -> String {
        match self {
            PreviewPane::Closed => String::new(),
            PreviewPane::Loading(_) => PREVIEW_LOADING.to_string(),
            PreviewPane::Open(preview) => format!("Data Preview: {}", preview.table_name),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DatasetPanel {
    listing: Listing<DatasetCard>,
    preview: PreviewPane,
}

impl DatasetPanel {
    /// Re-renders the list from the cache.
    pub fn sync_with_cache(&mut self, cache: &EntityCache) {
        self.listing = Listing::from_items(cache.datasets().iter().map(DatasetCard::from).collect());
    }

    pub fn listing(&self) -> &Listing<DatasetCard> {
        &self.listing
    }

    pub fn preview(&self) -> &PreviewPane {
        &self.preview
    }

    pub fn open_preview(&mut self, id: DatasetId) {
        self.preview = PreviewPane::Loading(id);
    }

    /// Shows a loaded preview if it is still the one waited for.
    pub fn apply_preview(&mut self, id: DatasetId, preview: TablePreview) -> bool {
        if self.preview != PreviewPane::Loading(id) {
            return false;
        }
        self.preview = PreviewPane::Open(preview);
        true
    }

    pub fn close_preview(&mut self) {
        self.preview = PreviewPane::Closed;
    }
}

pub const UPLOAD_DONE: &str = "Files uploaded successfully.";
pub const UPLOAD_FAILED: &str = "An unknown error occurred during upload.";
pub const UPLOAD_UNREACHABLE: &str = "Failed to connect to the server for upload. Is the backend running?";

//! Threshold manager: the threshold form, its live current-value preview and
//! the list of active thresholds.
//!
//! The preview follows two selector axes (column and aggregate function).
//! Every preview request carries a token from a monotonically increasing
//! counter; clearing the preview also advances the counter. A response is
//! applied only if its token is still the latest, so overlapping requests can
//! not overwrite a newer selection.

use common::model::capabilities::Capabilities;
use common::model::dataset::DatasetId;
use common::model::threshold::Threshold;
use common::requests::{CurrentValueQuery, NewThreshold};
use common::responses::CurrentValue;

use crate::cache::EntityCache;
use crate::error::{ClientError, ValidationError};
use crate::format;
use crate::listing::Listing;
use crate::selector::DependentSelector;

pub const ADDED: &str = "Threshold created successfully!";
pub const ADD_FAILED: &str = "Failed to add threshold.";
pub const ADD_UNREACHABLE: &str = "Failed to connect to the server. Could not add threshold.";
pub const LIST_FAILED: &str = "Failed to load thresholds. Please check backend connection.";
pub const CAPABILITIES_FAILED: &str = "Failed to load threshold options. Please check backend connection.";
pub const EMPTY_LIST: &str = "No active thresholds.";
pub const NO_DATASETS: &str = "Upload a table to define thresholds.";

pub const PREVIEW_CALCULATING: &str = "Calculating...";
pub const PREVIEW_FAILED: &str = "Failed to get current value.";
pub const PREVIEW_UNREACHABLE: &str = "Error fetching value.";

/// State of the current-value display.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LivePreview {
    #[default]
    Idle,
    Calculating,
    Value(String),
    Error(String),
}

impl LivePreview {
    pub fn text(&self) -> &str {
        match self {
            LivePreview::Idle => "",
            LivePreview::Calculating => PREVIEW_CALCULATING,
            LivePreview::Value(text) | LivePreview::Error(text) => text,
        }
    }

    /// Whether the display uses the error style.
    pub fn is_error(&self) -> bool {
        matches!(self, LivePreview::Error(_))
    }
}

/// Raw field values of a threshold submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdDraft {
    pub dataset: Option<DatasetId>,
    pub column: Option<String>,
    pub function: Option<String>,
    pub operator: Option<String>,
    pub value: String,
}

impl ThresholdDraft {
    /// Checks the draft without touching the network. The value must parse
    /// as a finite number.
    pub fn validate(&self) -> Result<NewThreshold, ValidationError> {
        let filled = |field: &Option<String>| field.as_deref().map(str::trim).filter(|f| !f.is_empty()).map(str::to_string);
        let value = self.value.trim();
        let (Some(table_id), Some(column_name), Some(function), Some(operator)) = (
            self.dataset,
            filled(&self.column),
            filled(&self.function),
            filled(&self.operator),
        ) else {
            return Err(ValidationError::IncompleteThreshold);
        };
        if value.is_empty() {
            return Err(ValidationError::IncompleteThreshold);
        }

        let value = value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::NonNumericThreshold)?;

        Ok(NewThreshold {
            table_id,
            column_name,
            function,
            operator,
            value,
        })
    }
}

/// One rendered threshold: `<function>(<table>.<column>) <operator> <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdRow {
    pub label: String,
}

impl From<&Threshold> for ThresholdRow {
    fn from(t: &Threshold) -> Self {
        Self {
            label: format!(
                "{}({}.{}) {} {}",
                t.function,
                t.table_name,
                t.column_name,
                t.operator,
                format::number(t.value)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThresholdManager {
    selector: DependentSelector,
    function: Option<String>,
    operator: Option<String>,
    value: String,
    capabilities: Capabilities,
    form_visible: bool,
    preview: LivePreview,
    latest_token: u64,
    listing: Listing<ThresholdRow>,
}

impl Default for ThresholdManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThresholdManager {
    pub fn new() -> Self {
        Self {
            selector: DependentSelector::new("Select Table", "Select Column"),
            function: None,
            operator: None,
            value: String::new(),
            capabilities: Capabilities::default(),
            form_visible: false,
            preview: LivePreview::Idle,
            latest_token: 0,
            listing: Listing::Pending,
        }
    }

    /// Re-evaluates the visibility gate, repopulates the dataset control and
    /// resets the whole form. Must run after every cache refresh.
    pub fn sync_with_cache(&mut self, cache: &EntityCache) {
        self.form_visible = cache.count() >= 1;
        self.selector.rebuild(cache);
        self.reset_form();
    }

    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
        if let Some(f) = &self.function {
            if !self.capabilities.functions.contains(f) {
                self.function = None;
            }
        }
        if let Some(op) = &self.operator {
            if !self.capabilities.operators.contains(op) {
                self.operator = None;
            }
        }
    }

    /// A new dataset invalidates the column, function and value chosen for
    /// the previous one, and the preview with them.
    pub fn on_dataset_change(&mut self, cache: &EntityCache, raw: &str) {
        self.selector.on_dataset_change(cache, raw);
        self.function = None;
        self.value.clear();
        self.clear_preview();
    }

    pub fn on_column_change(&mut self, raw: &str) -> Option<(u64, CurrentValueQuery)> {
        self.selector.on_column_change(raw);
        self.on_selection_change()
    }

    pub fn on_function_change(&mut self, raw: &str) -> Option<(u64, CurrentValueQuery)> {
        self.function = self
            .capabilities
            .functions
            .iter()
            .find(|f| f.as_str() == raw)
            .cloned();
        self.on_selection_change()
    }

    pub fn on_operator_change(&mut self, raw: &str) {
        self.operator = self
            .capabilities
            .operators
            .iter()
            .find(|op| op.as_str() == raw)
            .cloned();
    }

    pub fn on_value_change(&mut self, raw: &str) {
        self.value = raw.to_string();
    }

    /// Recomputes the preview after the column or function changed.
    ///
    /// With dataset, column and function all chosen the preview switches to
    /// `Calculating...` and the query to issue is returned with its token.
    /// Otherwise the preview clears and nothing is issued.
    pub fn on_selection_change(&mut self) -> Option<(u64, CurrentValueQuery)> {
        let query = match (self.selector.selection(), self.function.as_deref()) {
            (Some((table_id, column)), Some(function)) => CurrentValueQuery {
                table_id,
                column_name: column.to_string(),
                function: function.to_string(),
            },
            _ => {
                self.clear_preview();
                return None;
            }
        };
        self.latest_token += 1;
        self.preview = LivePreview::Calculating;
        Some((self.latest_token, query))
    }

    /// Applies a current-value response. Stale tokens are dropped and `false`
    /// is returned.
    pub fn apply_current_value(
        &mut self,
        token: u64,
        query: &CurrentValueQuery,
        result: Result<CurrentValue, ClientError>,
    ) -> bool {
        if token != self.latest_token {
            log::warn!(
                "discarding stale preview response {token} (latest {})",
                self.latest_token
            );
            return false;
        }
        self.preview = match result {
            Ok(value) => LivePreview::Value(format!(
                "Current {}({}) = {}",
                query.function,
                query.column_name,
                format::optional_number(value.current_value)
            )),
            Err(err) if err.is_transport() => LivePreview::Error(PREVIEW_UNREACHABLE.to_string()),
            Err(err) => LivePreview::Error(format!(
                "Error: {}",
                err.user_message(PREVIEW_FAILED, PREVIEW_UNREACHABLE)
            )),
        };
        true
    }

    fn clear_preview(&mut self) {
        self.latest_token += 1;
        self.preview = LivePreview::Idle;
    }

    pub fn draft(&self) -> ThresholdDraft {
        ThresholdDraft {
            dataset: self.selector.dataset(),
            column: self.selector.column().map(str::to_string),
            function: self.function.clone(),
            operator: self.operator.clone(),
            value: self.value.clone(),
        }
    }

    /// Every field back to its placeholder, preview included.
    pub fn reset_form(&mut self) {
        self.selector.reset();
        self.function = None;
        self.operator = None;
        self.value.clear();
        self.clear_preview();
    }

    pub fn apply_list(&mut self, thresholds: &[Threshold]) {
        self.listing = Listing::from_items(thresholds.iter().map(ThresholdRow::from).collect());
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn selector(&self) -> &DependentSelector {
        &self.selector
    }

    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn preview(&self) -> &LivePreview {
        &self.preview
    }

    pub fn listing(&self) -> &Listing<ThresholdRow> {
        &self.listing
    }
}

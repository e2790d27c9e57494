//! Dependent selector controller: a dataset `<select>` driving a column
//! `<select>`.
//!
//! One instance per pair of controls. The relationship form owns two (source
//! and target) and the threshold form one; they never share state.

use common::model::dataset::DatasetId;

use crate::cache::EntityCache;

/// One option of a `<select>` control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentSelector {
    dataset_placeholder: &'static str,
    column_placeholder: &'static str,
    dataset_options: Vec<SelectOption>,
    dataset: Option<DatasetId>,
    columns: Vec<String>,
    column: Option<String>,
}

impl DependentSelector {
    pub fn new(dataset_placeholder: &'static str, column_placeholder: &'static str) -> Self {
        Self {
            dataset_placeholder,
            column_placeholder,
            dataset_options: Vec::new(),
            dataset: None,
            columns: Vec::new(),
            column: None,
        }
    }

    /// Re-derives the dataset options from the cache and clears both choices.
    pub fn rebuild(&mut self, cache: &EntityCache) {
        self.dataset_options = cache
            .datasets()
            .iter()
            .map(|d| SelectOption {
                value: d.id.to_string(),
                label: d.original_filename.clone(),
            })
            .collect();
        self.reset();
    }

    /// Handles a change of the dataset control.
    ///
    /// The column choice is always dropped. If `raw` resolves to a cached
    /// dataset the column options become its headers in order, otherwise only
    /// the placeholder remains.
    pub fn on_dataset_change(&mut self, cache: &EntityCache, raw: &str) {
        self.column = None;
        self.columns.clear();
        match cache.resolve_raw(raw) {
            Some(dataset) => {
                self.dataset = Some(dataset.id);
                self.columns = dataset.headers.clone();
            }
            None => self.dataset = None,
        }
    }

    /// Handles a change of the column control. Values that are not among the
    /// current options clear the choice.
    pub fn on_column_change(&mut self, raw: &str) {
        self.column = self.columns.iter().find(|c| c.as_str() == raw).cloned();
    }

    /// Back to placeholders on both controls. Dataset options are kept.
    pub fn reset(&mut self) {
        self.dataset = None;
        self.columns.clear();
        self.column = None;
    }

    pub fn dataset(&self) -> Option<DatasetId> {
        self.dataset
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Both levels chosen.
    pub fn selection(&self) -> Option<(DatasetId, &str)> {
        Some((self.dataset?, self.column.as_deref()?))
    }

    pub fn dataset_options(&self) -> &[SelectOption] {
        &self.dataset_options
    }

    /// Column options without the placeholder.
    pub fn column_options(&self) -> &[String] {
        &self.columns
    }

    pub fn dataset_placeholder(&self) -> &'static str {
        self.dataset_placeholder
    }

    pub fn column_placeholder(&self) -> &'static str {
        self.column_placeholder
    }

    /// `<select>` value of the dataset control; empty for the placeholder.
    pub fn dataset_value(&self) -> String {
        self.dataset.map(|id| id.to_string()).unwrap_or_default()
    }

    /// `<select>` value of the column control; empty for the placeholder.
    pub fn column_value(&self) -> String {
        self.column.clone().unwrap_or_default()
    }
}

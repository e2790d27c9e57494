//! Relationship manager: the two-selector form that links a column of one
//! dataset to a column of another, and the read-only list of links.

use common::model::dataset::DatasetId;
use common::model::relationship::Relationship;
use common::requests::NewRelationship;

use crate::cache::EntityCache;
use crate::error::ValidationError;
use crate::listing::Listing;
use crate::selector::{DependentSelector, SelectOption};

pub const ADDED: &str = "Relationship created successfully!";
pub const ADD_FAILED: &str = "Failed to add relationship.";
pub const ADD_UNREACHABLE: &str = "Failed to connect to the server. Could not add relationship.";
pub const LIST_FAILED: &str = "Failed to load relationships. Please check backend connection.";
pub const EMPTY_LIST: &str = "No relationships defined yet.";
pub const NOT_ENOUGH_DATASETS: &str = "Upload at least two tables to define relationships.";

/// Datasets needed before a relationship can be declared.
pub const MIN_DATASETS: usize = 2;

/// The four fields of a relationship submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipDraft {
    pub source_dataset: Option<DatasetId>,
    pub source_column: Option<String>,
    pub target_dataset: Option<DatasetId>,
    pub target_column: Option<String>,
}

impl RelationshipDraft {
    /// Checks the draft without touching the network.
    ///
    /// Every field must be set and the two (dataset, column) endpoints must
    /// differ.
    pub fn validate(&self) -> Result<NewRelationship, ValidationError> {
        let filled = |column: &Option<String>| column.as_deref().filter(|c| !c.trim().is_empty()).map(str::to_string);
        let (Some(source_table_id), Some(source_column), Some(target_table_id), Some(target_column)) = (
            self.source_dataset,
            filled(&self.source_column),
            self.target_dataset,
            filled(&self.target_column),
        ) else {
            return Err(ValidationError::IncompleteRelationship);
        };

        if source_table_id == target_table_id && source_column == target_column {
            return Err(ValidationError::IdenticalRelationship);
        }

        Ok(NewRelationship {
            source_table_id,
            source_column,
            target_table_id,
            target_column,
        })
    }
}

/// One rendered relationship: `<table>.<column>` on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRow {
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
}

impl RelationshipRow {
    pub fn source_label(&self) -> String {
        format!("{}.{}", self.source_table, self.source_column)
    }

    pub fn target_label(&self) -> String {
        format!("{}.{}", self.target_table, self.target_column)
    }
}

impl From<&Relationship> for RelationshipRow {
    fn from(rel: &Relationship) -> Self {
        Self {
            source_table: rel.source_table_name.clone(),
            source_column: rel.source_column.clone(),
            target_table: rel.target_table_name.clone(),
            target_column: rel.target_column.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelationshipManager {
    source: DependentSelector,
    target: DependentSelector,
    form_visible: bool,
    listing: Listing<RelationshipRow>,
}

impl Default for RelationshipManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationshipManager {
    pub fn new() -> Self {
        Self {
            source: DependentSelector::new("Select Source Table", "Select Source Column"),
            target: DependentSelector::new("Select Target Table", "Select Target Column"),
            form_visible: false,
            listing: Listing::Pending,
        }
    }

    /// Re-evaluates the visibility gate and repopulates both dataset
    /// controls. Must run after every cache refresh.
    pub fn sync_with_cache(&mut self, cache: &EntityCache) {
        self.form_visible = cache.count() >= MIN_DATASETS;
        self.source.rebuild(cache);
        self.target.rebuild(cache);
    }

    /// Dataset options offered by the form, or `None` while the form is
    /// hidden behind the empty-state message.
    pub fn list_available_datasets(&self) -> Option<&[SelectOption]> {
        self.form_visible.then(|| self.source.dataset_options())
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn source(&self) -> &DependentSelector {
        &self.source
    }

    pub fn target(&self) -> &DependentSelector {
        &self.target
    }

    pub fn source_mut(&mut self) -> &mut DependentSelector {
        &mut self.source
    }

    pub fn target_mut(&mut self) -> &mut DependentSelector {
        &mut self.target
    }

    pub fn draft(&self) -> RelationshipDraft {
        RelationshipDraft {
            source_dataset: self.source.dataset(),
            source_column: self.source.column().map(str::to_string),
            target_dataset: self.target.dataset(),
            target_column: self.target.column().map(str::to_string),
        }
    }

    /// Clears all four controls back to their placeholders.
    pub fn reset_form(&mut self) {
        self.source.reset();
        self.target.reset();
    }

    pub fn apply_list(&mut self, relationships: &[Relationship]) {
        self.listing = Listing::from_items(relationships.iter().map(RelationshipRow::from).collect());
    }

    pub fn listing(&self) -> &Listing<RelationshipRow> {
        &self.listing
    }
}

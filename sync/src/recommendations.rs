//! Recommendation viewer. Read-only: recommendations are created by the
//! backend when a threshold is breached and only ever listed here.

use common::model::recommendation::Recommendation;

use crate::format;
use crate::listing::Listing;

pub const LIST_FAILED: &str = "Failed to load recommendations. Please check backend connection.";
pub const EMPTY_LIST: &str = "No recommendations yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    /// `Recommendation for <fn>(<table>.<column>)`
    pub heading: String,
    pub text: String,
    /// `<fn>(<column>) <operator> <threshold>`
    pub condition: String,
    pub current_value: String,
    pub generated_at: String,
}

impl From<&Recommendation> for RecommendationCard {
    fn from(rec: &Recommendation) -> Self {
        Self {
            heading: format!(
                "Recommendation for {}({}.{})",
                rec.function_name, rec.table_name, rec.column_name
            ),
            text: rec.recommendation_text.clone(),
            condition: format!(
                "{}({}) {} {}",
                rec.function_name,
                rec.column_name,
                rec.threshold_operator.as_deref().unwrap_or(format::MISSING),
                format::optional_number(rec.threshold_value)
            ),
            current_value: format::optional_number(rec.current_value),
            generated_at: format::timestamp(&rec.timestamp),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationViewer {
    listing: Listing<RecommendationCard>,
}

impl RecommendationViewer {
    pub fn apply_list(&mut self, recommendations: &[Recommendation]) {
        self.listing = Listing::from_items(recommendations.iter().map(RecommendationCard::from).collect());
    }

    pub fn listing(&self) -> &Listing<RecommendationCard> {
        &self.listing
    }
}

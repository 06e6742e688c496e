//! CategoryStatistic - the per-category aggregate shown on the dashboard

use serde::{Deserialize, Serialize};

/// Aggregate figures for one category.
///
/// Built once by [`crate::aggregate_category`] and never mutated; a new run
/// replaces the whole sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatistic {
    pub name: String,
    /// Mean base experience over the sampled entries; 0 when nothing was sampled
    pub average_base_experience: f64,
    /// Number of distinct ability names across the sampled entries
    pub unique_ability_count: usize,
}

impl CategoryStatistic {
    pub fn new(
        name: impl Into<String>,
        average_base_experience: f64,
        unique_ability_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            average_base_experience,
            unique_ability_count,
        }
    }

    /// Average formatted the way tables display it (two decimals).
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average_base_experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let stat = CategoryStatistic {
            name: "grass".to_string(),
            average_base_experience: 70.0,
            unique_ability_count: 3,
        };
        let json = serde_json::to_value(&stat).unwrap();
        assert_eq!(json["averageBaseExperience"], 70.0);
        assert_eq!(json["uniqueAbilityCount"], 3);
    }

    #[test]
    fn average_display_uses_two_decimals() {
        let stat = CategoryStatistic {
            name: "fire".to_string(),
            average_base_experience: 142.0 / 3.0,
            unique_ability_count: 0,
        };
        assert_eq!(stat.average_display(), "47.33");
    }
}

//! Category aggregation.
//!
//! Reduces the sampled detail records of one category to a
//! [`CategoryStatistic`]. The reduction is a multiset fold: input order never
//! changes the result.

use std::collections::HashSet;

use crate::entities::{CategoryStatistic, EntryDetail};

/// Number of member entries sampled per category when computing statistics.
///
/// Bounds the detail fan-out per category. Figures are therefore
/// representative of the first members only, not of the full category.
pub const STATS_SAMPLE_SIZE: usize = 10;

/// Reduce a category's sampled entries to its statistic.
///
/// The average is the arithmetic mean of `base_experience` and is `0.0` for an
/// empty sample. The unique ability count is the number of distinct ability
/// names (exact, case-sensitive match) across every sampled entry.
pub fn aggregate_category(name: impl Into<String>, details: &[EntryDetail]) -> CategoryStatistic {
    let total: u64 = details.iter().map(|d| u64::from(d.base_experience)).sum();
    let average_base_experience = if details.is_empty() {
        0.0
    } else {
        total as f64 / details.len() as f64
    };

    let unique_ability_count = details
        .iter()
        .flat_map(|d| d.ability_names())
        .collect::<HashSet<&str>>()
        .len();

    CategoryStatistic {
        name: name.into(),
        average_base_experience,
        unique_ability_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, base: u32, abilities: &[&str]) -> EntryDetail {
        EntryDetail::new(name, base).with_abilities(abilities.iter().copied())
    }

    #[test]
    fn grass_and_water_example() {
        let grass = aggregate_category(
            "grass",
            &[entry("a", 60, &["a", "b"]), entry("b", 80, &["b", "c"])],
        );
        let water = aggregate_category("water", &[entry("c", 50, &["d"])]);

        assert_eq!(grass.name, "grass");
        assert_eq!(grass.average_base_experience, 70.0);
        assert_eq!(grass.unique_ability_count, 3);
        assert_eq!(water.name, "water");
        assert_eq!(water.average_base_experience, 50.0);
        assert_eq!(water.unique_ability_count, 1);
    }

    #[test]
    fn empty_sample_yields_zeroes() {
        let stat = aggregate_category("shadow", &[]);
        assert_eq!(stat.average_base_experience, 0.0);
        assert!(!stat.average_base_experience.is_nan());
        assert_eq!(stat.unique_ability_count, 0);
    }

    #[test]
    fn result_is_independent_of_input_order() {
        let entries = vec![
            entry("a", 64, &["overgrow", "chlorophyll"]),
            entry("b", 142, &["overgrow"]),
            entry("c", 263, &["thick-fat", "overgrow"]),
            entry("d", 1, &[]),
        ];
        let expected = aggregate_category("grass", &entries);

        let mut reversed = entries.clone();
        reversed.reverse();
        let mut rotated = entries.clone();
        rotated.rotate_left(2);
        let mut swapped = entries.clone();
        swapped.swap(0, 3);

        for permutation in [reversed, rotated, swapped] {
            assert_eq!(aggregate_category("grass", &permutation), expected);
        }
        assert_eq!(expected.average_base_experience, 470.0 / 4.0);
    }

    #[test]
    fn duplicating_an_ability_list_keeps_the_count() {
        let base = vec![entry("a", 60, &["a", "b"]), entry("b", 80, &["b", "c"])];
        let mut duplicated = base.clone();
        let extra = duplicated[0].abilities.clone();
        duplicated[0].abilities.extend(extra);

        assert_eq!(
            aggregate_category("grass", &duplicated).unique_ability_count,
            aggregate_category("grass", &base).unique_ability_count
        );
    }

    #[test]
    fn ability_names_are_case_sensitive() {
        let stat = aggregate_category("normal", &[entry("a", 10, &["Run-Away", "run-away"])]);
        assert_eq!(stat.unique_ability_count, 2);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let entries = vec![entry("a", u32::MAX, &[]), entry("b", u32::MAX, &[])];
        let stat = aggregate_category("legendary", &entries);
        assert_eq!(stat.average_base_experience, f64::from(u32::MAX));
    }
}

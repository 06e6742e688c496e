//! Display formatting shared by cards and the detail page.

use pokedex_domain::EntryDetail;

/// Height in metres, e.g. `0.7 m`.
pub fn height_label(detail: &EntryDetail) -> String {
    format!("{} m", detail.height_m())
}

/// Weight in kilograms, e.g. `6.9 kg`.
pub fn weight_label(detail: &EntryDetail) -> String {
    format!("{} kg", detail.weight_kg())
}

/// Ability names joined with commas, in remote order.
pub fn ability_list(detail: &EntryDetail) -> String {
    detail.ability_names().collect::<Vec<_>>().join(", ")
}

//! Statistics table card.

use dioxus::prelude::*;
use pokedex_domain::CategoryStatistic;
use pokedex_engine::report::{StatsTable, TABLE_HEADERS};

use super::common::Card;

#[component]
pub fn StatsTableCard(statistics: Vec<CategoryStatistic>) -> Element {
    let table = StatsTable::from_statistics(&statistics);

    rsx! {
        Card {
            title: "Detailed Statistics Table".to_string(),
            table {
                class: "table w-full",
                thead {
                    tr {
                        for header in TABLE_HEADERS {
                            th { key: "{header}", "{header}" }
                        }
                    }
                }
                tbody {
                    for row in table.rows {
                        tr {
                            key: "{row.name}",
                            td { class: "font-medium", "{row.name}" }
                            td { "{row.average}" }
                            td { "{row.unique_abilities}" }
                        }
                    }
                }
            }
        }
    }
}

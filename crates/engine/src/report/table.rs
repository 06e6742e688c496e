//! Tabular rendering of the category statistics.

use pokedex_domain::CategoryStatistic;

pub const TABLE_HEADERS: [&str; 3] = ["Type", "Average Base Experience", "Unique Abilities"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRow {
    pub name: String,
    /// Average base experience, two decimals
    pub average: String,
    pub unique_abilities: String,
}

/// Display rows in statistics order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsTable {
    pub rows: Vec<StatsRow>,
}

impl StatsTable {
    pub fn from_statistics(statistics: &[CategoryStatistic]) -> Self {
        let rows = statistics
            .iter()
            .map(|s| StatsRow {
                name: s.name.clone(),
                average: s.average_display(),
                unique_abilities: s.unique_ability_count.to_string(),
            })
            .collect();
        Self { rows }
    }

    pub fn headers(&self) -> [&'static str; 3] {
        TABLE_HEADERS
    }

    /// Plain-text table with left-aligned, padded columns.
    pub fn render_text(&self) -> String {
        let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_line(&TABLE_HEADERS, &widths));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &self.rows {
            lines.push(format_line(&row.cells(), &widths));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl StatsRow {
    fn cells(&self) -> [&str; 3] {
        [&self.name, &self.average, &self.unique_abilities]
    }
}

fn format_line(cells: &[&str; 3], widths: &[usize; 3]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_order_and_format_average() {
        let table = StatsTable::from_statistics(&[
            CategoryStatistic::new("grass", 70.0, 3),
            CategoryStatistic::new("water", 142.0 / 3.0, 1),
        ]);

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].name, "grass");
        assert_eq!(table.rows[0].average, "70.00");
        assert_eq!(table.rows[1].average, "47.33");
        assert_eq!(table.rows[1].unique_abilities, "1");
    }

    #[test]
    fn text_rendering_has_header_and_rows() {
        let table = StatsTable::from_statistics(&[CategoryStatistic::new("fire", 80.5, 4)]);
        let text = table.render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Type | Average Base Experience | Unique Abilities"));
        assert!(lines[1].starts_with("----"));
        assert_eq!(lines[2], "fire | 80.50                   | 4");
    }

    #[test]
    fn empty_table_renders_header_only() {
        let text = StatsTable::default().render_text();
        assert_eq!(text.lines().count(), 2);
    }
}

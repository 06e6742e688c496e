//! Grouped bar chart projection.
//!
//! [`ChartModel::project`] turns the ordered statistics into plain geometry:
//! one band per category (input order, never sorted), two half-width bars per
//! band, a shared linear value axis from 0 to the largest value of either
//! series. The model is rebuilt from scratch for every statistics sequence;
//! renderers draw it without keeping any state of their own.

use std::fmt::Write;

use pokedex_domain::CategoryStatistic;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer chart size, margins and band padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    /// Fraction of each band step left empty, inside and at both ends
    pub band_padding: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margins: Margins {
                top: 20.0,
                right: 30.0,
                bottom: 40.0,
                left: 60.0,
            },
            band_padding: 0.1,
        }
    }
}

impl ChartLayout {
    /// Width of the plot area.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    /// Height of the plot area.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }
}

/// The two value series, drawn left then right inside each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    AverageBaseExperience,
    UniqueAbilities,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::AverageBaseExperience, Series::UniqueAbilities];

    pub fn label(self) -> &'static str {
        match self {
            Series::AverageBaseExperience => "Average Base Experience",
            Series::UniqueAbilities => "Unique Abilities",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Series::AverageBaseExperience => "rgba(255, 99, 132, 0.5)",
            Series::UniqueAbilities => "rgba(53, 162, 235, 0.5)",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Series::AverageBaseExperience => "bar-experience",
            Series::UniqueAbilities => "bar-abilities",
        }
    }

    fn value(self, statistic: &CategoryStatistic) -> f64 {
        match self {
            Series::AverageBaseExperience => statistic.average_base_experience,
            Series::UniqueAbilities => statistic.unique_ability_count as f64,
        }
    }
}

/// One bar in plot-area coordinates (origin top-left of the plot area).
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    pub series: Series,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A value-axis tick; `y` is its vertical position in the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// A category-axis label centred under its band.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub name: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub layout: ChartLayout,
    /// Top of the value axis; 0 when there is nothing to draw
    pub max_value: f64,
    pub band_width: f64,
    pub bars: Vec<Bar>,
    pub value_ticks: Vec<AxisTick>,
    pub category_labels: Vec<CategoryLabel>,
    pub legend: [Series; 2],
}

const TICK_COUNT: usize = 10;

impl ChartModel {
    pub fn project(statistics: &[CategoryStatistic], layout: &ChartLayout) -> Self {
        let plot_height = layout.inner_height();
        let band = BandScale::new(statistics.len(), layout.inner_width(), layout.band_padding);

        let max_value = statistics
            .iter()
            .flat_map(|s| Series::ALL.map(|series| series.value(s)))
            .fold(0.0_f64, f64::max);

        let value_to_y = |value: f64| {
            if max_value > 0.0 {
                plot_height - (value / max_value) * plot_height
            } else {
                plot_height
            }
        };

        let half = band.bandwidth / 2.0;
        let bars = statistics
            .iter()
            .enumerate()
            .flat_map(|(index, statistic)| {
                let start = band.position(index);
                Series::ALL
                    .into_iter()
                    .enumerate()
                    .map(move |(slot, series)| (start + half * slot as f64, statistic, series))
            })
            .map(|(x, statistic, series)| {
                let value = series.value(statistic);
                let y = value_to_y(value);
                Bar {
                    category: statistic.name.clone(),
                    series,
                    value,
                    x,
                    y,
                    width: half,
                    height: plot_height - y,
                }
            })
            .collect();

        let value_ticks = ticks(max_value, TICK_COUNT)
            .into_iter()
            .map(|(value, label)| AxisTick {
                value,
                y: value_to_y(value),
                label,
            })
            .collect();

        let category_labels = statistics
            .iter()
            .enumerate()
            .map(|(index, statistic)| CategoryLabel {
                name: statistic.name.clone(),
                x: band.position(index) + half,
            })
            .collect();

        Self {
            layout: *layout,
            max_value,
            band_width: band.bandwidth,
            bars,
            value_ticks,
            category_labels,
            legend: Series::ALL,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Evenly spaced bands with equal inner and outer padding, centred in the range.
struct BandScale {
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    fn new(count: usize, range: f64, padding: f64) -> Self {
        let n = count as f64;
        let step = range / (n - padding + 2.0 * padding).max(1.0);
        let start = (range - step * (n - padding)) / 2.0;
        Self {
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }
}

/// Tick values at a 1/2/5 x 10^k step covering `[0, max]`, with labels.
fn ticks(max: f64, count: usize) -> Vec<(f64, String)> {
    if max <= 0.0 || !max.is_finite() {
        return vec![(0.0, "0".to_string())];
    }

    let step = tick_step(max, count);
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10() - 1e-9).ceil() as usize
    };

    let last = (max / step).floor() as usize;
    (0..=last)
        .map(|i| {
            let value = step * i as f64;
            (value, format!("{value:.decimals$}"))
        })
        .collect()
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count.max(1) as f64;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let error = raw / magnitude;
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}

/// Standalone SVG document for the chart.
pub fn render_svg(model: &ChartModel) -> String {
    let layout = &model.layout;
    let plot_width = layout.inner_width();
    let plot_height = layout.inner_height();
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif">"#,
        layout.width, layout.height
    );
    let _ = writeln!(
        svg,
        r#"<g transform="translate({},{})">"#,
        layout.margins.left, layout.margins.top
    );

    // Category axis
    let _ = writeln!(svg, r#"<g class="axis-x" transform="translate(0,{plot_height})" font-size="10">"#);
    let _ = writeln!(svg, r#"<line x1="0" x2="{plot_width}" y1="0" y2="0" stroke="currentColor"/>"#);
    for label in &model.category_labels {
        let _ = writeln!(
            svg,
            r#"<g transform="translate({x},0)"><line y2="6" stroke="currentColor"/><text y="9" dy="0.71em" transform="rotate(-45)" text-anchor="end">{name}</text></g>"#,
            x = label.x,
            name = escape_xml(&label.name)
        );
    }
    let _ = writeln!(svg, "</g>");

    // Value axis
    let _ = writeln!(svg, r#"<g class="axis-y" font-size="10">"#);
    let _ = writeln!(svg, r#"<line x1="0" x2="0" y1="0" y2="{plot_height}" stroke="currentColor"/>"#);
    for tick in &model.value_ticks {
        let _ = writeln!(
            svg,
            r#"<g transform="translate(0,{y})"><line x2="-6" stroke="currentColor"/><text x="-9" dy="0.32em" text-anchor="end">{label}</text></g>"#,
            y = tick.y,
            label = tick.label
        );
    }
    let _ = writeln!(svg, "</g>");

    for bar in &model.bars {
        let _ = writeln!(
            svg,
            r#"<rect class="{class}" x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}"><title>{name}: {value}</title></rect>"#,
            class = bar.series.css_class(),
            x = bar.x,
            y = bar.y,
            w = bar.width,
            h = bar.height,
            fill = bar.series.color(),
            name = escape_xml(&bar.category),
            value = bar.value
        );
    }

    let _ = writeln!(
        svg,
        r#"<text transform="rotate(-90)" y="{}" x="{}" dy="1em" text-anchor="middle">Value</text>"#,
        -layout.margins.left,
        -plot_height / 2.0
    );

    let _ = writeln!(svg, r#"<g class="legend" font-size="10" text-anchor="end">"#);
    for (index, series) in model.legend.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"<g transform="translate(0,{offset})"><rect x="{rx}" width="19" height="19" fill="{fill}"/><text x="{tx}" y="9.5" dy="0.32em">{label}</text></g>"#,
            offset = index * 20,
            rx = plot_width - 19.0,
            tx = plot_width - 24.0,
            fill = series.color(),
            label = series.label()
        );
    }
    let _ = writeln!(svg, "</g>");

    let _ = writeln!(svg, "</g>");
    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, average: f64, abilities: usize) -> CategoryStatistic {
        CategoryStatistic::new(name, average, abilities)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_layout_matches_dashboard_size() {
        let layout = ChartLayout::default();
        assert!(approx(layout.inner_width(), 710.0));
        assert!(approx(layout.inner_height(), 340.0));
    }

    #[test]
    fn bands_follow_input_order() {
        let stats = vec![stat("water", 50.0, 1), stat("fire", 80.0, 4), stat("grass", 70.0, 3)];
        let model = ChartModel::project(&stats, &ChartLayout::default());

        let names: Vec<_> = model.category_labels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["water", "fire", "grass"]);
        assert!(model.category_labels[0].x < model.category_labels[1].x);
        assert!(model.category_labels[1].x < model.category_labels[2].x);
    }

    #[test]
    fn each_band_holds_two_half_width_bars() {
        let stats = vec![stat("grass", 70.0, 3), stat("water", 50.0, 1)];
        let model = ChartModel::project(&stats, &ChartLayout::default());

        assert_eq!(model.bars.len(), 4);
        let experience = &model.bars[0];
        let abilities = &model.bars[1];
        assert_eq!(experience.series, Series::AverageBaseExperience);
        assert_eq!(abilities.series, Series::UniqueAbilities);
        assert!(approx(experience.width, model.band_width / 2.0));
        assert!(approx(abilities.x, experience.x + experience.width));
    }

    #[test]
    fn band_geometry_uses_equal_inner_and_outer_padding() {
        let layout = ChartLayout::default();
        let stats = vec![stat("a", 1.0, 1), stat("b", 1.0, 1)];
        let model = ChartModel::project(&stats, &layout);

        // step = 710 / (2 - 0.1 + 0.2) = 338.095..., bandwidth = 0.9 * step
        let step = 710.0 / 2.1;
        assert!(approx(model.band_width, step * 0.9));
        assert!(approx(model.bars[0].x, step * 0.1));
    }

    #[test]
    fn value_axis_is_shared_by_both_series() {
        let stats = vec![stat("grass", 70.0, 3), stat("water", 50.0, 1)];
        let model = ChartModel::project(&stats, &ChartLayout::default());
        let plot_height = model.layout.inner_height();

        assert!(approx(model.max_value, 70.0));
        let tallest = &model.bars[0];
        assert!(approx(tallest.y, 0.0));
        assert!(approx(tallest.height, plot_height));
        let grass_abilities = &model.bars[1];
        assert!(approx(grass_abilities.height, plot_height * 3.0 / 70.0));
    }

    #[test]
    fn ability_series_can_set_the_maximum() {
        let stats = vec![stat("odd", 2.0, 8)];
        let model = ChartModel::project(&stats, &ChartLayout::default());
        assert!(approx(model.max_value, 8.0));
    }

    #[test]
    fn zero_maximum_draws_flat_bars() {
        let stats = vec![stat("empty", 0.0, 0)];
        let model = ChartModel::project(&stats, &ChartLayout::default());

        for bar in &model.bars {
            assert!(bar.height.is_finite());
            assert!(approx(bar.height, 0.0));
        }
        assert_eq!(model.value_ticks.len(), 1);
    }

    #[test]
    fn empty_statistics_produce_empty_model() {
        let model = ChartModel::project(&[], &ChartLayout::default());
        assert!(model.is_empty());
        assert!(model.category_labels.is_empty());
    }

    #[test]
    fn ticks_use_round_steps() {
        let labels: Vec<String> = ticks(100.0, 10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(
            labels,
            vec!["0", "10", "20", "30", "40", "50", "60", "70", "80", "90", "100"]
        );

        let labels: Vec<String> = ticks(70.0, 10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels.len(), 15);
        assert_eq!(labels[1], "5");

        let labels: Vec<String> = ticks(163.4, 10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels.first().map(String::as_str), Some("0"));
        assert_eq!(labels.last().map(String::as_str), Some("160"));
        assert_eq!(labels.len(), 9);

        let labels: Vec<String> = ticks(1.0, 10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels[1], "0.1");
    }

    #[test]
    fn svg_contains_bars_legend_and_escaped_names() {
        let stats = vec![stat("grass", 70.0, 3), stat("<ghost>", 0.0, 0)];
        let svg = render_svg(&ChartModel::project(&stats, &ChartLayout::default()));

        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("class=\"bar-experience\"").count(), 2);
        assert_eq!(svg.matches("class=\"bar-abilities\"").count(), 2);
        assert!(svg.contains("Average Base Experience"));
        assert!(svg.contains("Unique Abilities"));
        assert!(svg.contains("&lt;ghost&gt;"));
        assert!(!svg.contains("<ghost>"));
        assert!(!svg.contains("NaN"));
    }
}

//! Grouped bar chart card.
//!
//! Draws a [`ChartModel`] as SVG nodes. The model is projected again on every
//! render, so a new statistics sequence always replaces the whole chart.

use dioxus::prelude::*;
use pokedex_domain::CategoryStatistic;
use pokedex_engine::report::{ChartLayout, ChartModel};

use super::common::Card;

/// Legend row geometry, precomputed for the template.
struct LegendRow {
    label: &'static str,
    color: &'static str,
    offset: usize,
}

#[component]
pub fn StatChart(statistics: Vec<CategoryStatistic>) -> Element {
    let model = ChartModel::project(&statistics, &ChartLayout::default());
    let layout = model.layout;
    let width = layout.width;
    let height = layout.height;
    let left = layout.margins.left;
    let top = layout.margins.top;
    let plot_width = layout.inner_width();
    let plot_height = layout.inner_height();
    let axis_label_x = -plot_height / 2.0;
    let axis_label_y = -left;
    let legend_rect_x = plot_width - 19.0;
    let legend_text_x = plot_width - 24.0;

    let legend: Vec<LegendRow> = model
        .legend
        .iter()
        .enumerate()
        .map(|(index, series)| LegendRow {
            label: series.label(),
            color: series.color(),
            offset: index * 20,
        })
        .collect();

    rsx! {
        Card {
            title: "Pokémon Type Statistics".to_string(),
            div {
                class: "w-full overflow-x-auto",
                svg {
                    width: "{width}",
                    height: "{height}",
                    "font-family": "sans-serif",
                    g {
                        transform: "translate({left},{top})",

                        // Category axis
                        g {
                            transform: "translate(0,{plot_height})",
                            "font-size": "10",
                            line { x1: "0", x2: "{plot_width}", stroke: "currentColor" }
                            for label in model.category_labels {
                                g {
                                    key: "{label.name}",
                                    transform: "translate({label.x},0)",
                                    line { y2: "6", stroke: "currentColor" }
                                    text {
                                        y: "9",
                                        dy: "0.71em",
                                        transform: "rotate(-45)",
                                        "text-anchor": "end",
                                        "{label.name}"
                                    }
                                }
                            }
                        }

                        // Value axis
                        g {
                            "font-size": "10",
                            line { y2: "{plot_height}", stroke: "currentColor" }
                            for tick in model.value_ticks {
                                g {
                                    key: "{tick.label}",
                                    transform: "translate(0,{tick.y})",
                                    line { x2: "-6", stroke: "currentColor" }
                                    text { x: "-9", dy: "0.32em", "text-anchor": "end", "{tick.label}" }
                                }
                            }
                        }

                        for bar in model.bars {
                            rect {
                                class: bar.series.css_class(),
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                                fill: bar.series.color(),
                            }
                        }

                        text {
                            transform: "rotate(-90)",
                            x: "{axis_label_x}",
                            y: "{axis_label_y}",
                            dy: "1em",
                            "text-anchor": "middle",
                            "Value"
                        }

                        g {
                            "font-size": "10",
                            "text-anchor": "end",
                            for row in legend {
                                g {
                                    key: "{row.label}",
                                    transform: "translate(0,{row.offset})",
                                    rect {
                                        x: "{legend_rect_x}",
                                        width: "19",
                                        height: "19",
                                        fill: row.color,
                                    }
                                    text {
                                        x: "{legend_text_x}",
                                        y: "9.5",
                                        dy: "0.32em",
                                        "{row.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

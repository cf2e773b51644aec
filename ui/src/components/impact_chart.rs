use dioxus::prelude::*;

use crate::core::chart::{layout_bars, tick_label, y_ticks, BarRect, ChartSpec, Viewport};
use crate::core::format::format_amount;

const TICK_COUNT: usize = 5;

/// SVG bar chart of saved CO₂ per category.
///
/// Single use per page load: the dashboard mounts it once after the tier's
/// chart delay and never re-renders it with fresh data. New totals arrive
/// through a page reload.
#[component]
pub fn ImpactChart(spec: ChartSpec) -> Element {
    let viewport = Viewport::default();
    let ticks = y_ticks(spec.max_value(), TICK_COUNT);
    let axis_top = ticks.last().copied().unwrap_or(1.0);
    let bars = layout_bars(&spec, &viewport, TICK_COUNT);
    let legend = spec
        .datasets
        .first()
        .map(|d| d.label.clone())
        .unwrap_or_default();

    rsx! {
        figure { class: "impact-chart",
            if spec.legend {
                figcaption { class: "impact-chart__legend",
                    span { class: "impact-chart__swatch", aria_hidden: "true" }
                    "{legend}"
                }
            }
            svg {
                class: "impact-chart__svg",
                view_box: "0 0 {viewport.width} {viewport.height}",
                role: "img",
                "aria-label": "{legend}",
                for tick in ticks {
                    {render_tick(tick, axis_top, &viewport)}
                }
                for (index, bar) in bars.into_iter().enumerate() {
                    {render_bar(index, bar, &viewport)}
                }
            }
        }
    }
}

fn render_tick(value: f64, axis_top: f64, viewport: &Viewport) -> Element {
    let y = viewport.baseline() - viewport.plot_height() * (value / axis_top);
    let x_start = viewport.pad_left;
    let x_end = viewport.width - viewport.pad_right;
    let label_x = viewport.pad_left - 8.0;
    let label_y = y + 4.0;
    let grid_class = if value == 0.0 {
        "impact-chart__axis"
    } else {
        "impact-chart__grid"
    };

    rsx! {
        g { key: "tick-{value}",
            line { class: grid_class, x1: "{x_start}", y1: "{y:.1}", x2: "{x_end}", y2: "{y:.1}" }
            text {
                class: "impact-chart__tick",
                x: "{label_x}",
                y: "{label_y:.1}",
                text_anchor: "end",
                "{tick_label(value)}"
            }
        }
    }
}

fn render_bar(index: usize, bar: BarRect, viewport: &Viewport) -> Element {
    let label_y = viewport.baseline() + 20.0;
    let center = bar.center_x();
    let value_y = bar.y - 6.0;
    let amount = format_amount(bar.value);

    rsx! {
        g { key: "bar-{index}", class: "impact-chart__bar",
            rect {
                x: "{bar.x:.1}",
                y: "{bar.y:.1}",
                width: "{bar.width:.1}",
                height: "{bar.height:.1}",
                rx: "8",
            }
            text {
                class: "impact-chart__value",
                x: "{center:.1}",
                y: "{value_y:.1}",
                text_anchor: "middle",
                "{amount}"
            }
            text {
                class: "impact-chart__label",
                x: "{center:.1}",
                y: "{label_y:.1}",
                text_anchor: "middle",
                "{bar.label}"
            }
        }
    }
}

//! Bar chart model and SVG geometry for the impact chart.

use serde::{Deserialize, Serialize};

use crate::core::series::Series;
use crate::page::PageLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Everything the renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_begin_at_zero: bool,
    pub legend: bool,
}

impl ChartSpec {
    /// Single bar series, one bar per category, in series order.
    pub fn bar(series: &Series, dataset_label: &str) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: series.labels(),
            datasets: vec![Dataset {
                label: dataset_label.to_string(),
                data: series.amounts(),
            }],
            y_begin_at_zero: true,
            legend: true,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

/// Decide whether a chart gets drawn at all. A missing mount or a page
/// without a series is a silent no-op.
pub fn chart_plan(
    layout: &PageLayout,
    series: Option<&Series>,
    dataset_label: &str,
) -> Option<ChartSpec> {
    if !layout.chart {
        return None;
    }
    series.map(|s| ChartSpec::bar(s, dataset_label))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
            pad_left: 48.0,
            pad_right: 16.0,
            pad_top: 16.0,
            pad_bottom: 40.0,
        }
    }
}

impl Viewport {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    /// Y pixel of the zero baseline.
    pub fn baseline(&self) -> f64 {
        self.pad_top + self.plot_height()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Fraction of each category slot taken by its bar.
const BAR_FILL: f64 = 0.6;

/// Lay the first dataset out as bars against a zero-based axis topped by the
/// highest tick.
pub fn layout_bars(spec: &ChartSpec, viewport: &Viewport, tick_count: usize) -> Vec<BarRect> {
    let Some(dataset) = spec.datasets.first() else {
        return Vec::new();
    };
    if spec.labels.is_empty() {
        return Vec::new();
    }

    let axis_top = y_ticks(spec.max_value(), tick_count)
        .last()
        .copied()
        .unwrap_or(1.0);
    let slot = viewport.plot_width() / spec.labels.len() as f64;
    let bar_width = slot * BAR_FILL;
    let plot_height = viewport.plot_height();

    spec.labels
        .iter()
        .zip(dataset.data.iter().copied())
        .enumerate()
        .map(|(index, (label, value))| {
            let clamped = if value.is_finite() { value.max(0.0) } else { 0.0 };
            let height = plot_height * (clamped / axis_top);
            BarRect {
                label: label.clone(),
                value,
                x: viewport.pad_left + slot * index as f64 + (slot - bar_width) / 2.0,
                y: viewport.baseline() - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}

/// Zero-based axis ticks with 1/2/5×10ⁿ steps covering `max`.
pub fn y_ticks(max: f64, count: usize) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 || count == 0 {
        return vec![0.0, 1.0];
    }

    let step = nice_step(max / count as f64);
    if !step.is_finite() || step <= 0.0 {
        return vec![0.0, max];
    }
    let steps = (max / step).ceil();
    if !steps.is_finite() || steps > MAX_TICK_STEPS {
        return vec![0.0, max];
    }
    (0..=steps as usize).map(|i| i as f64 * step).collect()
}

/// Guards against step underflow on subnormal maxima.
const MAX_TICK_STEPS: f64 = 100.0;

fn nice_step(raw: f64) -> f64 {
    let exponent = raw.log10().floor();
    let base = 10f64.powf(exponent);
    let fraction = raw / base;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Tick text without trailing zeros noise.
pub fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport_and_diet() -> Series {
        Series::new([("Transport", 5.0), ("Diet", 3.0)])
    }

    #[test]
    fn one_bar_dataset_in_series_order() {
        let spec = ChartSpec::bar(&transport_and_diet(), "kg CO₂ saved");
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.datasets.len(), 1);
        assert_eq!(spec.labels, vec!["Transport", "Diet"]);
        assert_eq!(spec.datasets[0].data, vec![5.0, 3.0]);
        assert!(spec.y_begin_at_zero);
        assert!(spec.legend);
    }

    #[test]
    fn bar_heights_follow_amounts_from_zero() {
        let spec = ChartSpec::bar(&transport_and_diet(), "kg");
        let viewport = Viewport::default();
        let bars = layout_bars(&spec, &viewport, 5);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "Transport");
        assert_eq!(bars[1].label, "Diet");
        assert!(bars[0].x < bars[1].x);

        let ratio = bars[1].height / bars[0].height;
        assert!((ratio - 0.6).abs() < 1e-9);
        for bar in &bars {
            assert!((bar.y + bar.height - viewport.baseline()).abs() < 1e-9);
        }
    }

    #[test]
    fn absent_mount_or_series_plans_nothing() {
        let series = transport_and_diet();
        let hidden = PageLayout {
            chart: false,
            ..PageLayout::default()
        };
        assert!(chart_plan(&hidden, Some(&series), "kg").is_none());
        assert!(chart_plan(&PageLayout::default(), None, "kg").is_none());
        assert!(chart_plan(&PageLayout::default(), Some(&series), "kg").is_some());
    }

    #[test]
    fn ticks_start_at_zero_and_cover_max() {
        assert_eq!(y_ticks(5.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let ticks = y_ticks(7.3, 4);
        assert_eq!(ticks.first(), Some(&0.0));
        assert!(*ticks.last().unwrap() >= 7.3);
        assert_eq!(y_ticks(0.0, 5), vec![0.0, 1.0]);
    }

    #[test]
    fn subnormal_max_falls_back_to_a_single_span() {
        let tiny = 5e-324;
        assert_eq!(y_ticks(tiny, 5), vec![0.0, tiny]);

        let spec = ChartSpec::bar(&Series::new([("Waste", tiny)]), "kg");
        let bars = layout_bars(&spec, &Viewport::default(), 5);
        assert_eq!(bars.len(), 1);
        assert!(bars[0].height.is_finite());
    }

    #[test]
    fn empty_series_lays_out_no_bars() {
        let spec = ChartSpec::bar(&Series::default(), "kg");
        assert_eq!(spec.max_value(), 0.0);
        assert!(layout_bars(&spec, &Viewport::default(), 5).is_empty());
    }

    #[test]
    fn tick_labels_drop_trailing_zeros() {
        assert_eq!(tick_label(2.0), "2");
        assert_eq!(tick_label(0.5), "0.5");
        assert_eq!(tick_label(0.25), "0.25");
    }
}

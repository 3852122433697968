//! SVG bar and pie charts. Geometry is computed by plain functions so it can
//! be tested without a renderer.

use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::format::{format_compact, format_currency};

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 300.0;
const PIE_RADIUS: f64 = 80.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
    /// One value per category, in category order.
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisScale {
    pub max: f64,
    pub ticks: Vec<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn band_width(&self, categories: usize) -> f64 {
        self.width / categories.max(1) as f64
    }

    pub fn category_center(&self, categories: usize, index: usize) -> f64 {
        self.left + (index as f64 + 0.5) * self.band_width(categories)
    }

    pub fn y_for(&self, value: f64, scale: &AxisScale) -> f64 {
        self.bottom() - value.max(0.0) / scale.max * self.height
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            left: 72.0,
            top: 16.0,
            width: VIEW_WIDTH - 72.0 - 16.0,
            height: VIEW_HEIGHT - 16.0 - 40.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub category: usize,
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rounds the axis up to a 1/2/2.5/5 × 10ⁿ step so tick labels stay readable.
pub fn nice_scale(max_value: f64, target_ticks: usize) -> AxisScale {
    if !max_value.is_finite() || max_value <= 0.0 {
        return AxisScale {
            max: 1.0,
            ticks: vec![0.0, 1.0],
        };
    }

    let raw_step = max_value / target_ticks.max(1) as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / magnitude;
    let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|f| *f >= normalized)
        .unwrap_or(10.0);
    let step = factor * magnitude;
    let steps = (max_value / step).ceil() as usize;

    AxisScale {
        max: step * steps as f64,
        ticks: (0..=steps).map(|i| step * i as f64).collect(),
    }
}

/// Grouped bars: each category band keeps 20% padding on both sides and
/// splits the rest evenly between series.
pub fn layout_bars(
    categories: usize,
    series: &[ChartSeries],
    scale: &AxisScale,
    area: PlotArea,
) -> Vec<BarRect> {
    if categories == 0 || series.is_empty() {
        return Vec::new();
    }
    let band = area.band_width(categories);
    let bar_width = band * 0.6 / series.len() as f64;

    let mut bars = Vec::with_capacity(categories * series.len());
    for category in 0..categories {
        for (series_index, s) in series.iter().enumerate() {
            let value = s
                .values
                .get(category)
                .copied()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0);
            let y = area.y_for(value, scale);
            bars.push(BarRect {
                category,
                series: series_index,
                x: area.left + category as f64 * band + band * 0.2 + series_index as f64 * bar_width,
                y,
                width: bar_width,
                height: area.bottom() - y,
            });
        }
    }
    bars
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub name: String,
    pub color: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub label: String,
    pub lines: Vec<TooltipLine>,
}

/// Tooltip for one category: its label, then each series as currency.
pub fn tooltip_for(
    categories: &[String],
    series: &[ChartSeries],
    index: usize,
) -> Option<TooltipContent> {
    let label = categories.get(index)?.clone();
    let lines = series
        .iter()
        .filter_map(|s| {
            s.values.get(index).map(|value| TooltipLine {
                name: s.name.clone(),
                color: s.color,
                value: format_currency(*value),
            })
        })
        .collect::<Vec<_>>();
    if lines.is_empty() {
        return None;
    }
    Some(TooltipContent { label, lines })
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieDatum {
    pub name: String,
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub path: String,
    pub color: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
    pub label_x: f64,
    pub label_y: f64,
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Slices start at 12 o'clock and run clockwise. Non-positive values get no
/// slice but still advance the colour palette.
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: f64 = values
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut angle = -FRAC_PI_2;
    for (index, value) in values.iter().copied().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        let sweep = value / total * TAU;
        let start = angle;
        let end = angle + sweep;
        let (x0, y0) = polar(cx, cy, radius, start);
        let (x1, y1) = polar(cx, cy, radius, end);

        let path = if sweep >= TAU - 1e-9 {
            // A single arc cannot close on itself; draw two halves.
            let (xm, ym) = polar(cx, cy, radius, start + TAU / 2.0);
            format!(
                "M {x0:.3} {y0:.3} A {radius} {radius} 0 1 1 {xm:.3} {ym:.3} A {radius} {radius} 0 1 1 {x0:.3} {y0:.3} Z"
            )
        } else {
            let large_arc = if sweep > TAU / 2.0 { 1 } else { 0 };
            format!(
                "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {radius} {radius} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
            )
        };

        let (label_x, label_y) = polar(cx, cy, radius * 1.3, start + sweep / 2.0);
        slices.push(PieSlice {
            index,
            path,
            color: theme::palette_color(index),
            start_angle: start,
            end_angle: end,
            label_x,
            label_y,
        });
        angle = end;
    }
    slices
}

#[component]
pub fn BarChart(
    categories: Vec<String>,
    series: Vec<ChartSeries>,
    #[props(default)] show_legend: bool,
) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let max_value = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let scale = nice_scale(max_value, 5);
    let area = PlotArea::default();
    let bars = layout_bars(categories.len(), &series, &scale, area);
    let band = area.band_width(categories.len());

    let ticks: Vec<(f64, String)> = scale
        .ticks
        .iter()
        .map(|tick| (area.y_for(*tick, &scale), format_compact(*tick)))
        .collect();
    let active = hovered();
    let category_labels: Vec<(usize, f64, String, &'static str)> = categories
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let fill = if active == Some(i) { "#f3f4f6" } else { "transparent" };
            (i, area.category_center(categories.len(), i), name.clone(), fill)
        })
        .collect();
    let bar_views: Vec<(BarRect, usize, &'static str)> = bars
        .into_iter()
        .map(|bar| {
            let color = series[bar.series].color;
            let category = bar.category;
            (bar, category, color)
        })
        .collect();

    let tooltip = active.and_then(|index| {
        tooltip_for(&categories, &series, index).map(|content| {
            let left = area.category_center(categories.len(), index) / VIEW_WIDTH * 100.0;
            (content, left)
        })
    });
    let legend = series.clone();
    let plot_bottom = area.bottom();
    let plot_right = area.left + area.width;

    rsx! {
        div { class: "relative",
            svg {
                class: "w-full",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                onmouseleave: move |_| hovered.set(None),
                for (y, label) in ticks {
                    line {
                        x1: area.left,
                        x2: plot_right,
                        y1: y,
                        y2: y,
                        stroke: "#e5e7eb",
                        stroke_dasharray: "3 3",
                    }
                    text {
                        x: area.left - 8.0,
                        y: y + 4.0,
                        text_anchor: "end",
                        font_size: "11",
                        fill: "#6b7280",
                        "{label}"
                    }
                }
                for (index, x, name, fill) in category_labels {
                    rect {
                        x: x - band / 2.0,
                        y: area.top,
                        width: band,
                        height: area.height,
                        fill: fill,
                        onmouseenter: move |_| hovered.set(Some(index)),
                    }
                    text {
                        x: x,
                        y: plot_bottom + 20.0,
                        text_anchor: "middle",
                        font_size: "12",
                        fill: "#374151",
                        "{name}"
                    }
                }
                for (bar, category, color) in bar_views {
                    rect {
                        class: "chart-bar",
                        x: bar.x,
                        y: bar.y,
                        width: bar.width,
                        height: bar.height,
                        rx: 4,
                        fill: color,
                        onmouseenter: move |_| hovered.set(Some(category)),
                    }
                }
                line {
                    x1: area.left,
                    x2: plot_right,
                    y1: plot_bottom,
                    y2: plot_bottom,
                    stroke: "#9ca3af",
                }
            }
            if let Some((content, left)) = tooltip {
                ChartTooltip { content, left }
            }
            if show_legend {
                div { class: "mt-2 flex justify-center gap-4 text-sm",
                    for s in legend {
                        span { class: "flex items-center gap-1",
                            span { class: "legend-swatch", style: "background: {s.color}" }
                            span { style: "color: {s.color}", "{s.name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChartTooltip(content: TooltipContent, left: f64) -> Element {
    rsx! {
        div {
            class: "chart-tooltip rounded border border-gray-300 bg-white p-3 shadow-lg",
            style: "left: {left}%;",
            p { class: "font-semibold", "{content.label}" }
            for line in content.lines {
                p { style: "color: {line.color}", "{line.name}: {line.value}" }
            }
        }
    }
}

#[component]
pub fn PieChart(data: Vec<PieDatum>) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let cx = VIEW_WIDTH / 2.0;
    let cy = VIEW_HEIGHT / 2.0;
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let slices = pie_slices(&values, cx, cy, PIE_RADIUS);

    let slice_views: Vec<(PieSlice, usize, String, &'static str)> = slices
        .into_iter()
        .map(|slice| {
            let label = data
                .get(slice.index)
                .map(|d| d.label.clone())
                .unwrap_or_default();
            let anchor = if slice.label_x >= cx { "start" } else { "end" };
            let index = slice.index;
            (slice, index, label, anchor)
        })
        .collect();

    let tooltip = hovered().and_then(|index| {
        data.get(index).map(|datum| TooltipContent {
            label: datum.name.clone(),
            lines: vec![TooltipLine {
                name: datum.name.clone(),
                color: theme::palette_color(index),
                value: format_currency(datum.value),
            }],
        })
    });

    rsx! {
        div { class: "relative",
            svg {
                class: "w-full",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                onmouseleave: move |_| hovered.set(None),
                for (slice, index, label, anchor) in slice_views {
                    path {
                        class: "chart-slice",
                        d: "{slice.path}",
                        fill: slice.color,
                        stroke: "#ffffff",
                        onmouseenter: move |_| hovered.set(Some(index)),
                    }
                    text {
                        x: slice.label_x,
                        y: slice.label_y,
                        text_anchor: anchor,
                        font_size: "13",
                        fill: slice.color,
                        "{label}"
                    }
                }
            }
            if let Some(content) = tooltip {
                ChartTooltip { content, left: 50.0 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> ChartSeries {
        ChartSeries {
            name: "Nilai".to_string(),
            color: theme::OVERVIEW_BAR,
            values: values.to_vec(),
        }
    }

    #[test]
    fn nice_scale_covers_maximum_with_round_steps() {
        let scale = nice_scale(875_000_000.0, 5);
        assert_eq!(scale.max, 1_000_000_000.0);
        assert_eq!(scale.ticks.len(), 6);
        assert_eq!(scale.ticks[1], 200_000_000.0);
        assert!(scale.ticks.windows(2).all(|w| w[0] < w[1]));

        let small = nice_scale(43_750_000.0, 5);
        assert!(small.max >= 43_750_000.0);
        assert_eq!(small.ticks[0], 0.0);
    }

    #[test]
    fn nice_scale_handles_empty_data() {
        let scale = nice_scale(0.0, 5);
        assert_eq!(scale.max, 1.0);
        assert_eq!(scale.ticks, vec![0.0, 1.0]);
    }

    #[test]
    fn grouped_bars_stay_inside_their_band() {
        let area = PlotArea::default();
        let data = vec![series(&[385.0, 411.25]), series(&[420.0, 455.0]), series(&[35.0, 43.75])];
        let scale = nice_scale(455.0, 5);
        let bars = layout_bars(2, &data, &scale, area);
        assert_eq!(bars.len(), 6);

        let band = area.width / 2.0;
        for bar in &bars {
            let band_start = area.left + bar.category as f64 * band;
            assert!(bar.x >= band_start);
            assert!(bar.x + bar.width <= band_start + band + 1e-9);
            assert!((bar.y + bar.height - (area.top + area.height)).abs() < 1e-9);
        }
        // Taller value, taller bar.
        assert!(bars[1].height > bars[0].height);
        assert!(bars[2].height < bars[0].height);
    }

    #[test]
    fn negative_values_render_as_empty_bars() {
        let scale = nice_scale(10.0, 5);
        let bars = layout_bars(1, &[series(&[-5.0])], &scale, PlotArea::default());
        assert_eq!(bars[0].height, 0.0);
    }

    #[test]
    fn tooltip_formats_each_series_as_currency() {
        let categories = vec!["Batu Split".to_string(), "Pasir".to_string()];
        let data = vec![
            ChartSeries {
                name: "Modal".to_string(),
                color: theme::CAPITAL_BAR,
                values: vec![385_000_000.0, 411_250_000.0],
            },
            ChartSeries {
                name: "Keuntungan".to_string(),
                color: theme::PROFIT_BAR,
                values: vec![35_000_000.0, 43_750_000.0],
            },
        ];
        let tooltip = tooltip_for(&categories, &data, 1).unwrap();
        assert_eq!(tooltip.label, "Pasir");
        assert_eq!(tooltip.lines[0].value, "Rp\u{a0}411.250.000");
        assert_eq!(tooltip.lines[1].name, "Keuntungan");
        assert_eq!(tooltip.lines[1].color, theme::PROFIT_BAR);
        assert!(tooltip_for(&categories, &data, 2).is_none());
    }

    #[test]
    fn pie_slices_cover_full_circle() {
        let slices = pie_slices(&[39_375_000.0, 39_375_000.0], 300.0, 150.0, 80.0);
        assert_eq!(slices.len(), 2);
        let sweep: f64 = slices.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((sweep - TAU).abs() < 1e-9);
        assert_eq!(slices[0].color, "#0088FE");
        assert_eq!(slices[1].color, "#00C49F");
        // Equal halves: first label on the right, second on the left.
        assert!(slices[0].label_x > 300.0);
        assert!(slices[1].label_x < 300.0);
    }

    #[test]
    fn pie_colours_cycle_and_skip_empty_values() {
        let slices = pie_slices(&[1.0, 0.0, 1.0, 1.0, 1.0], 0.0, 0.0, 10.0);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices.last().unwrap().index, 4);
        assert_eq!(slices.last().unwrap().color, theme::palette_color(0));
        assert!(pie_slices(&[0.0, -1.0], 0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn single_slice_draws_closed_circle() {
        let slices = pie_slices(&[5.0], 50.0, 50.0, 10.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
    }
}

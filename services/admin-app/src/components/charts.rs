//! SVG chart rendering for the overview series

use jokehub_api::models::LabeledCount;
use leptos::prelude::*;

/// Geometry of one bar in a bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub count: u64,
}

/// Lay out a labeled count series as bars filling `width` x `height`,
/// leaving room at the bottom for labels. Bars scale against the series
/// maximum; an all-zero series renders zero-height bars.
pub fn bar_geometry(series: &[LabeledCount], width: f64, height: f64) -> Vec<Bar> {
    if series.is_empty() {
        return Vec::new();
    }
    let max = series.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;
    let label_gutter = 20.0;
    let plot_height = (height - label_gutter).max(0.0);
    let slot = width / series.len() as f64;
    let bar_width = slot * 0.6;

    series
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let bar_height = plot_height * bucket.count as f64 / max;
            Bar {
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: plot_height - bar_height,
                width: bar_width,
                height: bar_height,
                label: bucket.label.clone(),
                count: bucket.count,
            }
        })
        .collect()
}

/// Points attribute for a polyline through the series, same layout rules
/// as [`bar_geometry`].
pub fn polyline_points(series: &[LabeledCount], width: f64, height: f64) -> String {
    if series.is_empty() {
        return String::new();
    }
    let max = series.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;
    let label_gutter = 20.0;
    let plot_height = (height - label_gutter).max(0.0);
    let slot = width / series.len() as f64;

    series
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let x = i as f64 * slot + slot / 2.0;
            let y = plot_height - plot_height * bucket.count as f64 / max;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fraction of the donut taken by the premium segment
pub fn premium_fraction(free: u64, premium: u64) -> f64 {
    let total = free + premium;
    if total == 0 {
        return 0.0;
    }
    premium as f64 / total as f64
}

/// Bar chart of a labeled count series
#[component]
pub fn BarChart(series: Vec<LabeledCount>) -> impl IntoView {
    let width = 560.0;
    let height = 260.0;
    let bars = bar_geometry(&series, width, height);

    view! {
        <svg
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: auto;"
        >
            {bars
                .into_iter()
                .enumerate()
                .map(|(i, bar)| {
                    let fill = if i % 2 == 0 { "#FFD66B" } else { "#A5C2FF" };
                    let label_x = bar.x + bar.width / 2.0;
                    view! {
                        <g>
                            <rect
                                x=bar.x
                                y=bar.y
                                width=bar.width
                                height=bar.height
                                rx="4"
                                fill=fill
                            />
                            <text
                                x=label_x
                                y=height - 6.0
                                text-anchor="middle"
                                style="font-size: 12px; fill: #6c757d;"
                            >
                                {bar.label}
                            </text>
                        </g>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}

/// Area-style line chart of a labeled count series
#[component]
pub fn AreaChart(series: Vec<LabeledCount>) -> impl IntoView {
    let width = 860.0;
    let height = 320.0;
    let points = polyline_points(&series, width, height);
    let labels: Vec<_> = series.iter().map(|b| b.label.clone()).collect();
    let slot = if labels.is_empty() {
        width
    } else {
        width / labels.len() as f64
    };

    view! {
        <svg
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: auto;"
        >
            <polyline
                points=points
                fill="none"
                stroke="#0A408A"
                stroke-width="3"
            />
            {labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    let x = i as f64 * slot + slot / 2.0;
                    view! {
                        <text
                            x=x
                            y=height - 6.0
                            text-anchor="middle"
                            style="font-size: 12px; fill: #6c757d;"
                        >
                            {label}
                        </text>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}

/// Donut split of free vs premium users with a legend
#[component]
pub fn DonutLegend(free: u64, premium: u64) -> impl IntoView {
    let radius = 60.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let premium_arc = circumference * premium_fraction(free, premium);
    let free_arc = circumference - premium_arc;

    view! {
        <div style="display: flex; flex-direction: column; align-items: center;">
            <svg viewBox="0 0 160 160" style="width: 160px; height: 160px;">
                <circle
                    cx="80"
                    cy="80"
                    r=radius
                    fill="none"
                    stroke="#A5C2FF"
                    stroke-width="20"
                    stroke-dasharray=format!("{:.1} {:.1}", free_arc, premium_arc)
                />
                <circle
                    cx="80"
                    cy="80"
                    r=radius
                    fill="none"
                    stroke="#0A408A"
                    stroke-width="20"
                    stroke-dasharray=format!("{:.1} {:.1}", premium_arc, free_arc)
                    stroke-dashoffset=format!("{:.1}", -free_arc)
                />
            </svg>
            <div style="display: flex; gap: 1rem; margin-top: 0.5rem; font-size: 0.8rem;">
                <span>
                    <span style="display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: #A5C2FF; margin-right: 0.3rem;"></span>
                    {format!("Free: {}", free)}
                </span>
                <span>
                    <span style="display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: #0A408A; margin-right: 0.3rem;"></span>
                    {format!("Premium: {}", premium)}
                </span>
            </div>
        </div>
    }
}

//! Plotly-backed chart components.
//!
//! Charts bind to the page-level `Plotly` global; traces are assembled with
//! `serde_json::json!` and handed over through `serde-wasm-bindgen`. Every
//! chart renders an explicit "no data" placeholder instead of an empty
//! canvas, and none of them transforms data beyond display formatting.

use common::date_range::short_date_label;
use common::models::{CategoryCount, SentimentOverview, TimeSeriesPoint, TimelineEntry};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

pub const POSITIVE_COLOR: &str = "#059669";
pub const NEUTRAL_COLOR: &str = "#6B7280";
pub const NEGATIVE_COLOR: &str = "#DC2626";
const PRIMARY_COLOR: &str = "#2563EB";

/// Round a percentage for display, e.g. `42.4` -> `"42%"`.
pub fn percent_label(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

fn base_layout() -> serde_json::Value {
    serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee"}
    })
}

fn render_plot(element: &Element, traces: serde_json::Value, layout: serde_json::Value) {
    let div_id = element.id();
    if div_id.is_empty() {
        return;
    }
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});
    match (
        serde_wasm_bindgen::to_value(&traces),
        serde_wasm_bindgen::to_value(&layout),
        serde_wasm_bindgen::to_value(&config),
    ) {
        (Ok(data), Ok(layout), Ok(config)) => newPlot(&div_id, data, layout, config),
        _ => log::error!("Failed to serialize chart payload for #{div_id}"),
    }
}

fn empty_chart(message: &str) -> Html {
    html! {
        <div class="h-64 flex flex-col items-center justify-center text-center">
            <p class="text-text-secondary">{message}</p>
        </div>
    }
}

// ===================== Crime frequency over time =====================

#[derive(Properties, PartialEq)]
pub struct CrimeLineChartProps {
    pub data: Vec<TimeSeriesPoint>,
}

#[function_component(CrimeLineChart)]
pub fn crime_line_chart(props: &CrimeLineChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.data.clone()),
        move |(chart_ref, data)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                if !data.is_empty() {
                    let dates: Vec<String> =
                        data.iter().map(|p| short_date_label(&p.date)).collect();
                    let counts: Vec<u64> = data.iter().map(|p| p.count).collect();

                    let traces = serde_json::json!([{
                        "x": dates,
                        "y": counts,
                        "type": "scatter",
                        "mode": "lines+markers",
                        "line": {"color": PRIMARY_COLOR, "width": 2},
                        "name": "Incidents"
                    }]);
                    render_plot(&element, traces, base_layout());
                }
            }
            || ()
        },
    );

    if props.data.is_empty() {
        return empty_chart("No data available for the selected filters");
    }
    html! {
        <div
            ref={chart_ref}
            id="chart-crime-frequency"
            class="chart-container"
            style="height: 300px;"
            aria-label="Crime Frequency Over Time Line Chart"
        ></div>
    }
}

// ===================== Crime categories comparison =====================

#[derive(Properties, PartialEq)]
pub struct CategoryBarChartProps {
    pub data: Vec<CategoryCount>,
}

#[function_component(CategoryBarChart)]
pub fn category_bar_chart(props: &CategoryBarChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.data.clone()),
        move |(chart_ref, data)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                if !data.is_empty() {
                    let categories: Vec<&str> =
                        data.iter().map(|c| c.category.as_str()).collect();
                    let counts: Vec<u64> = data.iter().map(|c| c.count).collect();

                    let traces = serde_json::json!([{
                        "x": categories,
                        "y": counts,
                        "type": "bar",
                        "marker": {"color": PRIMARY_COLOR},
                        "name": "Incidents"
                    }]);
                    render_plot(&element, traces, base_layout());
                }
            }
            || ()
        },
    );

    if props.data.is_empty() {
        return empty_chart("No data available for the selected filters");
    }
    html! {
        <div
            ref={chart_ref}
            id="chart-crime-categories"
            class="chart-container"
            style="height: 300px;"
            aria-label="Crime Categories Comparison Bar Chart"
        ></div>
    }
}

// ===================== Sentiment overview donut =====================

#[derive(Properties, PartialEq)]
pub struct SentimentDonutProps {
    pub overview: SentimentOverview,
}

#[function_component(SentimentDonut)]
pub fn sentiment_donut(props: &SentimentDonutProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.overview),
        move |(chart_ref, overview)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                if overview.total() > 0.0 {
                    let traces = serde_json::json!([{
                        "values": [overview.positive, overview.neutral, overview.negative],
                        "labels": ["Positive", "Neutral", "Negative"],
                        "type": "pie",
                        "hole": 0.6,
                        "sort": false,
                        "marker": {"colors": [POSITIVE_COLOR, NEUTRAL_COLOR, NEGATIVE_COLOR]},
                        "textinfo": "none"
                    }]);
                    let layout = serde_json::json!({
                        "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                        "paper_bgcolor": "rgba(0,0,0,0)",
                        "showlegend": false,
                        "annotations": [{
                            "text": percent_label(overview.total()),
                            "font": {"size": 18},
                            "showarrow": false
                        }]
                    });
                    render_plot(&element, traces, layout);
                }
            }
            || ()
        },
    );

    if props.overview.total() <= 0.0 {
        return empty_chart("No sentiment data available");
    }
    html! {
        <div
            ref={chart_ref}
            id="chart-sentiment-overview"
            class="chart-container"
            style="height: 240px;"
            aria-label="Sentiment Overview Donut Chart"
        ></div>
    }
}

// ===================== Sentiment timeline =====================

#[derive(Properties, PartialEq)]
pub struct SentimentTimelineProps {
    pub data: Vec<TimelineEntry>,
}

#[function_component(SentimentTimelineChart)]
pub fn sentiment_timeline_chart(props: &SentimentTimelineProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.data.clone()),
        move |(chart_ref, data)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                if !data.is_empty() {
                    let dates: Vec<String> =
                        data.iter().map(|e| short_date_label(&e.date)).collect();
                    let series = [
                        ("Positive", POSITIVE_COLOR, data.iter().map(|e| e.positive).collect::<Vec<_>>()),
                        ("Neutral", NEUTRAL_COLOR, data.iter().map(|e| e.neutral).collect::<Vec<_>>()),
                        ("Negative", NEGATIVE_COLOR, data.iter().map(|e| e.negative).collect::<Vec<_>>()),
                    ];
                    let traces: Vec<serde_json::Value> = series
                        .into_iter()
                        .map(|(name, color, values)| {
                            serde_json::json!({
                                "x": dates.clone(),
                                "y": values,
                                "type": "scatter",
                                "mode": "lines",
                                "line": {"color": color, "width": 2},
                                "name": name
                            })
                        })
                        .collect();

                    let mut layout = base_layout();
                    layout["yaxis"] = serde_json::json!({
                        "showgrid": true,
                        "gridcolor": "#eee",
                        "range": [0, 100],
                        "ticksuffix": "%"
                    });
                    layout["showlegend"] = serde_json::json!(true);
                    layout["legend"] = serde_json::json!({"orientation": "h", "y": 1.15});
                    render_plot(&element, serde_json::Value::Array(traces), layout);
                }
            }
            || ()
        },
    );

    if props.data.is_empty() {
        return empty_chart("No sentiment data available");
    }
    html! {
        <div
            ref={chart_ref}
            id="chart-sentiment-timeline"
            class="chart-container"
            style="height: 260px;"
            aria-label="Sentiment Timeline Line Chart"
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_labels_round_to_whole_numbers() {
        assert_eq!(percent_label(42.0), "42%");
        assert_eq!(percent_label(42.4), "42%");
        assert_eq!(percent_label(42.5), "43%");
        assert_eq!(percent_label(100.0), "100%");
        assert_eq!(percent_label(0.0), "0%");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn empty_chart_renders_placeholder_markup() {
        let placeholder = empty_chart("No data available");
        // A placeholder is plain markup; mounting it must not require the
        // Plotly global to be present.
        assert!(matches!(placeholder, yew::virtual_dom::VNode::VTag(_)));
    }
}

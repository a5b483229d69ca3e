use common::models::Topic;
use yew::prelude::*;

const MIN_FONT_PX: f64 = 12.0;
const MAX_FONT_PX: f64 = 28.0;

const NEGATIVE_RGB: (f64, f64, f64) = (220.0, 38.0, 38.0); // #DC2626
const NEUTRAL_RGB: (f64, f64, f64) = (107.0, 114.0, 128.0); // #6B7280
const POSITIVE_RGB: (f64, f64, f64) = (5.0, 150.0, 105.0); // #059669

/// Font size for a topic, linearly scaled between the lightest and heaviest
/// weight in the cloud.
pub fn font_size(weight: f64, min_weight: f64, max_weight: f64) -> f64 {
    if (max_weight - min_weight).abs() < f64::EPSILON {
        return (MIN_FONT_PX + MAX_FONT_PX) / 2.0;
    }
    let t = ((weight - min_weight) / (max_weight - min_weight)).clamp(0.0, 1.0);
    MIN_FONT_PX + t * (MAX_FONT_PX - MIN_FONT_PX)
}

fn lerp(a: (f64, f64, f64), b: (f64, f64, f64), t: f64) -> (f64, f64, f64) {
    (
        a.0 + (b.0 - a.0) * t,
        a.1 + (b.1 - a.1) * t,
        a.2 + (b.2 - a.2) * t,
    )
}

/// Color for a sentiment score in -1..=1: red through gray to green.
pub fn sentiment_color(sentiment: f64) -> String {
    let s = sentiment.clamp(-1.0, 1.0);
    let (r, g, b) = if s < 0.0 {
        lerp(NEGATIVE_RGB, NEUTRAL_RGB, s + 1.0)
    } else {
        lerp(NEUTRAL_RGB, POSITIVE_RGB, s)
    };
    format!("#{:02X}{:02X}{:02X}", r.round() as u8, g.round() as u8, b.round() as u8)
}

#[derive(Properties, PartialEq)]
pub struct TagCloudProps {
    pub topics: Vec<Topic>,
    pub selected_topic: Option<u32>,
    pub on_select_topic: Callback<u32>,
}

/// Clickable topic cloud. Size encodes mention frequency, color encodes
/// sentiment; selecting a topic dims the rest.
#[function_component(TagCloud)]
pub fn tag_cloud(props: &TagCloudProps) -> Html {
    if props.topics.is_empty() {
        return html! {
            <div class="h-64 flex items-center justify-center">
                <p class="text-text-secondary">{"No trending topics available"}</p>
            </div>
        };
    }

    let min_weight = props
        .topics
        .iter()
        .map(|t| t.weight)
        .fold(f64::INFINITY, f64::min);
    let max_weight = props
        .topics
        .iter()
        .map(|t| t.weight)
        .fold(f64::NEG_INFINITY, f64::max);

    html! {
        <div class="flex flex-wrap items-center justify-center gap-x-4 gap-y-2">
            {for props.topics.iter().map(|topic| {
                let selected = props.selected_topic == Some(topic.id);
                let dimmed = props.selected_topic.is_some() && !selected;
                let style = format!(
                    "font-size: {:.0}px; color: {}; opacity: {}; font-weight: {};",
                    font_size(topic.weight, min_weight, max_weight),
                    sentiment_color(topic.sentiment),
                    if dimmed { "0.3" } else { "1" },
                    if selected { "bold" } else { "normal" },
                );
                let onclick = {
                    let on_select_topic = props.on_select_topic.clone();
                    let id = topic.id;
                    Callback::from(move |_| on_select_topic.emit(id))
                };
                html! {
                    <button
                        key={topic.id}
                        class="cursor-pointer bg-transparent border-0 p-0"
                        style={style}
                        onclick={onclick}
                    >
                        {&topic.name}
                    </button>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_sizes_span_the_configured_band() {
        assert_eq!(font_size(15.0, 15.0, 85.0), MIN_FONT_PX);
        assert_eq!(font_size(85.0, 15.0, 85.0), MAX_FONT_PX);
        let mid = font_size(50.0, 15.0, 85.0);
        assert!(mid > MIN_FONT_PX && mid < MAX_FONT_PX);
    }

    #[test]
    fn uniform_weights_use_the_midpoint_size() {
        assert_eq!(font_size(40.0, 40.0, 40.0), 20.0);
    }

    #[test]
    fn sentiment_endpoints_hit_the_palette_colors() {
        assert_eq!(sentiment_color(-1.0), "#DC2626");
        assert_eq!(sentiment_color(0.0), "#6B7280");
        assert_eq!(sentiment_color(1.0), "#059669");
    }

    #[test]
    fn out_of_range_sentiment_is_clamped() {
        assert_eq!(sentiment_color(-5.0), sentiment_color(-1.0));
        assert_eq!(sentiment_color(5.0), sentiment_color(1.0));
    }
}

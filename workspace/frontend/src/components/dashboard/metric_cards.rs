use common::models::MetricCard;
use yew::prelude::*;

/// Thousands-separated display form of a count, e.g. `1254` -> `"1,254"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct MetricCardsProps {
    pub metrics: Vec<MetricCard>,
}

/// Headline counters for the dashboard. A rising crime count renders as the
/// danger color, a falling one as success.
#[function_component(MetricCards)]
pub fn metric_cards(props: &MetricCardsProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
            {for props.metrics.iter().map(|metric| {
                let rising = metric.change > 0.0;
                let trend_class = if rising {
                    "ml-2 text-sm font-medium text-danger"
                } else {
                    "ml-2 text-sm font-medium text-success"
                };
                let trend_arrow = if rising { "▲" } else { "▼" };

                html! {
                    <div key={metric.id} class="bg-white rounded-lg border border-border p-5 shadow-sm">
                        <h3 class="text-text-secondary text-sm font-medium mb-1">{&metric.title}</h3>
                        <div class="flex items-baseline">
                            <span class="text-3xl font-bold text-text-primary">
                                {format_count(metric.value)}
                            </span>
                            <span class={trend_class}>
                                {format!("{} {:.1}%", trend_arrow, metric.change.abs())}
                            </span>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(486), "486");
        assert_eq!(format_count(1254), "1,254");
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(12_345), "12,345");
    }
}

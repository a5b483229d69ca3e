use chrono::Datelike;
use common::DateRange;
use common::date_range::{RangeKey, resolve};
use common::models::SentimentSource;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::charts::{SentimentDonut, SentimentTimelineChart, percent_label};
use crate::components::header::Header;
use crate::components::loading::LoadingIndicator;
use crate::components::sentiment::date_range_selector::DateRangeSelector;
use crate::components::sentiment::source_breakdown::SourceBreakdownPanels;
use crate::components::sentiment::source_filter::SourceFilter;
use crate::components::sentiment::tag_cloud::TagCloud;
use crate::hooks::sentiment::use_sentiment_report;
use crate::router::Route;

/// Shareable report URL carrying the current filters. The receiving view
/// does not parse these parameters back out; the link only restores the
/// route, not the selection.
fn share_url(
    origin: &str,
    range: &DateRange,
    source: SentimentSource,
    topic: Option<u32>,
) -> String {
    let mut url = format!(
        "{origin}/sentiment-analysis-report?start={}&end={}&source={}",
        range.start_iso(),
        range.end_iso(),
        source.value()
    );
    if let Some(topic) = topic {
        url.push_str(&format!("&topic={topic}"));
    }
    url
}

fn copy_share_link(url: String, copied: UseStateHandle<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&url);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                log::info!("Report URL copied to clipboard");
                copied.set(true);
                TimeoutFuture::new(2_000).await;
                copied.set(false);
            }
            Err(err) => log::error!("Failed to copy URL: {:?}", err),
        }
    });
}

/// Sentiment report: overview donut, timeline, trending topics and the
/// per-source breakdown, scoped to a selectable date window.
#[function_component(SentimentAnalysisReport)]
pub fn sentiment_analysis_report() -> Html {
    let date_range = use_state(|| resolve(RangeKey::Last7Days));
    let selected_source = use_state(|| SentimentSource::All);
    let selected_topic = use_state(|| Option::<u32>::None);
    let copied = use_state(|| false);

    let report = use_sentiment_report(*date_range, *selected_source, *selected_topic);

    let on_date_range_change = {
        let date_range = date_range.clone();
        Callback::from(move |range: DateRange| date_range.set(range))
    };

    let on_source_change = {
        let selected_source = selected_source.clone();
        Callback::from(move |source: SentimentSource| selected_source.set(source))
    };

    let on_topic_select = {
        let selected_topic = selected_topic.clone();
        Callback::from(move |id: u32| {
            selected_topic.set(if *selected_topic == Some(id) { None } else { Some(id) });
        })
    };

    let clear_topic = {
        let selected_topic = selected_topic.clone();
        Callback::from(move |_| selected_topic.set(None))
    };

    let on_share = {
        let copied = copied.clone();
        let range = *date_range;
        let source = *selected_source;
        let topic = *selected_topic;
        Callback::from(move |_| {
            let origin = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();
            copy_share_link(share_url(&origin, &range, source, topic), copied.clone());
        })
    };

    let current_year = chrono::Local::now().year();

    html! {
        <div class="min-h-screen bg-background">
            <Header />

            <main class="container mx-auto px-4 py-6">
                <div class="mb-6 flex flex-col md:flex-row md:items-center md:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-text-primary mb-2">
                            {"Sentiment Analysis Report"}
                        </h1>
                        <p class="text-text-secondary">
                            {"Analysis of public sentiment from social media and community sources"}
                        </p>
                    </div>

                    <div class="mt-4 md:mt-0 flex flex-col sm:flex-row items-start sm:items-center gap-3">
                        <DateRangeSelector
                            date_range={*date_range}
                            on_change={on_date_range_change}
                        />
                        <button
                            class="inline-flex items-center px-3 py-2 border border-border rounded-md bg-white text-sm font-medium text-text-primary hover:bg-background"
                            onclick={on_share}
                            aria-label="Share report"
                        >
                            {if *copied { "Copied!" } else { "Share" }}
                        </button>
                    </div>
                </div>

                <div class="mb-6">
                    <SourceFilter selected={*selected_source} on_change={on_source_change} />
                </div>

                {if report.state.is_loading() {
                    html! { <LoadingIndicator /> }
                } else {
                    html! {}
                }}

                {if let Some(message) = (*report.degraded).as_ref() {
                    html! {
                        <div class="mb-6 p-4 bg-red-50 border border-red-200 rounded-md">
                            <p class="text-danger">{message}</p>
                        </div>
                    }
                } else {
                    html! {}
                }}

                {if let Some(data) = report.state.data() {
                    let selected_topic_name = selected_topic.and_then(|id| {
                        data.topics.iter().find(|t| t.id == id).map(|t| t.name.clone())
                    });
                    html! {
                        <>
                            <div class="mb-8 grid grid-cols-1 lg:grid-cols-3 gap-6">
                                <div class="bg-white p-6 rounded-lg border border-border shadow-sm col-span-1">
                                    <h2 class="text-lg font-semibold text-text-primary mb-4">
                                        {"Sentiment Overview"}
                                    </h2>
                                    <SentimentDonut overview={data.overview} />
                                    <div class="mt-4 grid grid-cols-3 gap-2 text-center">
                                        <div>
                                            <span class="text-sm font-medium text-success">{"Positive"}</span>
                                            <p class="text-lg font-semibold">{percent_label(data.overview.positive)}</p>
                                        </div>
                                        <div>
                                            <span class="text-sm font-medium text-text-secondary">{"Neutral"}</span>
                                            <p class="text-lg font-semibold">{percent_label(data.overview.neutral)}</p>
                                        </div>
                                        <div>
                                            <span class="text-sm font-medium text-danger">{"Negative"}</span>
                                            <p class="text-lg font-semibold">{percent_label(data.overview.negative)}</p>
                                        </div>
                                    </div>
                                </div>

                                <div class="bg-white p-6 rounded-lg border border-border shadow-sm col-span-1 lg:col-span-2">
                                    <div class="flex justify-between items-center mb-4">
                                        <h2 class="text-lg font-semibold text-text-primary">
                                            {"Sentiment Timeline"}
                                        </h2>
                                        {if let Some(name) = selected_topic_name {
                                            html! {
                                                <div class="flex items-center">
                                                    <span class="text-sm text-text-secondary mr-2">
                                                        {"Filtered by:"}
                                                    </span>
                                                    <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-50 text-primary">
                                                        {name}
                                                        <button
                                                            class="ml-1.5 text-primary hover:text-primary-dark"
                                                            onclick={clear_topic.clone()}
                                                        >
                                                            {"×"}
                                                        </button>
                                                    </span>
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }}
                                    </div>
                                    <SentimentTimelineChart data={data.timeline.clone()} />
                                </div>
                            </div>

                            <div class="mb-8 bg-white p-6 rounded-lg border border-border shadow-sm">
                                <h2 class="text-lg font-semibold text-text-primary mb-4">
                                    {"Trending Topics"}
                                </h2>
                                <p class="text-text-secondary text-sm mb-4">
                                    {"Click on any topic to filter the sentiment data. Size indicates frequency of mentions."}
                                </p>
                                <div class="min-h-64 flex items-center justify-center">
                                    <TagCloud
                                        topics={data.topics.clone()}
                                        selected_topic={*selected_topic}
                                        on_select_topic={on_topic_select}
                                    />
                                </div>
                            </div>

                            <SourceBreakdownPanels sources={data.sources} />

                            <div class="flex justify-between items-center">
                                <Link<Route>
                                    to={Route::DashboardHome}
                                    classes="inline-flex items-center text-primary hover:text-primary-dark"
                                >
                                    {"← Back to Dashboard"}
                                </Link<Route>>
                                <Link<Route>
                                    to={Route::DataAnalysis}
                                    classes="inline-flex items-center text-primary hover:text-primary-dark"
                                >
                                    {"View Full Data Analysis →"}
                                </Link<Route>>
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }}
            </main>

            <footer class="bg-white border-t border-border py-4 mt-8">
                <div class="container mx-auto px-4">
                    <p class="text-center text-text-secondary text-sm">
                        {format!("© {current_year} Crime Analyzer. All rights reserved.")}
                    </p>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange {
            start_date: NaiveDate::from_ymd_opt(2023, 7, 10).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2023, 7, 17).expect("valid date"),
        }
    }

    #[test]
    fn share_urls_carry_the_current_filters() {
        let url = share_url(
            "https://crime.example.org",
            &range(),
            SentimentSource::Social,
            Some(3),
        );
        assert_eq!(
            url,
            "https://crime.example.org/sentiment-analysis-report?start=2023-07-10&end=2023-07-17&source=social&topic=3"
        );
    }

    #[test]
    fn share_urls_omit_the_topic_when_none_selected() {
        let url = share_url("http://localhost:8080", &range(), SentimentSource::All, None);
        assert!(url.ends_with("source=all"));
        assert!(!url.contains("topic="));
    }
}

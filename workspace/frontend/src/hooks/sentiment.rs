use common::DateRange;
use common::fetch::{FetchState, RequestSequence};
use common::models::{SentimentReportData, SentimentSource};
use common::wire;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::sentiment;
use crate::mock_data;

/// Handles owned by the sentiment-report page.
///
/// Unlike the other pages this one degrades instead of failing: on any fetch
/// error the state still becomes `Success` with the baked-in sample report,
/// and `degraded` carries the banner message shown above it. The enum
/// therefore never reaches `Error` here.
pub struct SentimentReportHandle {
    pub state: UseStateHandle<FetchState<SentimentReportData>>,
    pub degraded: UseStateHandle<Option<String>>,
    pub refetch: Callback<()>,
}

/// Fetch the sentiment report for the selected window.
///
/// Two sequential requests: the percentage split first, then the word cloud.
/// Source and topic changes re-query; server-side filtering for them is not
/// wired up yet.
#[hook]
pub fn use_sentiment_report(
    range: DateRange,
    source: SentimentSource,
    topic: Option<u32>,
) -> SentimentReportHandle {
    let state = use_state(|| FetchState::Loading);
    let degraded = use_state(|| Option::<String>::None);
    let requests = use_memo((), |_| RequestSequence::new());

    let refetch = {
        let state = state.clone();
        let degraded = degraded.clone();
        let requests = requests.clone();
        use_callback((range, source, topic), move |_: (), deps| {
            let (range, source, _topic) = *deps;
            let state = state.clone();
            let degraded = degraded.clone();
            let requests = requests.clone();
            let ticket = requests.begin();

            log::debug!(
                "Loading sentiment report: {}..{}, source={}",
                range.start_iso(),
                range.end_iso(),
                source.value()
            );
            state.set(FetchState::Loading);
            degraded.set(None);
            spawn_local(async move {
                let outcome = async {
                    let percentages = sentiment::get_sentiment_percentage(&range).await?;
                    let cloud = sentiment::get_word_cloud().await?;
                    Ok::<_, String>(wire::assemble_report(percentages, cloud))
                }
                .await;

                if !requests.is_current(ticket) {
                    log::debug!("Dropping stale sentiment response");
                    return;
                }
                match outcome {
                    Ok(report) => {
                        degraded.set(None);
                        state.set(FetchState::Success(report));
                    }
                    Err(err) => {
                        log::error!("Failed to fetch sentiment data: {err}");
                        degraded.set(Some(
                            "Failed to load sentiment data. Please try again later.".to_string(),
                        ));
                        state.set(FetchState::Success(mock_data::sample_report()));
                    }
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with((range, source, topic), move |_| {
            refetch.emit(());
            || ()
        });
    }

    SentimentReportHandle { state, degraded, refetch }
}

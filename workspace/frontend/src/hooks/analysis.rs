use common::date_range;
use common::fetch::{FetchState, RequestSequence};
use common::models::{AnalysisData, AnalysisFilters};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::crime;

/// Fetch the analysis charts for the current filter selection.
///
/// Crime type and data source re-trigger the fetch when they change, but the
/// endpoint is only window-scoped so far; the request carries the resolved
/// date range alone.
#[hook]
pub fn use_analysis_data(
    filters: AnalysisFilters,
) -> (UseStateHandle<FetchState<AnalysisData>>, Callback<()>) {
    let state = use_state(|| FetchState::Loading);
    let requests = use_memo((), |_| RequestSequence::new());

    let refetch = {
        let state = state.clone();
        let requests = requests.clone();
        use_callback(filters, move |_: (), filters| {
            let state = state.clone();
            let requests = requests.clone();
            let range = date_range::resolve(filters.date_range);
            let ticket = requests.begin();

            log::debug!(
                "Loading analysis data: type={}, source={}, window={}",
                filters.crime_type.value(),
                filters.data_source.value(),
                filters.date_range
            );
            state.set(FetchState::Loading);
            spawn_local(async move {
                let outcome = crime::get_chart_data(&range).await;
                if !requests.is_current(ticket) {
                    log::debug!("Dropping stale chart-data response");
                    return;
                }
                match outcome {
                    Ok(data) => state.set(FetchState::Success(data.into_analysis())),
                    Err(err) => {
                        log::error!("Failed to fetch chart data: {err}");
                        state.set(FetchState::Error(
                            "Failed to load data. Please try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(filters, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (state, refetch)
}

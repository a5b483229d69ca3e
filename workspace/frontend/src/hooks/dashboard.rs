use common::date_range::{self, RangeKey};
use common::fetch::{FetchState, RequestSequence};
use common::models::DashboardData;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::crime;

/// Fetch the dashboard-home payload for the selected time window.
///
/// Returns the fetch state and a `refetch` callback for the retry action.
#[hook]
pub fn use_dashboard_data(
    range_key: RangeKey,
) -> (UseStateHandle<FetchState<DashboardData>>, Callback<()>) {
    let state = use_state(|| FetchState::Loading);
    let requests = use_memo((), |_| RequestSequence::new());

    let refetch = {
        let state = state.clone();
        let requests = requests.clone();
        use_callback(range_key, move |_: (), range_key| {
            let state = state.clone();
            let requests = requests.clone();
            let range = date_range::resolve(*range_key);
            let ticket = requests.begin();

            state.set(FetchState::Loading);
            spawn_local(async move {
                let outcome = crime::get_crime_counts(&range).await;
                if !requests.is_current(ticket) {
                    log::debug!("Dropping stale crime-counts response");
                    return;
                }
                match outcome {
                    Ok(data) => state.set(FetchState::Success(data.into_dashboard())),
                    Err(err) => {
                        log::error!("Failed to fetch dashboard data: {err}");
                        state.set(FetchState::Error(
                            "Failed to load dashboard data. Please try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(range_key, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (state, refetch)
}

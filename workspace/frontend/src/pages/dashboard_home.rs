use common::date_range::RangeKey;
use common::fetch::FetchState;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::map_visualization::MapVisualization;
use crate::components::dashboard::metric_cards::MetricCards;
use crate::components::dashboard::recent_activity::RecentActivity;
use crate::components::dashboard::time_filter::TimeFilterSelector;
use crate::components::error::ErrorDisplay;
use crate::components::header::Header;
use crate::components::loading::{CardSkeletonGrid, ChartSkeleton};
use crate::hooks::dashboard::use_dashboard_data;
use crate::router::Route;

/// Landing view: headline metrics, the hotspot map and the activity feed
/// for the selected time window.
#[function_component(DashboardHome)]
pub fn dashboard_home() -> Html {
    let time_filter = use_state(|| RangeKey::Last30Days);
    let (state, refetch) = use_dashboard_data(*time_filter);

    let on_time_filter_change = {
        let time_filter = time_filter.clone();
        Callback::from(move |key: RangeKey| {
            log::debug!("Time filter changed to {key}");
            time_filter.set(key);
        })
    };

    let on_retry = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    html! {
        <div class="min-h-screen bg-background">
            <Header />

            <main class="container mx-auto px-4 py-6">
                <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-text-primary">
                            {"Crime Analytics Dashboard"}
                        </h1>
                        <p class="text-text-secondary mt-1">
                            {"Real-time insights and crime pattern analysis"}
                        </p>
                    </div>

                    <div class="flex items-center space-x-4 mt-4 md:mt-0">
                        <TimeFilterSelector
                            value={*time_filter}
                            on_change={on_time_filter_change}
                            is_loading={state.is_loading()}
                        />

                        <div class="flex space-x-2">
                            <Link<Route>
                                to={Route::DataAnalysis}
                                classes="btn btn-ghost py-2 px-3 text-sm"
                            >
                                {"Data Analysis"}
                            </Link<Route>>
                            <Link<Route>
                                to={Route::SentimentReport}
                                classes="btn btn-ghost py-2 px-3 text-sm"
                            >
                                {"Sentiment Report"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>

                {match &*state {
                    FetchState::Error(err) => html! {
                        <ErrorDisplay message={err.clone()} on_retry={Some(on_retry)} />
                    },
                    FetchState::NotStarted | FetchState::Loading => html! {
                        <>
                            <CardSkeletonGrid />
                            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-6">
                                <div class="lg:col-span-2 bg-white rounded-lg border border-border p-4">
                                    <ChartSkeleton />
                                </div>
                                <div class="bg-white rounded-lg border border-border p-4">
                                    <ChartSkeleton />
                                </div>
                            </div>
                        </>
                    },
                    FetchState::Success(data) => html! {
                        <>
                            <MetricCards metrics={data.metrics.clone()} />

                            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-6">
                                <div class="lg:col-span-2">
                                    <div class="bg-white rounded-lg border border-border overflow-hidden">
                                        <div class="p-4 border-b border-border">
                                            <h2 class="font-semibold text-text-primary">
                                                {"Crime Hotspot Map"}
                                            </h2>
                                        </div>
                                        <div class="relative" style="height: 60vh;">
                                            <MapVisualization
                                                center={data.map_data.center}
                                                hotspots={data.map_data.hotspots.clone()}
                                            />
                                        </div>
                                    </div>
                                </div>

                                <div>
                                    <div class="bg-white rounded-lg border border-border h-full">
                                        <div class="p-4 border-b border-border">
                                            <h2 class="font-semibold text-text-primary">
                                                {"Recent Activity"}
                                            </h2>
                                        </div>
                                        <RecentActivity activities={data.recent_activity.clone()} />
                                    </div>
                                </div>
                            </div>
                        </>
                    },
                }}
            </main>
        </div>
    }
}

use common::models::{AnalysisData, AnalysisFilters};
use yew::prelude::*;

use crate::components::analysis::breadcrumbs::Breadcrumbs;
use crate::components::analysis::filter_panel::FilterPanel;
use crate::components::charts::{CategoryBarChart, CrimeLineChart};
use crate::components::fetch_render::FetchRender;
use crate::components::header::Header;
use crate::components::loading::ChartSkeleton;
use crate::hooks::analysis::use_analysis_data;

/// Analysis view: filter sidebar plus the frequency and category charts.
#[function_component(DataAnalysisView)]
pub fn data_analysis_view() -> Html {
    let filters = use_state(AnalysisFilters::default);
    let (state, refetch) = use_analysis_data(*filters);

    let on_filter_change = {
        let filters = filters.clone();
        Callback::from(move |next: AnalysisFilters| filters.set(next))
    };

    let on_retry = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    let on_download = Callback::from(|_| {
        // CSV generation is not wired up; the action is a stub.
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Downloading data as CSV...");
        }
    });

    let line_chart = Callback::from(|data: AnalysisData| {
        html! { <CrimeLineChart data={data.line_chart} /> }
    });
    let bar_chart = Callback::from(|data: AnalysisData| {
        html! { <CategoryBarChart data={data.bar_chart} /> }
    });

    html! {
        <div class="min-h-screen bg-background flex flex-col">
            <Header />

            <main class="flex-1 p-6">
                <div class="max-w-7xl mx-auto">
                    <Breadcrumbs />

                    <div class="flex flex-col md:flex-row gap-6 mt-4">
                        <div class="w-full md:w-1/5">
                            <FilterPanel
                                filters={*filters}
                                on_filter_change={on_filter_change}
                            />
                        </div>

                        <div class="w-full md:w-4/5">
                            <div class="bg-white p-4 rounded-lg border border-border shadow-sm mb-6">
                                <div class="flex justify-between items-center mb-4">
                                    <h2 class="text-lg font-semibold text-text-primary">
                                        {"Crime Frequency Over Time"}
                                    </h2>
                                    <button
                                        class="btn btn-ghost py-1.5 px-3 text-sm"
                                        onclick={on_download}
                                    >
                                        {"Export CSV"}
                                    </button>
                                </div>
                                <FetchRender<AnalysisData>
                                    state={(*state).clone()}
                                    render={line_chart}
                                    on_retry={Some(on_retry.clone())}
                                    skeleton={html! { <ChartSkeleton /> }}
                                />
                            </div>

                            <div class="bg-white p-4 rounded-lg border border-border shadow-sm">
                                <div class="flex justify-between items-center mb-4">
                                    <h2 class="text-lg font-semibold text-text-primary">
                                        {"Crime Categories Comparison"}
                                    </h2>
                                </div>
                                <FetchRender<AnalysisData>
                                    state={(*state).clone()}
                                    render={bar_chart}
                                    on_retry={Some(on_retry)}
                                    skeleton={html! { <ChartSkeleton /> }}
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

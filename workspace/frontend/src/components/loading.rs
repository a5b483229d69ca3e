use yew::prelude::*;

/// Spinner with a short status line, used while a whole view is pending.
#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <div class="flex justify-center items-center py-4">
            <span class="h-8 w-8 rounded-full border-2 border-primary border-t-transparent animate-spin"></span>
            <span class="ml-3 text-text-secondary">{"Loading data..."}</span>
        </div>
    }
}

/// Pulsing placeholder block standing in for a chart.
#[function_component(ChartSkeleton)]
pub fn chart_skeleton() -> Html {
    html! {
        <div class="h-64 flex items-center justify-center">
            <div class="animate-pulse flex flex-col items-center w-full">
                <div class="h-40 w-full bg-slate-200 rounded"></div>
                <div class="mt-4 h-4 w-48 bg-slate-200 rounded"></div>
            </div>
        </div>
    }
}

/// Pulsing placeholder grid standing in for the metric cards.
#[function_component(CardSkeletonGrid)]
pub fn card_skeleton_grid() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
            {for (0..3).map(|i| html! {
                <div key={i} class="bg-white rounded-lg border border-border p-4 h-32 animate-pulse">
                    <div class="h-4 bg-slate-200 rounded w-1/3 mb-3"></div>
                    <div class="h-8 bg-slate-200 rounded w-1/2 mb-3"></div>
                    <div class="h-4 bg-slate-200 rounded w-1/4"></div>
                </div>
            })}
        </div>
    }
}

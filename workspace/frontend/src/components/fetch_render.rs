use common::FetchState;
use yew::prelude::*;

use super::error::ErrorDisplay;
use super::loading::LoadingIndicator;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Markup shown while loading; defaults to the spinner.
    #[prop_or_default]
    pub skeleton: Option<Html>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.skeleton == other.skeleton
    }
}

/// Component that handles rendering based on FetchState
/// - Loading: shows the skeleton (or a spinner)
/// - Error: shows error display with optional retry
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => match &props.skeleton {
            Some(skeleton) => skeleton.clone(),
            None => html! { <LoadingIndicator /> },
        },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={props.on_retry.clone()} />
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}

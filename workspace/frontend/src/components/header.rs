use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session;

/// Page title shown next to the logo for the current route.
fn contextual_title(route: Option<&Route>) -> &'static str {
    match route {
        Some(Route::Home) | Some(Route::DashboardHome) => "Dashboard",
        Some(Route::DataAnalysis) => "Data Analysis",
        Some(Route::SentimentReport) => "Sentiment Analysis Report",
        Some(Route::Login) => "User Authentication",
        _ => "Analytics Dashboard",
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator().unwrap();
    let authenticated = session::has_auth_cookie();

    let nav_link = |target: Route, label: &str| {
        let active = route.as_ref() == Some(&target);
        let class = if active {
            "px-3 py-2 text-sm font-medium text-primary border-b-2 border-primary"
        } else {
            "px-3 py-2 text-sm font-medium text-text-secondary hover:text-primary"
        };
        html! { <Link<Route> to={target} classes={class}>{label}</Link<Route>> }
    };

    let on_sign_out = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session::clear_auth_cookie();
            log::info!("Signed out");
            navigator.push(&Route::Login);
        })
    };

    html! {
        <header class="bg-white border-b border-border shadow-sm">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <div class="flex items-center space-x-6">
                    <Link<Route> to={Route::DashboardHome} classes="flex items-center">
                        <span class="font-bold text-lg text-primary">{"Crime Analyzer"}</span>
                    </Link<Route>>
                    <span class="hidden md:block text-sm text-text-tertiary">
                        {contextual_title(route.as_ref())}
                    </span>
                </div>

                <nav class="flex items-center space-x-1">
                    {nav_link(Route::DashboardHome, "Dashboard")}
                    {nav_link(Route::DataAnalysis, "Data Analysis")}
                    {nav_link(Route::SentimentReport, "Sentiment Report")}
                    {if authenticated {
                        html! {
                            <button
                                class="ml-3 px-3 py-2 text-sm font-medium text-text-secondary hover:text-danger"
                                onclick={on_sign_out}
                            >
                                {"Sign Out"}
                            </button>
                        }
                    } else {
                        html! {
                            <Link<Route>
                                to={Route::Login}
                                classes="ml-3 px-3 py-2 text-sm font-medium text-text-secondary hover:text-primary"
                            >
                                {"Sign In"}
                            </Link<Route>>
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}

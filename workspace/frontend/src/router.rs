use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::dashboard_home::DashboardHome;
use crate::pages::data_analysis::DataAnalysisView;
use crate::pages::login::UserAuthentication;
use crate::pages::not_found::NotFound;
use crate::pages::sentiment_report::SentimentAnalysisReport;

/// The fixed set of named views. Deep links are by path only; none of the
/// pages read filter state back out of the URL on mount.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard-home")]
    DashboardHome,
    #[at("/data-analysis-view")]
    DataAnalysis,
    #[at("/sentiment-analysis-report")]
    SentimentReport,
    #[at("/user-authentication")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Home | Route::DashboardHome => {
            html! { <DashboardHome /> }
        }
        Route::DataAnalysis => {
            html! { <DataAnalysisView /> }
        }
        Route::SentimentReport => {
            html! { <SentimentAnalysisReport /> }
        }
        Route::Login => {
            html! { <UserAuthentication /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFound /> }
        }
    }
}

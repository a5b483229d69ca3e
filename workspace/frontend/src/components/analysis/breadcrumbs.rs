use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Breadcrumbs)]
pub fn breadcrumbs() -> Html {
    html! {
        <nav class="flex items-center text-sm text-text-secondary" aria-label="Breadcrumb">
            <Link<Route> to={Route::DashboardHome} classes="hover:text-primary">
                {"Dashboard"}
            </Link<Route>>
            <span class="mx-2">{"/"}</span>
            <span class="text-text-primary font-medium">{"Data Analysis"}</span>
        </nav>
    }
}

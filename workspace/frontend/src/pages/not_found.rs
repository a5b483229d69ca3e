use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="text-center p-8 max-w-md">
                <h1 class="text-4xl font-bold text-text-primary mb-2">{"404"}</h1>
                <h2 class="text-2xl font-semibold text-text-primary mb-4">{"Page Not Found"}</h2>
                <p class="text-text-secondary mb-8">
                    {"The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."}
                </p>
                <Link<Route>
                    to={Route::DashboardHome}
                    classes="btn btn-primary px-6 py-3 inline-flex items-center"
                >
                    {"Go to Dashboard"}
                </Link<Route>>
            </div>
        </div>
    }
}

//! Crime Analyzer frontend.
//!
//! A Yew single-page dashboard over the remote crime-analytics API: a home
//! view with metrics, hotspot map and recent activity, a data-analysis view
//! with filterable charts, a sentiment report, and a demo login screen.

use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
mod components;
mod hooks;
mod mock_data;
mod pages;
pub mod router;
pub mod session;
pub mod settings;

use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first so the logger picks up the configured level.
    settings::init_settings();
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Crime Analyzer frontend starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

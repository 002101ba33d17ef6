use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod calculator;
mod navigation;
mod components {
    pub mod dark_mode_toggle;
    pub mod revenue_calculator;
    pub mod slide_deck;
}
mod pages {
    pub mod faircut;
    pub mod landing;
    pub mod napkin;
    pub mod not_found;
}

use components::dark_mode_toggle::DarkModeToggle;
use pages::{
    faircut::FaircutLandingPage,
    landing::Landing,
    napkin::NapkinStrategy,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/faircut")]
    Faircut,
    #[at("/napkin")]
    Napkin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Faircut => {
            info!("Rendering Faircut page");
            html! { <FaircutLandingPage /> }
        },
        Route::Napkin => {
            info!("Rendering Napkin Strategy page");
            html! { <NapkinStrategy /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter basename={config::ROUTER_BASENAME}>
            <DarkModeToggle />
            <Switch<Route> render={switch} />
            <style>
                {r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    overflow: hidden;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                html.dark body {
                    background: #0f172a;
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!("Logger unavailable:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

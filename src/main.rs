use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use stylist::css;
use stylist::yew::Global;

mod config;
mod content;
mod hooks;
mod loading;
mod reveal;
mod typewriter;
mod components {
    pub mod hero;
    pub mod about;
    pub mod certifications;
    pub mod footer;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering portfolio page");
            html! { <Portfolio /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    min-height: 100vh;
                    background: #111827;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }

                *, *::before, *::after {
                    box-sizing: border-box;
                }

                h1, h2, h3, p {
                    margin: 0;
                }
            "#)} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}

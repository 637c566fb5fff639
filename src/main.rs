use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod motion {
    pub mod counter;
    pub mod marquee;
    pub mod pointer;
    pub mod reveal;
    pub mod scroll;
    pub mod spring;
    pub mod viewport;
}
mod components {
    pub mod button;
    pub mod counter;
    pub mod dom;
    pub mod icons;
    pub mod logo;
    pub mod marquee;
    pub mod raf;
    pub mod scroll_progress;
    pub mod spotlight;
    pub mod text_reveal;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use components::scroll_progress::ScrollProgressBar;
use pages::{
    landing::Landing,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollProgressBar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

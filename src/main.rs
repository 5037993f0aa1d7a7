use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod registry;
mod switcher;
mod feed;
mod cards;
mod embed;
mod session;
mod storage;
mod state;
mod components {
    pub mod card_grid;
    pub mod download_modal;
    pub mod nav;
    pub mod notification;
    pub mod video_modal;
}
mod pages {
    pub mod home;
    pub mod subscribe;
    pub mod not_found;
}

use pages::{
    home::Home,
    subscribe::Subscribe,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/subscribe")]
    Subscribe,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Subscribe => {
            info!("Rendering Subscribe page");
            html! { <Subscribe /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting GameFlip");
    yew::Renderer::<App>::new().render();
}

use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod effects {
    pub mod cursor;
    pub mod waves;
}
mod components {
    pub mod lead_form;
}
mod pages {
    pub mod landing;
}

use config::SiteConfig;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing config={SiteConfig::new()} /> }
        }
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

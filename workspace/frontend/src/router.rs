use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section_page::SectionPage;
use crate::pages::not_found::NotFound;
use crate::pages::presentation::{LivePresentation, StaticPresentation};
use crate::settings::{self, DataSource};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/static")]
    Static,
    #[at("/section/:id")]
    Section { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => match settings::get_settings().data_source {
            DataSource::Api => {
                log::trace!("Rendering presentation from the API");
                html! { <LivePresentation /> }
            }
            DataSource::Static => {
                log::trace!("Rendering presentation from static content");
                html! { <StaticPresentation /> }
            }
        },
        Route::Static => {
            log::trace!("Rendering static presentation");
            html! { <StaticPresentation /> }
        }
        Route::Section { id } => {
            log::trace!("Rendering single section: {}", id);
            html! { <SectionPage id={id} /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFound /> }
        }
    }
}

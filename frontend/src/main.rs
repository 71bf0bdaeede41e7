use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod scroll {
    pub mod navigator;
    pub mod tracker;
}
mod components {
    pub mod cards;
    pub mod nav;
    pub mod portrait;
    pub mod section_header;
}
mod pages {
    pub mod folio;
}

use content::Folio;
use pages::folio::FolioPage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub folio: Rc<Folio>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    info!("Rendering folio page");
    html! {
        <FolioPage folio={props.folio.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match Folio::embedded() {
        Ok(folio) => {
            info!(
                "Loaded folio content: {} pillars, {} career entries, {} impact plans",
                folio.pillars.len(),
                folio.career.len(),
                folio.impact.plans.len()
            );
            yew::Renderer::<App>::with_props(AppProps {
                folio: Rc::new(folio),
            })
            .render();
        }
        Err(err) => error!("Not mounting page, folio content is invalid: {}", err),
    }
}

use dioxus::logger::tracing;
use dioxus::prelude::*;

use views::{Home, Imprint};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/impressum")]
    Imprint {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SITE_CONFIG: &str = include_str!("../site.json");

fn main() {
    install_panic_hook();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

fn load_site_config() -> ui::SiteConfig {
    match ui::SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("startup: invalid site.json, using defaults: {err:#}");
            ui::SiteConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_site_config);

    rsx! {
        // Global app resources
        ui::SiteTheme {}
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

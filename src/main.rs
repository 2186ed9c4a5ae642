use dioxus::prelude::*;
use blue_lion::{ Route, SiteConfig };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).ok();
    }

    match SiteConfig::load() {
        Ok(config) => {
            log::info!(
                "Site config: image domains {:?}, CUSTOM_KEY={}",
                config.images.domains,
                config.env.custom_key
            );
        }
        Err(e) => log::error!("Failed to load site config: {}", e),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Blue Lion Booking Engine" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}

use dioxus::prelude::*;
use ui::services::config::init_global_config_from_json;
use ui::SettingsPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");
// Page timing and masking, bundled at compile time
const SETTINGS_PAGE_CONFIG: &str = include_str!("../assets/settings_page.json");

fn main() {
    if let Err(e) = init_global_config_from_json(SETTINGS_PAGE_CONFIG) {
        ui::console_warn!("[Settings] Using default page configuration: {}", e);
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/settings")]
    Settings {},
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            SettingsPage {}
        }
    }
}

#[component]
fn Settings() -> Element {
    rsx! {
        SettingsPage {}
    }
}

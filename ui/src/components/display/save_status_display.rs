use crate::features::settings::SaveStatus;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SaveStatusDisplayProps {
    pub status: SaveStatus,
}

#[component]
pub fn SaveStatusDisplay(props: SaveStatusDisplayProps) -> Element {
    if props.status.is_idle() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "save-status-container",
            role: "status",
            p {
                class: "{props.status.css_class()}",
                "{props.status.message()}"
            }
        }
    }
}

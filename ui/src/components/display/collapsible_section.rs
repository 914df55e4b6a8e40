use crate::features::settings::SettingsSection;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CollapsibleSectionProps {
    pub section: SettingsSection,
    pub expanded: bool,
    pub on_toggle: EventHandler<SettingsSection>,
    pub children: Element,
}

/// Settings panel whose body is shown only while `expanded` is set
#[component]
pub fn CollapsibleSection(props: CollapsibleSectionProps) -> Element {
    let section = props.section;
    let content_id = format!("settings-section-{}", section.key());

    rsx! {
        div {
            class: "settings-section",

            // Section Header/Toggle Button
            button {
                class: "settings-section-header",
                r#type: "button",
                onclick: move |_| props.on_toggle.call(section),
                "aria-expanded": "{props.expanded}",
                "aria-controls": "{content_id}",

                span {
                    class: "settings-section-title",
                    "{section.title()}"
                }
                span {
                    class: "settings-section-icon",
                    if props.expanded { "▲" } else { "▼" }
                }
            }

            // Section Content
            if props.expanded {
                div {
                    id: "{content_id}",
                    class: "settings-section-body",
                    {props.children}
                }
            }
        }
    }
}

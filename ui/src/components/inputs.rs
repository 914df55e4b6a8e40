//! Input components for the settings form

use crate::features::settings::{ApiKeyField, SettingsField};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SettingsInputProps {
    pub field: SettingsField,
    pub value: String,
    pub label_class: String,
    pub input_class: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn SettingsInput(props: SettingsInputProps) -> Element {
    let name = props.field.name();

    rsx! {
        div {
            class: "input-section",
            label {
                class: "{props.label_class}",
                r#for: "{name}",
                "{props.field.label()}"
            }
            input {
                id: "{name}",
                name: "{name}",
                class: "{props.input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: "{props.field.placeholder()}",
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SecretInputProps {
    pub key_field: ApiKeyField,
    /// Text shown in the input, already masked when hidden
    pub value: String,
    pub visible: bool,
    pub input_class: String,
    pub on_change: EventHandler<String>,
    pub on_toggle_visibility: EventHandler<ApiKeyField>,
}

/// API key input with a reveal toggle.
///
/// Uses a text input rather than `type="password"` so the masked form keeps
/// its readable prefix.
#[component]
pub fn SecretInput(props: SecretInputProps) -> Element {
    let field = props.key_field.field();
    let name = field.name();
    let key_field = props.key_field;
    let toggle_label = if props.visible {
        format!("Hide {}", field.label())
    } else {
        format!("Show {}", field.label())
    };

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{name}",
                "{field.label()}"
            }
            div {
                class: "secret-input",
                input {
                    id: "{name}",
                    name: "{name}",
                    class: "{props.input_class}",
                    r#type: "text",
                    autocomplete: "off",
                    spellcheck: "false",
                    value: "{props.value}",
                    placeholder: "{field.placeholder()}",
                    oninput: move |event| props.on_change.call(event.value())
                }
                button {
                    class: "visibility-toggle",
                    r#type: "button",
                    "aria-label": "{toggle_label}",
                    "aria-pressed": "{props.visible}",
                    onclick: move |_| props.on_toggle_visibility.call(key_field),
                    if props.visible { "🙈" } else { "👁" }
                }
            }
        }
    }
}

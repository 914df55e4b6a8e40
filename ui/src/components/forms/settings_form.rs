use dioxus::prelude::*;

use crate::components::{
    display::{CollapsibleSection, SaveStatusDisplay},
    inputs::{SecretInput, SettingsInput},
};
use crate::console_debug;
use crate::features::settings::*;

#[derive(Props, PartialEq, Clone)]
pub struct SettingsFormProps {
    pub state: Signal<SettingsState>,
    pub dispatch: EventHandler<SettingsAction>,
    pub on_submit: EventHandler<()>,
}

/// Render one field: API keys get the masked input with a reveal toggle
fn render_field(
    state: Signal<SettingsState>,
    dispatch: EventHandler<SettingsAction>,
    field: SettingsField,
) -> Element {
    let value = state.read().display_value(field);

    match field.api_key() {
        Some(key_field) => rsx! {
            SecretInput {
                key: "{field.name()}",
                key_field: key_field,
                value: value,
                visible: state.read().visibility.is_visible(key_field),
                input_class: match key_field {
                    ApiKeyField::ElevenLabs => "input-field secret-field highlighted".to_string(),
                    ApiKeyField::OpenAi => "input-field secret-field monospace".to_string(),
                },
                on_change: move |data: String| {
                    dispatch.call(SettingsAction::ApplyInput(field, data));
                },
                on_toggle_visibility: move |key_field: ApiKeyField| {
                    dispatch.call(SettingsAction::ToggleVisibility(key_field));
                }
            }
        },
        None => rsx! {
            SettingsInput {
                key: "{field.name()}",
                field: field,
                value: value,
                label_class: match field {
                    SettingsField::ComfyServerPort => "input-label accent".to_string(),
                    _ => "input-label".to_string(),
                },
                input_class: "input-field".to_string(),
                on_change: move |data: String| {
                    dispatch.call(SettingsAction::ApplyInput(field, data));
                }
            }
        },
    }
}

#[component]
pub fn SettingsForm(props: SettingsFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;

    rsx! {
        form {
            class: "settings-form",
            onsubmit: move |event| {
                event.prevent_default();
                on_submit.call(());
            },

            for section in SettingsSection::ALL {
                CollapsibleSection {
                    key: "{section.key()}",
                    section: section,
                    expanded: state.read().is_expanded(section),
                    on_toggle: move |section: SettingsSection| {
                        console_debug!("[Settings] Toggling section {}", section.key());
                        dispatch.call(SettingsAction::ToggleSection(section));
                    },
                    for field in section.fields().iter().copied() {
                        {render_field(state, dispatch, field)}
                    }
                }
            }

            // Save Button
            div {
                class: "button-section",
                button {
                    class: "save-button",
                    r#type: "submit",
                    span { class: "save-icon", "💾" }
                    span { "Save Settings" }
                }
            }

            SaveStatusDisplay {
                status: state.read().save_status
            }
        }
    }
}

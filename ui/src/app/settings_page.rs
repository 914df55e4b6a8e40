use crate::console_info;
use dioxus::prelude::*;

use crate::components::forms::SettingsForm;
use crate::features::settings::{SettingsAction, SettingsState};
use crate::services::config::global_config;
use crate::services::save::{simulate_save, GlooSleeper};

const SETTINGS_PAGE_CSS: Asset = asset!("/assets/styling/settings_page.css");

#[component]
pub fn SettingsPage() -> Element {
    let config = use_hook(global_config);

    // Page state is recreated on every load and dropped on navigation
    let mut state = use_signal(move || SettingsState::with_masking(config.masking));

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: SettingsAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Overlapping saves are not guarded against; each one runs to completion
    let on_submit = move |_: ()| {
        let form = state.read().form.clone();
        let timing = config.timing;
        console_info!("[Settings] Save requested");

        spawn(async move {
            simulate_save(&form, timing, &GlooSleeper, |status| {
                dispatch.call(SettingsAction::SetSaveStatus(status));
            })
            .await;
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SETTINGS_PAGE_CSS }
        document::Title { "Settings" }

        div {
            class: "settings-page",
            div {
                class: "settings-container",
                h1 {
                    class: "settings-title",
                    "Settings"
                }

                SettingsForm {
                    state: state,
                    dispatch: dispatch,
                    on_submit: on_submit
                }
            }
        }
    }
}

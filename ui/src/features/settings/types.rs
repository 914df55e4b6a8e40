// Core types for the settings page - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::masking::{mask_api_key_with, reconcile_masked_edit};
use crate::services::config::MaskingConfig;
use crate::services::errors::{SettingsError, SettingsResult};

pub const SAVING_MESSAGE: &str = "Saving...";
pub const SAVED_MESSAGE: &str = "Settings saved successfully!";

/// Editable fields on the settings page, keyed by their DOM `name`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SettingsField {
    ComfyServerUrl,
    ComfyServerPort,
    ElevenLabsApiKey,
    OpenaiApiKey,
}

impl SettingsField {
    pub const ALL: [SettingsField; 4] = [
        SettingsField::ComfyServerUrl,
        SettingsField::ComfyServerPort,
        SettingsField::ElevenLabsApiKey,
        SettingsField::OpenaiApiKey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SettingsField::ComfyServerUrl => "comfyServerUrl",
            SettingsField::ComfyServerPort => "comfyServerPort",
            SettingsField::ElevenLabsApiKey => "elevenLabsApiKey",
            SettingsField::OpenaiApiKey => "openaiApiKey",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::ComfyServerUrl => "ComfyUI Server URL",
            SettingsField::ComfyServerPort => "ComfyUI Server Port",
            SettingsField::ElevenLabsApiKey => "ElevenLabs API Key",
            SettingsField::OpenaiApiKey => "OpenAI API Key",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SettingsField::ComfyServerUrl => "https://example.proxy.runpod.net",
            SettingsField::ComfyServerPort => "8188",
            SettingsField::ElevenLabsApiKey => "sk_...",
            SettingsField::OpenaiApiKey => "sk-proj-...",
        }
    }

    /// The API key this field holds, if it is one of the secret fields
    pub fn api_key(&self) -> Option<ApiKeyField> {
        match self {
            SettingsField::ElevenLabsApiKey => Some(ApiKeyField::ElevenLabs),
            SettingsField::OpenaiApiKey => Some(ApiKeyField::OpenAi),
            _ => None,
        }
    }
}

impl FromStr for SettingsField {
    type Err = SettingsError;

    fn from_str(name: &str) -> SettingsResult<Self> {
        SettingsField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| SettingsError::UnknownField {
                name: name.to_string(),
            })
    }
}

/// Fields whose display can be masked and revealed
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ApiKeyField {
    ElevenLabs,
    OpenAi,
}

impl ApiKeyField {
    pub const ALL: [ApiKeyField; 2] = [ApiKeyField::ElevenLabs, ApiKeyField::OpenAi];

    pub fn field(&self) -> SettingsField {
        match self {
            ApiKeyField::ElevenLabs => SettingsField::ElevenLabsApiKey,
            ApiKeyField::OpenAi => SettingsField::OpenaiApiKey,
        }
    }
}

impl FromStr for ApiKeyField {
    type Err = SettingsError;

    fn from_str(name: &str) -> SettingsResult<Self> {
        let field: SettingsField = name.parse()?;
        field.api_key().ok_or_else(|| SettingsError::NotAnApiKey {
            name: name.to_string(),
        })
    }
}

/// Collapsible groups on the settings page
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SettingsSection {
    ComfyUi,
    ElevenLabs,
    Llm,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 3] = [
        SettingsSection::ComfyUi,
        SettingsSection::ElevenLabs,
        SettingsSection::Llm,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SettingsSection::ComfyUi => "comfyui",
            SettingsSection::ElevenLabs => "elevenlabs",
            SettingsSection::Llm => "llm",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SettingsSection::ComfyUi => "ComfyUI",
            SettingsSection::ElevenLabs => "ElevenLabs",
            SettingsSection::Llm => "LLM",
        }
    }

    /// Fields rendered inside this section, in display order
    pub fn fields(&self) -> &'static [SettingsField] {
        match self {
            SettingsSection::ComfyUi => &[
                SettingsField::ComfyServerUrl,
                SettingsField::ComfyServerPort,
            ],
            SettingsSection::ElevenLabs => &[SettingsField::ElevenLabsApiKey],
            SettingsSection::Llm => &[SettingsField::OpenaiApiKey],
        }
    }
}

impl FromStr for SettingsSection {
    type Err = SettingsError;

    fn from_str(key: &str) -> SettingsResult<Self> {
        SettingsSection::ALL
            .into_iter()
            .find(|section| section.key() == key)
            .ok_or_else(|| SettingsError::UnknownSection {
                key: key.to_string(),
            })
    }
}

/// Values of the editable fields. Serializes with the DOM field names, which is
/// the shape a real save would submit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub comfy_server_url: String,
    pub comfy_server_port: String,
    pub eleven_labs_api_key: String,
    pub openai_api_key: String,
}

impl FormData {
    pub fn get(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::ComfyServerUrl => &self.comfy_server_url,
            SettingsField::ComfyServerPort => &self.comfy_server_port,
            SettingsField::ElevenLabsApiKey => &self.eleven_labs_api_key,
            SettingsField::OpenaiApiKey => &self.openai_api_key,
        }
    }

    pub fn set(&mut self, field: SettingsField, value: String) {
        match field {
            SettingsField::ComfyServerUrl => self.comfy_server_url = value,
            SettingsField::ComfyServerPort => self.comfy_server_port = value,
            SettingsField::ElevenLabsApiKey => self.eleven_labs_api_key = value,
            SettingsField::OpenaiApiKey => self.openai_api_key = value,
        }
    }

    /// Build the JSON body a real save would send
    pub fn to_payload(&self) -> SettingsResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandedSections {
    pub comfyui: bool,
    pub elevenlabs: bool,
    pub llm: bool,
}

impl ExpandedSections {
    pub fn is_expanded(&self, section: SettingsSection) -> bool {
        match section {
            SettingsSection::ComfyUi => self.comfyui,
            SettingsSection::ElevenLabs => self.elevenlabs,
            SettingsSection::Llm => self.llm,
        }
    }

    pub fn toggle(&mut self, section: SettingsSection) {
        let flag = match section {
            SettingsSection::ComfyUi => &mut self.comfyui,
            SettingsSection::ElevenLabs => &mut self.elevenlabs,
            SettingsSection::Llm => &mut self.llm,
        };
        *flag = !*flag;
    }
}

impl Default for ExpandedSections {
    fn default() -> Self {
        Self {
            comfyui: true,
            elevenlabs: true,
            llm: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    pub eleven_labs_api_key: bool,
    pub openai_api_key: bool,
}

impl PasswordVisibility {
    pub fn is_visible(&self, key: ApiKeyField) -> bool {
        match key {
            ApiKeyField::ElevenLabs => self.eleven_labs_api_key,
            ApiKeyField::OpenAi => self.openai_api_key,
        }
    }

    pub fn toggle(&mut self, key: ApiKeyField) {
        let flag = match key {
            ApiKeyField::ElevenLabs => &mut self.eleven_labs_api_key,
            ApiKeyField::OpenAi => &mut self.openai_api_key,
        };
        *flag = !*flag;
    }
}

/// Status line shown under the save button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

impl SaveStatus {
    pub fn message(&self) -> &'static str {
        match self {
            SaveStatus::Idle => "",
            SaveStatus::Saving => SAVING_MESSAGE,
            SaveStatus::Saved => SAVED_MESSAGE,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SaveStatus::Idle)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SaveStatus::Saved => "save-status success",
            _ => "save-status pending",
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsAction {
    /// Replace a field's stored value verbatim
    UpdateField(SettingsField, String),
    /// Apply the raw text of an input event; masked API keys are reconciled
    /// against the stored value first
    ApplyInput(SettingsField, String),
    ToggleSection(SettingsSection),
    ToggleVisibility(ApiKeyField),
    SetSaveStatus(SaveStatus),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsState {
    pub form: FormData,
    pub expanded: ExpandedSections,
    pub visibility: PasswordVisibility,
    pub save_status: SaveStatus,
    pub masking: MaskingConfig,
}

impl SettingsState {
    pub fn with_masking(masking: MaskingConfig) -> Self {
        Self {
            masking,
            ..Self::default()
        }
    }

    /// Reduces the state based on an action
    pub fn reduce(mut self, action: SettingsAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    pub fn reduce_in_place(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::UpdateField(field, value) => {
                self.form.set(field, value);
            }
            SettingsAction::ApplyInput(field, edited) => {
                let value = if self.is_masked(field) {
                    let displayed = self.display_value(field);
                    reconcile_masked_edit(self.form.get(field), &displayed, &edited)
                } else {
                    edited
                };
                self.form.set(field, value);
            }
            SettingsAction::ToggleSection(section) => {
                self.expanded.toggle(section);
                tracing::debug!(
                    section = section.key(),
                    expanded = self.expanded.is_expanded(section),
                    "section toggled"
                );
            }
            SettingsAction::ToggleVisibility(key) => {
                self.visibility.toggle(key);
            }
            SettingsAction::SetSaveStatus(status) => {
                tracing::debug!(from = ?self.save_status, to = ?status, "save status changed");
                self.save_status = status;
            }
        }
    }

    pub fn is_expanded(&self, section: SettingsSection) -> bool {
        self.expanded.is_expanded(section)
    }

    /// Whether the field's input currently shows masked text
    pub fn is_masked(&self, field: SettingsField) -> bool {
        field
            .api_key()
            .is_some_and(|key| !self.visibility.is_visible(key))
    }

    /// Text to render in the field's input
    pub fn display_value(&self, field: SettingsField) -> String {
        mask_api_key_with(
            self.form.get(field),
            !self.is_masked(field),
            self.masking.visible_prefix_len,
            self.masking.mask_char,
        )
    }
}

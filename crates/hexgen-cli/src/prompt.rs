//! Dialoguer-backed implementation of the core `UserPrompt` port.
//!
//! Only compiled with the `interactive` feature. Back navigation: every
//! selection list carries a final "← Back" entry (also reachable with
//! Esc), and submitting an empty text input goes back one step.

use hexgen_core::{
    application::ApplicationError,
    application::ports::{PromptReply, SelectOption, UserPrompt},
    error::HexgenResult,
};

use dialoguer::{Input, Select, theme::ColorfulTheme};

const BACK_LABEL: &str = "\u{2190} Back"; // ←

/// Interactive prompt rendered with dialoguer.
#[derive(Default)]
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserPrompt for DialoguerPrompt {
    fn select(&self, label: &str, options: &[SelectOption]) -> HexgenResult<PromptReply<String>> {
        let mut items: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        items.push(BACK_LABEL);

        let chosen = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|e| ApplicationError::Prompt {
                reason: e.to_string(),
            })?;

        Ok(match chosen {
            // Esc / q behaves like picking "← Back".
            None => PromptReply::Back,
            Some(index) if index == options.len() => PromptReply::Back,
            Some(index) => PromptReply::Value(options[index].value.clone()),
        })
    }

    fn input(&self, label: &str, placeholder: &str) -> HexgenResult<PromptReply<String>> {
        let raw: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{label} ({placeholder}, empty to go back)"))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ApplicationError::Prompt {
                reason: e.to_string(),
            })?;

        let trimmed = raw.trim();
        Ok(if trimmed.is_empty() {
            PromptReply::Back
        } else {
            PromptReply::Value(trimmed.to_string())
        })
    }
}

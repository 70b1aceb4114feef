//! dialoguer-backed terminal implementation of the prompt port.

use dialoguer::{Input, Password, Select};

use crate::domain::AppError;
use crate::ports::{InputQuestion, PasswordQuestion, PromptPort, SelectQuestion};

/// Interactive prompts on the user's terminal. Validation failures re-prompt
/// inline with the validator's message; a terminal-level failure (no tty,
/// interrupt) aborts with `AppError::Prompt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt
    }
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::Prompt(err.to_string())
}

impl PromptPort for TerminalPrompt {
    fn input(&self, question: &InputQuestion) -> Result<String, AppError> {
        let validate = question.validate;
        let mut prompt = Input::<String>::new()
            .with_prompt(question.message)
            .allow_empty(question.allow_empty)
            .validate_with(move |input: &String| validate(input));

        if let Some(default) = question.default {
            prompt = prompt.default(default.to_string());
        }

        prompt.interact_text().map_err(prompt_error)
    }

    fn select(&self, question: &SelectQuestion) -> Result<String, AppError> {
        let index = Select::new()
            .with_prompt(question.message)
            .items(question.choices)
            .default(question.default)
            .interact()
            .map_err(prompt_error)?;

        Ok(question.choices[index].to_string())
    }

    fn password(&self, question: &PasswordQuestion) -> Result<String, AppError> {
        let validate = question.validate;
        // Empty input is accepted here so the generated default can kick in
        // during collection.
        Password::new()
            .with_prompt(question.message)
            .allow_empty_password(true)
            .validate_with(move |input: &String| {
                if input.is_empty() { Ok(()) } else { validate(input) }
            })
            .interact()
            .map_err(prompt_error)
    }
}

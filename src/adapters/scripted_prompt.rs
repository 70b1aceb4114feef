//! Scripted implementation of the prompt port for tests.

use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::{InputQuestion, PasswordQuestion, PromptPort, SelectQuestion};

/// Answers questions from a prepared script instead of a terminal.
///
/// Unscripted questions fall back to the question's default. Where the
/// terminal adapter re-prompts on a rejected value, this adapter fails
/// fast, so a scripted answer that violates a field's rule aborts the run
/// before any generator executes.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: HashMap<&'static str, String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, name: &'static str, value: &str) -> Self {
        self.answers.insert(name, value.to_string());
        self
    }
}

impl PromptPort for ScriptedPrompt {
    fn input(&self, question: &InputQuestion) -> Result<String, AppError> {
        let value = match self.answers.get(question.name) {
            Some(value) => value.clone(),
            None => match question.default {
                Some(default) => default.to_string(),
                None if question.allow_empty => String::new(),
                None => {
                    return Err(AppError::Prompt(format!(
                        "no scripted answer for '{}'",
                        question.name
                    )));
                }
            },
        };

        if value.is_empty() && question.allow_empty {
            return Ok(value);
        }
        (question.validate)(&value)
            .map_err(|message| AppError::Prompt(format!("{}: {message}", question.name)))?;
        Ok(value)
    }

    fn select(&self, question: &SelectQuestion) -> Result<String, AppError> {
        match self.answers.get(question.name) {
            Some(value) if question.choices.contains(&value.as_str()) => Ok(value.clone()),
            Some(value) => Err(AppError::Prompt(format!(
                "'{value}' is not a choice for '{}'",
                question.name
            ))),
            None => Ok(question.choices[question.default].to_string()),
        }
    }

    fn password(&self, question: &PasswordQuestion) -> Result<String, AppError> {
        match self.answers.get(question.name) {
            Some(value) if value.is_empty() => Ok(String::new()),
            Some(value) => {
                (question.validate)(value)
                    .map_err(|message| AppError::Prompt(format!("{}: {message}", question.name)))?;
                Ok(value.clone())
            }
            None => Ok(String::new()),
        }
    }
}

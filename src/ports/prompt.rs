//! Capability interface for interactive answer collection.
//!
//! A question list is an ordered sequence of prompts, each bound to one
//! answer field and carrying its own validator and optional input filter.
//! Any implementation of [`PromptPort`] (terminal, scripted test harness)
//! satisfies the same contract: the value it returns for a question has
//! already been accepted by that question's validator.

use std::collections::HashMap;

use crate::domain::AppError;

/// Validates raw input, returning the message to display on rejection.
pub type Validator = fn(&str) -> Result<(), String>;

/// Normalizes accepted input before it is stored (e.g. lowercasing).
pub type Filter = fn(&str) -> String;

/// Free-text question.
pub struct InputQuestion {
    pub name: &'static str,
    pub message: &'static str,
    /// Default offered when the user submits nothing.
    pub default: Option<&'static str>,
    /// Whether an empty submission is acceptable (optional fields).
    pub allow_empty: bool,
    pub validate: Validator,
    pub filter: Option<Filter>,
}

/// Fixed-choice question.
pub struct SelectQuestion {
    pub name: &'static str,
    pub message: &'static str,
    pub choices: &'static [&'static str],
    /// Index of the pre-selected choice.
    pub default: usize,
}

/// Masked question with a lazily generated default.
pub struct PasswordQuestion {
    pub name: &'static str,
    pub message: &'static str,
    pub validate: Validator,
    /// Invoked only when the user submits nothing.
    pub generate_default: fn() -> String,
}

/// One prompt in the ordered question list.
pub enum Question {
    Input(InputQuestion),
    Select(SelectQuestion),
    Password(PasswordQuestion),
}

impl Question {
    pub fn name(&self) -> &'static str {
        match self {
            Question::Input(q) => q.name,
            Question::Select(q) => q.name,
            Question::Password(q) => q.name,
        }
    }
}

/// Suspends per question until accepted input arrives.
///
/// Implementations must only return values the question's validator accepts
/// (re-prompting, or failing, on rejection); a mechanism failure or user
/// interrupt surfaces as `AppError::Prompt` and aborts collection.
pub trait PromptPort {
    fn input(&self, question: &InputQuestion) -> Result<String, AppError>;
    fn select(&self, question: &SelectQuestion) -> Result<String, AppError>;
    fn password(&self, question: &PasswordQuestion) -> Result<String, AppError>;
}

/// Walk the ordered question list and produce the completed
/// `field name -> value` mapping.
///
/// Filters run after acceptance; the password default is generated only
/// when the user supplied nothing. Fails atomically: the first prompt error
/// aborts the whole collection.
pub fn collect_answers<P: PromptPort>(
    prompt: &P,
    questions: &[Question],
) -> Result<HashMap<&'static str, String>, AppError> {
    let mut values = HashMap::new();

    for question in questions {
        let value = match question {
            Question::Input(q) => {
                let raw = prompt.input(q)?;
                match q.filter {
                    Some(filter) if !raw.is_empty() => filter(&raw),
                    _ => raw,
                }
            }
            Question::Select(q) => prompt.select(q)?,
            Question::Password(q) => {
                let raw = prompt.password(q)?;
                if raw.is_empty() { (q.generate_default)() } else { raw }
            }
        };
        values.insert(question.name(), value);
    }

    Ok(values)
}

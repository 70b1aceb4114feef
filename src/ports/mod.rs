mod prompt;

pub use prompt::{
    Filter, InputQuestion, PasswordQuestion, PromptPort, Question, SelectQuestion, Validator,
    collect_answers,
};

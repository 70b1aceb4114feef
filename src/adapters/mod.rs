mod scripted_prompt;
mod terminal_prompt;

pub use scripted_prompt::ScriptedPrompt;
pub use terminal_prompt::TerminalPrompt;

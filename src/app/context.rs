use crate::ports::PromptPort;

/// Application context holding dependencies for command execution.
pub struct AppContext<P: PromptPort> {
    prompt: P,
}

impl<P: PromptPort> AppContext<P> {
    /// Create a new application context.
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Get a reference to the prompt implementation.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}

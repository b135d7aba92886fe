//! User-facing notifications and prompts
//!
//! Fire-and-forget side-channel for success/failure toasts plus the
//! prompts the interactive form entry needs. Trait-based so tests can
//! record everything instead of touching the terminal.

use anyhow::Result;
use async_trait::async_trait;
use std::io::{BufRead, Write};

/// Trait for user interaction.
#[async_trait]
pub trait UserInteraction: Send + Sync {
    /// Report a completed action.
    fn notify_success(&self, message: &str);

    /// Report a failed action.
    fn notify_failure(&self, message: &str);

    /// Display an informational line.
    fn display_info(&self, message: &str);

    /// Ask a yes/no question; `false` on plain Enter.
    async fn confirm(&self, message: &str) -> Result<bool>;

    /// Prompt for one line of text, showing a placeholder hint.
    async fn prompt(&self, label: &str, hint: &str) -> Result<String>;
}

/// Terminal implementation reading stdin and writing prefixed lines.
pub struct TerminalInteraction;

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Result<String> {
        let mut input = String::new();
        std::io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[async_trait]
impl UserInteraction for TerminalInteraction {
    fn notify_success(&self, message: &str) {
        println!("✅ {message}");
    }

    fn notify_failure(&self, message: &str) {
        eprintln!("❌ {message}");
    }

    fn display_info(&self, message: &str) {
        println!("{message}");
    }

    async fn confirm(&self, message: &str) -> Result<bool> {
        print!("{message} (y/N) ");
        std::io::stdout().flush()?;
        let input = self.read_line()?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    }

    async fn prompt(&self, label: &str, hint: &str) -> Result<String> {
        if hint.is_empty() {
            print!("{label}: ");
        } else {
            print!("{label} ({hint}): ");
        }
        std::io::stdout().flush()?;
        self.read_line()
    }
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Records every message and replays scripted answers.
    pub struct MockInteraction {
        pub confirm_responses: Mutex<Vec<bool>>,
        pub prompt_responses: Mutex<Vec<String>>,
        pub messages: Mutex<Vec<String>>,
    }

    impl Default for MockInteraction {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockInteraction {
        pub fn new() -> Self {
            Self {
                confirm_responses: Mutex::new(Vec::new()),
                prompt_responses: Mutex::new(Vec::new()),
                messages: Mutex::new(Vec::new()),
            }
        }

        pub fn add_confirm_response(&self, response: bool) {
            self.confirm_responses.lock().unwrap().push(response);
        }

        pub fn add_prompt_response(&self, response: &str) {
            self.prompt_responses
                .lock()
                .unwrap()
                .push(response.to_string());
        }

        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }

        pub fn successes(&self) -> Vec<String> {
            self.filtered("SUCCESS: ")
        }

        pub fn failures(&self) -> Vec<String> {
            self.filtered("FAILURE: ")
        }

        fn filtered(&self, prefix: &str) -> Vec<String> {
            self.messages()
                .iter()
                .filter_map(|m| m.strip_prefix(prefix).map(str::to_string))
                .collect()
        }
    }

    #[async_trait]
    impl UserInteraction for MockInteraction {
        fn notify_success(&self, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("SUCCESS: {message}"));
        }

        fn notify_failure(&self, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("FAILURE: {message}"));
        }

        fn display_info(&self, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("INFO: {message}"));
        }

        async fn confirm(&self, message: &str) -> Result<bool> {
            self.messages
                .lock()
                .unwrap()
                .push(format!("CONFIRM: {message}"));
            self.confirm_responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| anyhow::anyhow!("No mock response configured"))
        }

        async fn prompt(&self, label: &str, _hint: &str) -> Result<String> {
            self.messages
                .lock()
                .unwrap()
                .push(format!("PROMPT: {label}"));
            self.prompt_responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| anyhow::anyhow!("No mock response configured"))
        }
    }

}

//! Yes/no confirmation capability.
//!
//! Update decisions and the first-run wizard both block on a yes/no answer
//! from the operator. The question is asked through this trait rather than
//! the terminal directly, so decision logic stays testable without a tty.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm as DialoguerConfirm};

/// Answers a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Terminal-backed provider. No default answer is configured, so Enter and
/// any key other than y/n re-prompt instead of being taken as an answer.
pub struct ConsoleConfirm;

impl Confirm for ConsoleConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(DialoguerConfirm::with_theme(&ColorfulTheme::default()).with_prompt(prompt).interact()?)
    }
}

//! Yes/no confirmation capability.

use dialoguer::Confirm as ConfirmPrompt;
use tracing::warn;

/// Ask the user a yes/no question.
///
/// `default` is the answer selected by just pressing enter. Implementations
/// must answer `false` when no answer can be read.
pub trait Confirm {
    fn confirm(&self, prompt: &str, default: bool) -> bool;
}

/// Interactive prompt on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str, default: bool) -> bool {
        match ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
        {
            Ok(Some(answer)) => answer,
            Ok(None) => false,
            Err(err) => {
                warn!(
                    target: "start_odoo::launch",
                    prompt,
                    reason = %err,
                    "No interactive answer available; treating as no"
                );
                false
            }
        }
    }
}

/// Fixed answer, for non-interactive callers.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&self, _prompt: &str, _default: bool) -> bool {
        self.0
    }
}

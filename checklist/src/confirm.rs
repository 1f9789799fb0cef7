use dialoguer::theme::ColorfulTheme;

/// The question asked before a todo is deleted.
pub const DELETE_PROMPT: &str = "Do you want to delete this todo?";

/// Asks the user to confirm a destructive action.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Asks on the terminal with a yes/no prompt. Anything but an explicit yes declines.
pub struct TerminalConfirm;

#[async_trait]
impl Confirm for TerminalConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_owned();
        let answer = tokio::task::spawn_blocking(move || {
            dialoguer::Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .default(false)
                .interact()
        })
        .await;

        match answer {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt panicked");
                false
            }
        }
    }
}

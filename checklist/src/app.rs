//! The read-render loop of the terminal frontend.

use crate::{command::Command, confirm::Confirm, repository::TodoService, view::TodoListView};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Draws the view, then handles one line of `input`, until `:q` or the end of input.
///
/// `draw` runs before every line is read. Errors from it or from reading `input` end the loop.
pub async fn run<S, C, R, D>(
    view: &mut TodoListView<S, C>,
    input: R,
    mut draw: D
) -> io::Result<()>
where
    S: TodoService,
    C: Confirm,
    R: AsyncBufRead + Unpin,
    D: FnMut(&TodoListView<S, C>) -> io::Result<()>
{
    let mut lines = input.lines();
    loop {
        draw(&*view)?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                tracing::debug!("input closed");
                return Ok(());
            }
        };

        match Command::parse(&line) {
            Command::Submit(text) => {
                view.set_draft(text);
                view.submit().await;
            }
            Command::Toggle(row) => view.toggle(row - 1).await,
            Command::Delete(row) => view.delete(row - 1).await,
            Command::Refetch => view.refetch().await,
            Command::Quit => return Ok(()),
            Command::Invalid(command) => tracing::warn!(%command, "unknown command")
        }
    }
}

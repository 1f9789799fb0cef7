use checklist::{app, logging, Args, Config, Screen, TerminalConfirm, TodoListView, TodoRepository};
use clap::Parser;
use console::Term;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env file is fine, the environment may already be set
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    logging::init(args.log_level);

    let config = Config::from_args(&args)?;
    tracing::debug!(endpoint = %config.endpoint, "starting");
    let client = config.client()?;
    let mut view = TodoListView::new(TodoRepository::new(client), TerminalConfirm);

    let term = Term::stdout();
    let screen = Screen::for_term(&term);
    view.mount().await;

    let input = BufReader::new(tokio::io::stdin());
    app::run(&mut view, input, |view| {
        term.clear_screen()?;
        term.write_line(&screen.render(view))?;
        term.write_line("")
    })
    .await?;

    Ok(())
}

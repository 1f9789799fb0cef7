//! The commands understood by the terminal frontend.

/// One line of user input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Use the line as the draft and submit it.
    Submit(String),
    /// Toggle a row, counted from 1 as shown on screen.
    Toggle(usize),
    /// Delete a row, counted from 1 as shown on screen.
    Delete(usize),
    Refetch,
    Quit,
    /// A `:` command that isn't known or is missing its row.
    Invalid(String)
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let command = match line.trim_end_matches(&['\r', '\n'][..]) {
            line if !line.trim_start().starts_with(':') => return Command::Submit(line.to_string()),
            line => line.trim()
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let row = parts
            .next()
            .and_then(|row| row.parse::<usize>().ok())
            .filter(|row| *row > 0);

        match (name, row, parts.next()) {
            (":q", None, None) => Command::Quit,
            (":r", None, None) => Command::Refetch,
            (":t", Some(row), None) => Command::Toggle(row),
            (":d", Some(row), None) => Command::Delete(row),
            _ => Command::Invalid(command.to_string())
        }
    }
}

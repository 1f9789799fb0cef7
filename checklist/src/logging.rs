use std::io;
use tracing_subscriber::fmt;

pub use tracing::Level;

/// Installs the global subscriber, writing to stderr so it doesn't mix with the screen.
/// Without a level nothing is logged.
pub fn init(level: Option<Level>) {
    if let Some(level) = level {
        let format = fmt::format().without_time().compact();
        fmt()
            .with_max_level(level)
            .event_format(format)
            .with_writer(io::stderr)
            .init();
    }
}

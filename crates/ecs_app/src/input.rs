//! Background key listener.
//!
//! Reads console lines on a dedicated thread and posts [`Command`]s to the
//! host loop, which drains them between ticks. The core never waits on it.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// A host-side action requested from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the controlled sound between playing and paused.
    TogglePlayback,
    /// Add one unit of mass to the controlled rigid body.
    IncreaseMass,
    /// Remove one unit of mass from the controlled rigid body.
    DecreaseMass,
    /// Leave the host loop.
    Quit,
}

impl Command {
    /// Parse one console line. Case and surrounding whitespace are ignored.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" => Some(Self::TogglePlayback),
            "+" | "=" => Some(Self::IncreaseMass),
            "-" => Some(Self::DecreaseMass),
            "q" | "quit" | "esc" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Start listening on standard input.
///
/// # Errors
///
/// Returns an error if the listener thread cannot be spawned.
pub fn spawn_listener() -> io::Result<UnboundedReceiver<Command>> {
    let (tx, rx) = mpsc::unbounded_channel();
    // Detached: a blocking stdin read cannot be interrupted, so the thread is
    // left running when the host exits.
    thread::Builder::new()
        .name("key-listener".into())
        .spawn(move || listen(io::stdin().lock(), &tx))?;
    Ok(rx)
}

/// Forward every recognised line of `reader` as a [`Command`] until input
/// ends or the receiving side goes away.
pub fn listen(reader: impl BufRead, tx: &UnboundedSender<Command>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read console input");
                return;
            }
        };
        match Command::parse(&line) {
            Some(command) => {
                if tx.send(command).is_err() {
                    return;
                }
            }
            None if line.trim().is_empty() => {}
            None => warn!(input = line.trim(), "unknown command"),
        }
    }
    debug!("console input closed");
}

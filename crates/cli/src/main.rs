// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod storage;

use clap::Parser;
use duesbook::{History, MemberStore, Session, StoreChange};
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::rc::Rc;
use storage::{JsonFileStorage, MemberStorage, StorageError};
use tracing::{error, info};

/// duesbook - track club members and the dues they pay
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON member file. If not provided, members are kept in memory only.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Maximum number of changes that can be undone. Unbounded if not provided.
    #[arg(long)]
    history_limit: Option<NonZeroUsize>,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Logs go to stderr so they never mix with command feedback
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting duesbook");

    let storage: Option<JsonFileStorage> = args.data.map(JsonFileStorage::new);
    let store: MemberStore = match &storage {
        Some(storage) => storage.load()?,
        None => {
            info!("No data file given, members are kept in memory");
            MemberStore::new()
        }
    };

    let mut session: Session = Session::new(store);
    if let Some(limit) = args.history_limit {
        session = session.with_history(History::with_limit(limit));
    }

    let dirty: Rc<Cell<bool>> = Rc::new(Cell::new(false));
    let flag: Rc<Cell<bool>> = Rc::clone(&dirty);
    session.subscribe(move |change| {
        if change == StoreChange::MembersChanged {
            flag.set(true);
        }
    });

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&mut session, stdin.lock(), stdout.lock(), |session| {
        let Some(storage) = &storage else {
            return Ok(());
        };
        save_if_dirty(storage, &dirty, session.store()).map_err(|e| {
            error!(error = %e, "Failed to save members");
            format!("{e}. Members are still unsaved.")
        })
    })?;

    info!("Exiting duesbook");
    Ok(())
}

/// Reads lines from `input` until `exit` or end of input, writing feedback
/// and errors to `output`.
///
/// `after_command` runs after every line and may report a message to show.
fn run<R, W, F>(
    session: &mut Session,
    input: R,
    mut output: W,
    mut after_command: F,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Session) -> Result<(), String>,
{
    writeln!(output, "Welcome to duesbook. Type 'help' for the command reference.")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line: String = line?;
        if line.trim().is_empty() {
            prompt(&mut output)?;
            continue;
        }

        let exit: bool = match session.execute(&line) {
            Ok(result) => {
                writeln!(output, "{}", result.feedback)?;
                result.exit
            }
            Err(e) => {
                writeln!(output, "{e}")?;
                false
            }
        };
        if let Err(message) = after_command(session) {
            writeln!(output, "Warning: {message}")?;
        }
        if exit {
            break;
        }
        prompt(&mut output)?;
    }
    Ok(())
}

/// Saves `store` when `dirty` is set. The flag is cleared only once the save
/// succeeds, so a failed save is retried after the next command.
fn save_if_dirty<S: MemberStorage>(
    storage: &S,
    dirty: &Cell<bool>,
    store: &MemberStore,
) -> Result<(), StorageError> {
    if dirty.get() {
        storage.save(store)?;
        dirty.set(false);
    }
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}

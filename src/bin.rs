use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use imara_diff::intern::InternedInput;
use imara_diff::{diff, Algorithm, UnifiedDiffBuilder};
use log::{debug, error, info};
use ws2812_tab::{render, Error, Table};

/// Emit the gamma-corrected WS2812 bit-pattern table as C source.
///
/// With no options the table is printed to stdout.
#[derive(Parser, Debug)]
#[command(name = "ws2812-tab", version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Write the table to a file instead of stdout. The file is only touched when its
    /// contents change.
    #[arg(short, long, value_name = "PATH", conflicts_with = "check")]
    output: Option<PathBuf>,

    /// Verify that a file holds the current table. Prints a diff and fails if not.
    #[arg(long, value_name = "PATH")]
    check: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Some(Command::Completions { shell }) = args.command {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "ws2812-tab", &mut io::stdout());
        return Ok(());
    }

    let table = Table::generate();

    if let Some(path) = args.check {
        return check(&path, &render(&table));
    }

    if let Some(path) = args.output {
        ws2812_tab::render::write_if_changed(&path, &render(&table))
            .with_context(|| format!("failed to write {}", path.display()))?;
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match ws2812_tab::write_table(&table, &mut out).and_then(|_| out.flush()) {
        Ok(()) => Ok(()),
        // reader went away (eg. `| head`), nothing left to do
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        Err(e) => Err(e).context("failed to write table to stdout"),
    }
}

/// Compare `path` against the freshly rendered table.
fn check(path: &Path, expected: &str) -> anyhow::Result<()> {
    let existing = ws2812_tab::render::read_existing(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if existing.as_deref() == Some(expected.as_bytes()) {
        info!("{} is up to date", path.display());
        return Ok(());
    }

    // invalid utf-8 still diffs line by line against what is actually on disk
    let existing = existing
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();
    let input = InternedInput::new(existing.as_str(), expected);
    let changes = diff(Algorithm::Histogram, &input, UnifiedDiffBuilder::new(&input));
    error!("{} differs from the generated table", path.display());
    eprint!("{changes}");

    Err(Error::Stale {
        path: path.to_path_buf(),
    }
    .into())
}

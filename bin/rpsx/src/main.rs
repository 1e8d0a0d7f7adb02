//! Play Binary
//!
//! Provably fair rock-paper-scissors over any odd set of moves:
//!
//! ```text
//! rpsx rock paper scissors
//! rpsx rock paper scissors lizard spock --log-level info
//! ```
//!
//! Each move beats the half of the list that precedes it (wrapping around)
//! and loses to the half that follows it.
use clap::Parser;
use rpsx_commit::Os;
use rpsx_session::*;
use std::io::IsTerminal;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// An odd number (at least 3) of distinct moves
    moves: Vec<String>,
    /// Log level for stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,
    /// Also write a debug log file into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Plain line-based I/O even on a terminal
    #[arg(long)]
    plain: bool,
}

impl Args {
    fn interactive(&self) -> bool {
        !self.plain && std::io::stdin().is_terminal()
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    rpsx_core::log(args.log_level, args.log_dir.as_deref())
        .map_err(|e| anyhow::anyhow!("logging: {}", e))?;
    let ref mut entropy = Os;
    let ref mut opponent = Random::from(rand::rng());
    let ending = match args.interactive() {
        true => play(args.moves, entropy, opponent, &mut Terminal),
        false => play(args.moves, entropy, opponent, &mut Plain::stdio()),
    };
    report(ending, &mut std::io::stdout())
}

/// A rejected move set is explained on `out` and ends the program normally;
/// anything else that went wrong is fatal.
fn report(ending: Result<Ending, SessionError>, out: &mut impl Write) -> anyhow::Result<()> {
    match ending {
        Ok(_) => Ok(()),
        Err(SessionError::Rules(e)) => {
            log::info!("rejected move set: {}", e);
            writeln!(out, "Error: {}", e)?;
            writeln!(out, "Example: rock paper scissors")?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

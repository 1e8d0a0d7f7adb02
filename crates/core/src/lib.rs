//! Core constants and runtime utilities for rpsx.
//!
//! This crate provides the fixed parameters of the commit-then-reveal
//! protocol and the logging setup shared by the binaries.

// ============================================================================
// KEY MATERIAL
// ============================================================================
/// Size of the per-session HMAC key in bits.
pub const KEY_BITS: usize = 256;
/// Size of the per-session HMAC key in bytes.
pub const KEY_BYTES: usize = KEY_BITS / 8;
/// Size of an HMAC-SHA256 commitment in bytes.
pub const DIGEST_BYTES: usize = 32;
/// Length of a rendered commitment in hex characters.
pub const DIGEST_HEX_LEN: usize = 2 * DIGEST_BYTES;

// ============================================================================
// MOVE SETS
// ============================================================================
/// Smallest playable move set (classic rock-paper-scissors).
pub const MIN_MOVES: usize = 3;

// ============================================================================
// MENU SENTINELS
// ============================================================================
/// Leaves the game without resolving or revealing anything.
pub const EXIT: &str = "0";
/// Prints the outcome table and re-prompts.
pub const HELP: &str = "?";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging to stderr at `level`, plus a DEBUG log file under `dir`.
///
/// stdout belongs to the game, so the terminal logger never writes there.
/// Log files are named by unix timestamp, one per process.
pub fn log(
    level: log::LevelFilter,
    dir: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(term);
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

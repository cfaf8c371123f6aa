//! Rock-Paper-Scissors-Lizard-Spock against an adaptive computer opponent.
//!
//! The crate is split the way a match flows:
//!
//! - [`weapons`]: the five weapons, the beats relation and gore text
//! - [`ledger`]: per-player move history keyed by round
//! - [`players`]: seats, the human, and the computer with its policies
//! - [`engine`]: the round state machine and the session loop
//! - [`view`]: the presentation gateway and its terminal implementations
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod players;
pub mod view;
pub mod weapons;

pub use config::Config;
pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// 1-based round counter within a match.
pub type Round = usize;
/// Rounds won within a match.
pub type Score = u8;
/// Seat index (0 = human, 1 = computer).
pub type Position = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 2;
/// Score that ends a match.
pub const WIN_THRESHOLD: Score = 10;
/// Longest accepted player name.
pub const NAME_MAX_LEN: usize = 20;
/// Roster the computer's display name is drawn from.
pub const COMPUTER_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging. Warnings and errors reach the terminal; when `RPS_LOG`
/// names a level, everything at that level is also written to `logs/<time>.log`.
#[cfg(feature = "cli")]
pub fn log(config: &Config) -> anyhow::Result<()> {
    let settings = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        settings.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(level) = config.log {
        std::fs::create_dir_all("logs")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        loggers.push(simplelog::WriteLogger::new(
            level,
            settings,
            std::fs::File::create(format!("logs/{}.log", time))?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

/// Resolves when the process is asked to stop, yielding the exit status
/// conventionally paired with the signal (128 + signo).
#[cfg(feature = "cli")]
pub async fn interrupt() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::SignalKind;
        match tokio::signal::unix::signal(SignalKind::terminate()) {
            Ok(mut term) => tokio::select! {
                _ = tokio::signal::ctrl_c() => 130,
                _ = term.recv() => 143,
            },
            Err(e) => {
                log::warn!("SIGTERM handler unavailable: {}", e);
                let _ = tokio::signal::ctrl_c().await;
                130
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        130
    }
}

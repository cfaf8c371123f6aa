//! Runtime settings read from the environment.
//!
//! - `RPS_VIEW`: `plain` or `prompt` (default `prompt`)
//! - `RPS_SEED`: u64 seed for the computer's RNG
//! - `RPS_LOG` : level for the file logger under `logs/`; unset disables it

/// Which [`View`](crate::view::View) the binary drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    /// Line-oriented [`Console`](crate::view::Console).
    Plain,
    /// Interactive menus; falls back to `Plain` when stdout is not a terminal.
    #[default]
    Prompt,
}

impl TryFrom<&str> for Display {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "cli" => Ok(Self::Plain),
            "prompt" | "tui" => Ok(Self::Prompt),
            other => Err(format!("unknown view {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub display: Display,
    pub seed: Option<u64>,
    pub log: Option<log::LevelFilter>,
    /// Settings that were present but unparseable, kept for logging later.
    pub rejected: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::parse(
            std::env::var("RPS_VIEW").ok().as_deref(),
            std::env::var("RPS_SEED").ok().as_deref(),
            std::env::var("RPS_LOG").ok().as_deref(),
        )
    }
    /// Build from raw values. Anything unparseable keeps its default and is
    /// listed in `rejected`.
    pub fn parse(display: Option<&str>, seed: Option<&str>, log: Option<&str>) -> Self {
        let mut rejected = Vec::new();
        let display = display
            .map(Display::try_from)
            .and_then(|d| d.map_err(|e| rejected.push(format!("RPS_VIEW: {}", e))).ok())
            .unwrap_or_default();
        let seed = seed.and_then(|s| {
            s.trim()
                .parse::<u64>()
                .map_err(|e| rejected.push(format!("RPS_SEED: {}", e)))
                .ok()
        });
        let log = log.and_then(|s| {
            s.trim()
                .parse::<log::LevelFilter>()
                .map_err(|e| rejected.push(format!("RPS_LOG: {}", e)))
                .ok()
        });
        Self {
            display,
            seed,
            log,
            rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse(None, None, None);
        assert_eq!(config, Config::default());
        assert_eq!(config.display, Display::Prompt);
    }

    #[test]
    fn parses_everything() {
        let config = Config::parse(Some("plain"), Some("42"), Some("debug"));
        assert_eq!(config.display, Display::Plain);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log, Some(log::LevelFilter::Debug));
    }

    #[test]
    fn garbage_falls_back() {
        let config = Config::parse(Some("curses"), Some("-1"), Some("loud"));
        assert_eq!(config.display, Display::Prompt);
        assert_eq!(config.seed, None);
        assert_eq!(config.log, None);
        assert_eq!(config.rejected.len(), 3);
        assert!(config.rejected[0].starts_with("RPS_VIEW"));
    }
}

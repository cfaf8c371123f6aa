//! Roshambo Binary
//!
//! Play Rock-Paper-Scissors-Lizard-Spock against the computer, first to ten.
//!
//! Environment: RPS_VIEW (plain | prompt), RPS_SEED, RPS_LOG

use roshambo::config::Display;
use roshambo::engine::Session;
use roshambo::view::Console;
use roshambo::view::Prompt;
use roshambo::view::View;
use roshambo::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    log(&config)?;
    for rejected in config.rejected.iter() {
        log::warn!("ignoring {}", rejected);
    }
    let code = match config.display {
        Display::Prompt if Prompt::available() => launch(Prompt::default(), &config).await?,
        Display::Prompt => {
            log::warn!("stdout is not a terminal, using the plain view");
            launch(Console::stdio(), &config).await?
        }
        Display::Plain => launch(Console::stdio(), &config).await?,
    };
    match code {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}

/// Runs a session on a blocking thread while watching for termination
/// signals. A signal runs the view's cleanup and exits without waiting for
/// the session, which may be parked on input.
async fn launch<V>(view: V, config: &Config) -> anyhow::Result<i32>
where
    V: View + 'static,
{
    let cleanup = view.cleanup();
    let seed = config.seed;
    let session = tokio::task::spawn_blocking(move || Session::new(view).seeded(seed).run());
    tokio::select! {
        code = interrupt() => {
            cleanup.run();
            println!("\n{}", roshambo::view::format::goodbye());
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(code);
        }
        joined = session => match joined? {
            Ok(()) => Ok(0),
            Err(e) if e.fatal() => Err(e.into()),
            Err(_) => Ok(130),
        }
    }
}

use crate::Round;
use crate::weapons::Weapon;
use thiserror::Error;

/// Everything that can stop a session.
///
/// Invalid user input never shows up here: views re-prompt until they get a
/// valid answer. What remains is either an engine invariant breaking
/// (fatal), the user walking away, or the terminal itself failing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("round {0} already has a move on record")]
    Duplicate(Round),
    #[error("no move on record for round {0}")]
    Missing(Round),
    #[error("{0} does not beat {1}")]
    Stalemate(Weapon, Weapon),
    #[error("interrupted by user")]
    Interrupted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Engine bugs and broken terminals, as opposed to the user quitting.
    pub fn fatal(&self) -> bool {
        !matches!(self, Self::Interrupted)
    }
}

#[cfg(feature = "cli")]
impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        #[allow(unreachable_patterns)]
        match e {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                Self::Interrupted
            }
            dialoguer::Error::IO(e) => Self::Io(e),
            _ => Self::Interrupted,
        }
    }
}

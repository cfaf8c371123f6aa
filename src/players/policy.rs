use super::*;
use crate::Error;
use crate::weapons::Weapon;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// The computer's heuristic for a whole match.
///
/// Each policy looks at exactly one entry of history, the previous round of
/// one ledger, and either copies that weapon or falls back to a uniform pick.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Policy {
    /// Replay my last weapon if it won.
    Repeat,
    /// Steal the opponent's last weapon if it won.
    MirrorOpponentWin,
    /// Copy the opponent's last weapon if it did not win. Ties count.
    MirrorOpponentLoss,
}

impl Policy {
    pub const ALL: [Policy; 3] = [
        Policy::Repeat,
        Policy::MirrorOpponentWin,
        Policy::MirrorOpponentLoss,
    ];

    /// Pick a weapon for `recall.round`.
    ///
    /// Round 1 has no history and is always uniform. Later rounds require the
    /// consulted ledger to hold the previous round; its absence is an engine
    /// bug and is reported as [`Error::Missing`].
    pub fn choose<R>(&self, recall: Recall<'_>, rng: &mut R) -> Result<Weapon, Error>
    where
        R: Rng + ?Sized,
    {
        if recall.round <= 1 {
            return Ok(rng.random());
        }
        let prior = recall.round - 1;
        let (ledger, trigger) = match self {
            Policy::Repeat => (recall.own, true),
            Policy::MirrorOpponentWin => (recall.opponent, true),
            Policy::MirrorOpponentLoss => (recall.opponent, false),
        };
        let record = ledger.get(prior).ok_or(Error::Missing(prior))?;
        match record.won() == trigger {
            true => Ok(record.weapon()),
            false => Ok(rng.random()),
        }
    }
}

/// Uniform over the three policies.
impl Distribution<Policy> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Policy {
        Policy::ALL[rng.random_range(0..Policy::ALL.len())]
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Policy::Repeat => write!(f, "repeat"),
            Policy::MirrorOpponentWin => write!(f, "mirror-win"),
            Policy::MirrorOpponentLoss => write!(f, "mirror-loss"),
        }
    }
}

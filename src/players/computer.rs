use super::*;
use crate::Error;
use crate::view::View;
use crate::weapons::Weapon;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CPU opponent following one [`Policy`] per match.
///
/// The policy is drawn uniformly when the computer is created and again on
/// every rematch. Its RNG is owned so that a seeded computer plays the same
/// way every run.
#[derive(Debug)]
pub struct Computer {
    policy: Policy,
    rng: SmallRng,
}

impl Computer {
    /// Computer seeded from the thread RNG.
    pub fn new() -> Self {
        Self::from(SmallRng::from_rng(&mut rand::rng()))
    }
    /// Reproducible computer.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
    /// Computer pinned to a policy for its first match.
    pub fn with_policy(policy: Policy, rng: SmallRng) -> Self {
        Self { policy, rng }
    }
    pub fn policy(&self) -> Policy {
        self.policy
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SmallRng> for Computer {
    fn from(mut rng: SmallRng) -> Self {
        let policy = rng.random::<Policy>();
        log::debug!("[computer] policy {}", policy);
        Self { policy, rng }
    }
}

impl Player for Computer {
    fn decide(&mut self, recall: Recall<'_>, _: &mut dyn View) -> Result<Weapon, Error> {
        let weapon = self.policy.choose(recall, &mut self.rng)?;
        log::debug!(
            "[computer] round {} plays {} ({})",
            recall.round,
            weapon,
            self.policy
        );
        Ok(weapon)
    }
    fn rematch(&mut self) {
        self.policy = self.rng.random();
        log::debug!("[computer] policy {}", self.policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::view::Script;

    #[test]
    fn seeded_computers_agree() {
        let a = Computer::seeded(11);
        let b = Computer::seeded(11);
        assert_eq!(a.policy(), b.policy());
    }

    #[test]
    fn repeat_replays_through_the_player_trait() {
        let mut own = Ledger::default();
        own.record(1, Weapon::Paper).unwrap();
        own.mark_won(1).unwrap();
        let mut opp = Ledger::default();
        opp.record(1, Weapon::Rock).unwrap();
        let ref mut view = Script::default();
        let mut cpu = Computer::with_policy(Policy::Repeat, SmallRng::seed_from_u64(0));
        let recall = Recall {
            round: 2,
            own: &own,
            opponent: &opp,
        };
        assert_eq!(cpu.decide(recall, view).unwrap(), Weapon::Paper);
    }

    #[test]
    fn rematch_redraws_from_all_policies() {
        let mut cpu = Computer::seeded(5);
        let seen = (0..64)
            .map(|_| {
                cpu.rematch();
                cpu.policy()
            })
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), Policy::ALL.len());
    }
}

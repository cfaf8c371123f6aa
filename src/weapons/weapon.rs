use colored::*;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use rand::Rng;

/// One of the five symbols a player can throw.
///
/// The beats relation is cyclic rather than an ordering: every weapon beats
/// exactly two others and loses to the remaining two, so there is no `Ord`
/// that respects it. Ties are detected by equality, never through [`beats`].
///
/// [`beats`]: Weapon::beats
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Weapon {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Weapon {
    pub const ALL: [Weapon; 5] = [
        Weapon::Rock,
        Weapon::Paper,
        Weapon::Scissors,
        Weapon::Lizard,
        Weapon::Spock,
    ];

    /// The two weapons this one defeats.
    pub const fn victims(self) -> [Weapon; 2] {
        match self {
            Weapon::Rock => [Weapon::Scissors, Weapon::Lizard],
            Weapon::Paper => [Weapon::Rock, Weapon::Spock],
            Weapon::Scissors => [Weapon::Paper, Weapon::Lizard],
            Weapon::Lizard => [Weapon::Spock, Weapon::Paper],
            Weapon::Spock => [Weapon::Rock, Weapon::Scissors],
        }
    }

    pub fn beats(self, other: Weapon) -> bool {
        self.victims().contains(&other)
    }

    /// Single keystroke that selects this weapon at the prompt.
    pub const fn key(self) -> char {
        match self {
            Weapon::Rock => 'r',
            Weapon::Paper => 'p',
            Weapon::Scissors => 's',
            Weapon::Lizard => 'l',
            Weapon::Spock => 'S',
        }
    }

    /// Prompt label with the selecting key in parentheses, e.g. `(r)ock`.
    pub fn label(self) -> String {
        let name = self.to_string();
        let mut chars = name.chars();
        match chars.next() {
            Some(_) => format!("({}){}", self.key(), chars.as_str()),
            None => String::new(),
        }
    }

    /// Display with the weapon's colour.
    pub fn painted(self) -> ColoredString {
        match self {
            Weapon::Rock => self.to_string().white(),
            Weapon::Paper => self.to_string().cyan(),
            Weapon::Scissors => self.to_string().red(),
            Weapon::Lizard => self.to_string().green(),
            Weapon::Spock => self.to_string().magenta(),
        }
    }
}

/// Uniform over all five weapons.
impl Distribution<Weapon> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Weapon {
        Weapon::ALL[rng.random_range(0..Weapon::ALL.len())]
    }
}

/// key isomorphism
impl TryFrom<char> for Weapon {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Weapon::ALL.into_iter().find(|w| w.key() == c).ok_or(c)
    }
}
impl From<Weapon> for char {
    fn from(w: Weapon) -> char {
        w.key()
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Weapon::Rock => "rock",
                Weapon::Paper => "paper",
                Weapon::Scissors => "scissors",
                Weapon::Lizard => "lizard",
                Weapon::Spock => "Spock",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn exactly_one_of_each_distinct_pair_wins() {
        for a in Weapon::ALL {
            for b in Weapon::ALL.into_iter().filter(|b| *b != a) {
                assert!(a.beats(b) != b.beats(a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn nothing_beats_itself() {
        assert!(Weapon::ALL.into_iter().all(|w| !w.beats(w)));
    }

    #[test]
    fn ten_winning_pairs_two_each_way() {
        let pairs = Weapon::ALL
            .into_iter()
            .flat_map(|a| Weapon::ALL.into_iter().map(move |b| (a, b)))
            .filter(|(a, b)| a.beats(*b))
            .count();
        assert_eq!(pairs, 10);
        for w in Weapon::ALL {
            let wins = Weapon::ALL.iter().filter(|o| w.beats(**o)).count();
            let losses = Weapon::ALL.iter().filter(|o| o.beats(w)).count();
            assert_eq!((wins, losses), (2, 2), "{}", w);
        }
    }

    #[test]
    fn rock_rules() {
        assert!(Weapon::Rock.beats(Weapon::Scissors));
        assert!(Weapon::Rock.beats(Weapon::Lizard));
        assert!(!Weapon::Rock.beats(Weapon::Paper));
    }

    #[test]
    fn cyclic_not_transitive() {
        assert!(Weapon::Rock.beats(Weapon::Scissors));
        assert!(Weapon::Scissors.beats(Weapon::Paper));
        assert!(Weapon::Paper.beats(Weapon::Rock));
    }

    #[test]
    fn bijective_key() {
        for w in Weapon::ALL {
            assert!(w == Weapon::try_from(char::from(w)).unwrap());
        }
        assert_eq!(Weapon::try_from('x'), Err('x'));
        assert_eq!(Weapon::try_from('R'), Err('R'));
    }

    #[test]
    fn spock_keeps_his_capital() {
        assert_eq!(Weapon::Spock.to_string(), "Spock");
        assert_eq!(Weapon::Lizard.to_string(), "lizard");
        assert_eq!(Weapon::Spock.label(), "(S)pock");
        assert_eq!(Weapon::Rock.label(), "(r)ock");
    }

    #[test]
    fn sampling_covers_every_weapon() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let seen = (0..500)
            .map(|_| rng.random::<Weapon>())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), 5);
    }
}

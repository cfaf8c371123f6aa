use super::*;
use crate::Error;

/// How `winner` disposes of `loser`, one verb per winning pair.
const fn verb(winner: Weapon, loser: Weapon) -> Option<&'static str> {
    match (winner, loser) {
        (Weapon::Scissors, Weapon::Paper) => Some("cuts"),
        (Weapon::Paper, Weapon::Rock) => Some("covers"),
        (Weapon::Rock, Weapon::Lizard) => Some("crushes"),
        (Weapon::Lizard, Weapon::Spock) => Some("poisons"),
        (Weapon::Spock, Weapon::Scissors) => Some("smashes"),
        (Weapon::Scissors, Weapon::Lizard) => Some("decapitates"),
        (Weapon::Lizard, Weapon::Paper) => Some("eats"),
        (Weapon::Paper, Weapon::Spock) => Some("disproves"),
        (Weapon::Spock, Weapon::Rock) => Some("vaporizes"),
        (Weapon::Rock, Weapon::Scissors) => Some("crushes"),
        _ => None,
    }
}

/// Flavor text for a decisive round, e.g. "rock crushes scissors".
///
/// Only the ten winning pairs have any; anything else reaching here means the
/// caller resolved a tie or got the winner backwards.
pub fn gore(winner: Weapon, loser: Weapon) -> Result<String, Error> {
    verb(winner, loser)
        .map(|verb| format!("{} {} {}", winner, verb, loser))
        .ok_or(Error::Stalemate(winner, loser))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_winning_pair_has_gore() {
        for a in Weapon::ALL {
            for b in Weapon::ALL {
                assert_eq!(a.beats(b), gore(a, b).is_ok(), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn rock_crushes_scissors() {
        assert_eq!(
            gore(Weapon::Rock, Weapon::Scissors).unwrap(),
            "rock crushes scissors"
        );
        assert_eq!(
            gore(Weapon::Lizard, Weapon::Spock).unwrap(),
            "lizard poisons Spock"
        );
    }

    #[test]
    fn ties_and_reversals_are_violations() {
        assert!(matches!(
            gore(Weapon::Rock, Weapon::Rock),
            Err(Error::Stalemate(Weapon::Rock, Weapon::Rock))
        ));
        assert!(gore(Weapon::Scissors, Weapon::Rock).is_err());
    }
}

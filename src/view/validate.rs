//! Input validation shared by every view.
use crate::NAME_MAX_LEN;
use crate::weapons::Weapon;

/// Joins choices the way a person would list them: `a`, `a or b`, `a, b or c`.
pub fn prettier<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => format!(
            "{} or {}",
            init.iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            last.as_ref()
        ),
    }
}

/// Accepts a player name and returns it with its first letter capitalised.
///
/// Names must be non-empty, at most [`NAME_MAX_LEN`] characters, and made of
/// word characters only (ASCII letters, digits, underscore).
pub fn name(input: &str) -> Result<String, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(String::from("Please enter a name"));
    }
    if input.chars().count() > NAME_MAX_LEN {
        return Err(format!("Names are at most {} characters", NAME_MAX_LEN));
    }
    if !input.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(String::from("Use letters, digits or underscores only"));
    }
    let mut chars = input.chars();
    Ok(chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default())
}

/// The keys that select `weapons`, in order.
pub fn keys(weapons: &[Weapon]) -> Vec<String> {
    weapons.iter().map(|w| w.key().to_string()).collect()
}

/// Resolves a typed key to one of the offered weapons.
pub fn choice(input: &str, weapons: &[Weapon]) -> Option<Weapon> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Weapon::try_from(c).ok().filter(|w| weapons.contains(w)),
        _ => None,
    }
}

/// Yes/no answers.
pub fn answer(input: &str) -> Option<bool> {
    match input.trim() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prettier_lists() {
        assert_eq!(prettier::<&str>(&[]), "");
        assert_eq!(prettier(&["y"]), "y");
        assert_eq!(prettier(&["y", "n"]), "y or n");
        assert_eq!(prettier(&["y", "n", "q"]), "y, n or q");
        assert_eq!(
            prettier(&keys(&Weapon::ALL)),
            "r, p, s, l or S"
        );
    }

    #[test]
    fn names_are_capitalised() {
        assert_eq!(name("ada").unwrap(), "Ada");
        assert_eq!(name("  grace_h  ").unwrap(), "Grace_h");
        assert_eq!(name("x1").unwrap(), "X1");
    }

    #[test]
    fn bad_names_are_rejected() {
        assert!(name("").is_err());
        assert!(name("   ").is_err());
        assert!(name("two words").is_err());
        assert!(name("semi;colon").is_err());
        assert!(name("h\u{e9}llo").is_err());
        assert!(name("\u{661}\u{662}").is_err());
        assert!(name(&"a".repeat(NAME_MAX_LEN + 1)).is_err());
        assert!(name(&"a".repeat(NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn choices_are_case_sensitive() {
        assert_eq!(choice("S", &Weapon::ALL), Some(Weapon::Spock));
        assert_eq!(choice("s", &Weapon::ALL), Some(Weapon::Scissors));
        assert_eq!(choice(" l\n", &Weapon::ALL), Some(Weapon::Lizard));
        assert_eq!(choice("x", &Weapon::ALL), None);
        assert_eq!(choice("rock", &Weapon::ALL), None);
        assert_eq!(choice("", &Weapon::ALL), None);
    }

    #[test]
    fn choices_respect_the_offer() {
        let offer = [Weapon::Rock, Weapon::Paper];
        assert_eq!(choice("p", &offer), Some(Weapon::Paper));
        assert_eq!(choice("l", &offer), None);
    }

    #[test]
    fn answers() {
        assert_eq!(answer("y\n"), Some(true));
        assert_eq!(answer("n"), Some(false));
        assert_eq!(answer("yes"), None);
    }
}

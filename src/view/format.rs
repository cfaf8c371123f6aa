//! Text shared by every view.
//!
//! Each function renders one screenful-sized piece; views decide where it goes.
use crate::Round;
use crate::WIN_THRESHOLD;
use crate::players::Seat;
use crate::weapons::Weapon;
use colored::*;

pub fn welcome() -> String {
    format!(
        "{}\nFirst to {} wins. Rock crushes scissors, Spock vaporizes rock, and so on.",
        "Welcome to Rock Paper Scissors Lizard Spock".bold(),
        WIN_THRESHOLD
    )
}

pub fn goodbye() -> String {
    String::from("Thanks for playing!")
}

pub fn computer(name: &str) -> String {
    format!("Your opponent today is {}.", name.bold())
}

/// Menu line for the weapon prompt, e.g. `Your choice: (r)ock, (p)aper ...`.
pub fn menu(weapons: &[Weapon]) -> String {
    format!(
        "Your choice: {}",
        weapons
            .iter()
            .map(|w| w.label())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

pub fn status(round: Round, p1: &Seat, p2: &Seat) -> String {
    format!("{}  |  {}  |  {}", format!("ROUND {:>3}", round).dimmed(), p1, p2)
}

pub fn round(
    p1: &Seat,
    p2: &Seat,
    winner: Option<&str>,
    round: Round,
    gore: Option<&str>,
) -> String {
    let mut lines = Vec::with_capacity(4);
    for seat in [p1, p2] {
        if let Some(weapon) = seat.weapon() {
            lines.push(format!("{} plays {}", seat.name(), weapon.painted()));
        }
    }
    if let Some(gore) = gore {
        lines.push(capitalize(gore).yellow().to_string());
    }
    match winner {
        Some(name) => lines.push(format!("{} wins round {}!", name, round).green().to_string()),
        None => lines.push(format!("Round {} is a tie!", round).cyan().to_string()),
    }
    lines.join("\n")
}

pub fn results(p1: &Seat, p2: &Seat, winner: &str) -> String {
    format!(
        "{}\n{}: {}  {}: {}\nWinner: {}",
        "FINAL SCORE".bold(),
        p1.name(),
        p1.score(),
        p2.name(),
        p2.score(),
        winner.green().bold()
    )
}

/// Round-by-round table of both ledgers, each round marked with who took it.
pub fn history(round: Round, p1: &Seat, p2: &Seat, winner: &str) -> String {
    let mut lines = vec![format!(
        "{:>5}  {:<20} {:<20} {}",
        "ROUND",
        p1.name(),
        p2.name(),
        "WINNER"
    )];
    for n in 1..=round {
        let a = p1.ledger().get(n);
        let b = p2.ledger().get(n);
        let taken = match (a.map(|r| r.won()), b.map(|r| r.won())) {
            (Some(true), _) => p1.name(),
            (_, Some(true)) => p2.name(),
            _ => "tie",
        };
        lines.push(format!(
            "{:>5}  {:<20} {:<20} {}",
            n,
            a.map(|r| r.weapon().to_string()).unwrap_or_default(),
            b.map(|r| r.weapon().to_string()).unwrap_or_default(),
            taken
        ));
    }
    lines.push(format!("{} took the match in {} rounds", winner, round));
    lines.join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

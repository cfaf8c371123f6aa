use super::*;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Select;
use dialoguer::console::Term;

/// Interactive view built on arrow-key menus.
///
/// Each round clears the screen and redraws the scoreboard, so the terminal
/// is left alone only after [`quit`](View::quit) restores the cursor. Esc at
/// a menu quits the session.
pub struct Prompt {
    term: Term,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Prompt {
    /// Whether stdout can host the interactive view at all.
    pub fn available() -> bool {
        Term::stdout().is_term()
    }
    fn say(&self, text: &str) -> Result<(), Error> {
        Ok(self.term.write_line(text)?)
    }
}

impl View for Prompt {
    fn display_welcome(&mut self) -> Result<(), Error> {
        self.term.clear_screen()?;
        self.say(&format::welcome())
    }
    fn display_goodbye(&mut self) -> Result<(), Error> {
        self.say(&format::goodbye())
    }
    fn retrieve_user_name(&mut self) -> Result<String, Error> {
        let input = Input::<String>::new()
            .with_prompt("What's your name?")
            .validate_with(|i: &String| -> Result<(), String> { validate::name(i).map(|_| ()) })
            .report(false)
            .interact_text_on(&self.term)?;
        Ok(validate::name(&input).unwrap_or(input))
    }
    fn retrieve_user_move(&mut self, weapons: &[Weapon]) -> Result<Weapon, Error> {
        let labels = weapons.iter().map(|w| w.label()).collect::<Vec<_>>();
        Select::new()
            .with_prompt("Your choice")
            .items(&labels)
            .default(0)
            .report(false)
            .interact_on_opt(&self.term)?
            .map(|i| weapons[i])
            .ok_or(Error::Interrupted)
    }
    fn play_again(&mut self) -> Result<bool, Error> {
        Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact_on_opt(&self.term)?
            .ok_or(Error::Interrupted)
    }
    fn display_match_status(&mut self, round: Round, p1: &Seat, p2: &Seat) -> Result<(), Error> {
        self.term.clear_screen()?;
        self.say(&format::status(round, p1, p2))
    }
    fn display_round_info(
        &mut self,
        p1: &Seat,
        p2: &Seat,
        winner: Option<&str>,
        round: Round,
        gore: Option<&str>,
    ) -> Result<(), Error> {
        self.say(&format::round(p1, p2, winner, round, gore))?;
        self.say("")?;
        Select::new()
            .items(&["Next round"])
            .default(0)
            .report(false)
            .interact_on_opt(&self.term)?
            .map(|_| ())
            .ok_or(Error::Interrupted)
    }
    fn display_match_results(
        &mut self,
        p1: &Seat,
        p2: &Seat,
        winner: &str,
    ) -> Result<(), Error> {
        self.say(&format::results(p1, p2, winner))
    }
    fn display_move_history(
        &mut self,
        round: Round,
        p1: &Seat,
        p2: &Seat,
        winner: &str,
    ) -> Result<(), Error> {
        self.term.clear_screen()?;
        self.say(&format::history(round, p1, p2, winner))?;
        self.say("")
    }
    fn display_computer_name(&mut self, name: &str) -> Result<(), Error> {
        self.say(&format::computer(name))
    }
    fn quit(&mut self) {
        if let Err(e) = self.term.show_cursor() {
            log::warn!("[prompt] could not restore cursor: {}", e);
        }
    }
    fn cleanup(&self) -> Cleanup {
        let term = self.term.clone();
        Cleanup::new(move || {
            let _ = term.show_cursor();
        })
    }
}

impl Drop for Prompt {
    fn drop(&mut self) {
        self.quit();
    }
}

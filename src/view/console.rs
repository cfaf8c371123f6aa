use super::*;
use colored::*;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Stdin;
use std::io::Stdout;
use std::io::Write;

/// Plain line-oriented view.
///
/// Reads answers one line at a time and re-prompts with the list of valid
/// choices until it gets one. End of input counts as the user quitting.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn output(&self) -> &W {
        &self.output
    }
    fn say(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
    /// Next line of input. Undecodable bytes become U+FFFD and fail
    /// validation like any other typo.
    fn line(&mut self) -> Result<String, Error> {
        let ref mut buffer = Vec::new();
        match self.input.read_until(b'\n', buffer)? {
            0 => Err(Error::Interrupted),
            _ => Ok(String::from_utf8_lossy(buffer).trim().to_string()),
        }
    }
    /// Ask until `parse` accepts an answer, naming `hint` on every miss.
    fn ask<T, F>(&mut self, prompt: &str, hint: &str, parse: F) -> Result<T, Error>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        self.say(prompt)?;
        loop {
            let line = self.line()?;
            match parse(&line) {
                Ok(answer) => return Ok(answer),
                Err(reason) => {
                    log::debug!("[console] rejected {:?}: {}", line, reason);
                    self.say(&format!("{}", hint.yellow()))?;
                }
            }
        }
    }
}

impl<R, W> View for Console<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn display_welcome(&mut self) -> Result<(), Error> {
        self.say(&format::welcome())
    }
    fn display_goodbye(&mut self) -> Result<(), Error> {
        self.say(&format::goodbye())
    }
    fn retrieve_user_name(&mut self) -> Result<String, Error> {
        self.say("What's your name?")?;
        loop {
            let line = self.line()?;
            match validate::name(&line) {
                Ok(name) => return Ok(name),
                Err(reason) => self.say(&format!("{}", reason.yellow()))?,
            }
        }
    }
    fn retrieve_user_move(&mut self, weapons: &[Weapon]) -> Result<Weapon, Error> {
        let hint = format!("Please enter {}", validate::prettier(&validate::keys(weapons)));
        self.ask(&format::menu(weapons), &hint, |line| {
            validate::choice(line, weapons).ok_or_else(|| String::from("unknown weapon"))
        })
    }
    fn play_again(&mut self) -> Result<bool, Error> {
        let hint = format!("Please enter {}", validate::prettier(&["y", "n"]));
        self.ask("Play again (y/n)?", &hint, |line| {
            validate::answer(line).ok_or_else(|| String::from("not y or n"))
        })
    }
    fn display_match_status(&mut self, round: Round, p1: &Seat, p2: &Seat) -> Result<(), Error> {
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
        self.say(&format::round(p1, p2, winner, round, gore))
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
        self.say(&format::history(round, p1, p2, winner))
    }
    fn display_computer_name(&mut self, name: &str) -> Result<(), Error> {
        self.say(&format::computer(name))
    }
}

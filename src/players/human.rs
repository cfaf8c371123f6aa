use super::*;
use crate::Error;
use crate::view::View;
use crate::weapons::Weapon;

/// Interactive player whose moves come from the view.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn decide(&mut self, recall: Recall<'_>, view: &mut dyn View) -> Result<Weapon, Error> {
        let weapon = view.retrieve_user_move(&Weapon::ALL)?;
        log::debug!("[human] round {} plays {}", recall.round, weapon);
        Ok(weapon)
    }
}

//! # Roster Builder
//!
//! Interactive creation of a new party.

use super::{Hero, Party};
use crate::{AmbushResult, Prompter};
use std::io::{BufRead, Write};

/// Asks for a party name, each hero's details, and one level shared by all.
///
/// Asking for the level once is what keeps every member at the same level,
/// which budgeting relies on.
pub fn ask_party<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> AmbushResult<Party> {
    let party_name = prompter.ask("What is the party name? ")?;
    let hero_count = prompter.ask_number("How many heroes are there? ")?;

    let mut drafts = Vec::new();
    for index in 0..hero_count {
        prompter.say(&format!("\nHero #{}:", index + 1))?;
        let name = prompter.ask("  Name: ")?;
        let race = prompter.ask("  Race: ")?;
        let class = prompter.ask("  Class: ")?;
        drafts.push((name, race, class));
    }

    let shared_level = prompter.ask_number("\nWhat level are all the heroes? ")?;
    let members = drafts
        .into_iter()
        .map(|(name, race, class)| Hero {
            name,
            race,
            class,
            level: shared_level,
        })
        .collect();

    Ok(Party {
        party_name,
        members,
    })
}

//! # Interactive Sessions
//!
//! The two conversations the tool holds with a game master: building a party
//! roster, and generating encounters until one is saved.

use super::Prompter;
use crate::generation::{EncounterGenerator, EncounterRequest, GenerationOutcome};
use crate::{
    ask_party, write_encounter_file, AmbushResult, Bestiary, Encounter, MonsterLinks, Party,
    QuestType,
};
use chrono::NaiveDate;
use log::info;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Answers to the encounter setup questions of the roster tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterSetup {
    pub location: String,
    /// Raw answer, e.g. "main" or "side quest"
    pub encounter_type: String,
    pub monster_wish: Option<String>,
}

/// Asks where the encounter happens, what kind it is, and for any monster wish.
pub fn ask_encounter_setup<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> AmbushResult<EncounterSetup> {
    prompter.say("\n== Encounter Setup ==")?;
    let location =
        prompter.ask("Where is the encounter taking place? (e.g., swamp, desert, forest): ")?;
    let encounter_type = prompter
        .ask("Is this a main encounter or side quest? ")?
        .to_lowercase();
    let wish = prompter.ask("Any special monster wishes? (Leave blank if none): ")?;

    Ok(EncounterSetup {
        location,
        encounter_type,
        monster_wish: if wish.is_empty() { None } else { Some(wish) },
    })
}

/// Roster tool: load or create a party, then collect encounter setup.
pub struct PartySession<'a> {
    party_file: &'a Path,
}

impl<'a> PartySession<'a> {
    pub fn new(party_file: &'a Path) -> Self {
        Self { party_file }
    }

    /// Runs the roster conversation and returns the party in use.
    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> AmbushResult<Party> {
        prompter.say("== Hero Encounter CLI Tool ==")?;

        let mut party = None;
        if self.party_file.exists() {
            let answer = prompter.ask("Load existing party? [Y/n]: ")?.to_lowercase();
            if matches!(answer.as_str(), "" | "y" | "yes") {
                party = Party::load(self.party_file)?;
                if let Some(loaded) = &party {
                    prompter.say("\n== Loaded Party ==")?;
                    prompter.say(&loaded.summary())?;
                }
            }
        }

        let party = match party {
            Some(party) => party,
            None => {
                prompter.say("\n== Create New Party ==")?;
                let party = ask_party(prompter)?;
                party.save(self.party_file)?;
                prompter.say(&format!("\nParty saved to {}", self.party_file.display()))?;
                prompter.say("\n== Party Saved ==")?;
                prompter.say(&party.summary())?;
                party
            }
        };

        let setup = ask_encounter_setup(prompter)?;

        prompter.say("\n== Final Encounter Summary ==")?;
        prompter.say(&party.summary())?;
        prompter.say(&format!("\nEncounter at: {}", setup.location))?;
        prompter.say(&format!("Type: {}", setup.encounter_type))?;
        match &setup.monster_wish {
            Some(wish) => prompter.say(&format!("Special Monster: {}", wish))?,
            None => prompter.say("No specific monster preference.")?,
        }
        Ok(party)
    }
}

/// Encounter generator loop: generate, show, then save, retry, or quit.
pub struct EncounterSession<'a> {
    party: &'a Party,
    bestiary: &'a Bestiary,
    links: &'a MonsterLinks,
    output_dir: PathBuf,
    date: NaiveDate,
}

impl<'a> EncounterSession<'a> {
    pub fn new(
        party: &'a Party,
        bestiary: &'a Bestiary,
        links: &'a MonsterLinks,
        output_dir: &Path,
        date: NaiveDate,
    ) -> Self {
        Self {
            party,
            bestiary,
            links,
            output_dir: output_dir.to_path_buf(),
            date,
        }
    }

    /// Runs until the user saves or exits. Returns the saved file, if any.
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        rng: &mut StdRng,
    ) -> AmbushResult<Option<PathBuf>> {
        let generator = EncounterGenerator::new(self.bestiary, self.party);

        loop {
            let quest_answer = prompter.ask("Is this a main quest or a side quest? ")?;
            let quest_type = QuestType::from_answer(&quest_answer);
            let environment = prompter.ask("Where will the heroes fight? ")?;
            let request = EncounterRequest::new(&environment, quest_type);

            let encounter = match generator.generate(&request, rng)? {
                GenerationOutcome::Generated(encounter) => encounter,
                GenerationOutcome::NoMonsters { environments } => {
                    prompter.say("\nThere are no monsters in this location.")?;
                    prompter.say("Available environments:")?;
                    for env in environments {
                        prompter.say(&format!(" - {}", env))?;
                    }
                    continue;
                }
            };

            self.show(prompter, &encounter)?;

            loop {
                let choice = prompter
                    .ask("\nDo you want to save this encounter or create a new one? (save/new/exit): ")?
                    .to_lowercase();
                match choice.as_str() {
                    "save" => {
                        let path =
                            write_encounter_file(&self.output_dir, &encounter, self.links, self.date)?;
                        prompter.say(&format!("\nSaved encounter to {}", path.display()))?;
                        return Ok(Some(path));
                    }
                    "new" => break,
                    "exit" => {
                        prompter.say("Exiting without saving.")?;
                        info!("Session ended without saving");
                        return Ok(None);
                    }
                    _ => prompter.say("Invalid input. Please enter 'save', 'new', or 'exit'.")?,
                }
            }
        }
    }

    fn show<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        encounter: &Encounter,
    ) -> AmbushResult<()> {
        prompter.say("\n== Encounter Generated ==")?;
        prompter.say(&format!("Name: {}", encounter.name))?;
        prompter.say(&format!("Type: {}", encounter.quest_type.title()))?;
        prompter.say(&format!("Environment: {}", encounter.environment))?;
        prompter.say(&format!(
            "Budget: {} XP (selected {} XP)",
            encounter.budget,
            encounter.total_xp()
        ))?;
        prompter.say("Monsters:")?;
        if encounter.monsters.is_empty() {
            prompter.say(" (no monsters fit this budget)")?;
        }
        for selected in &encounter.monsters {
            prompter.say(&format!(" - {} (CR {})", selected.monster.name, selected.cr))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils::create_rng;
    use crate::{Hero, Monster};
    use std::io::Cursor;

    fn fixtures() -> (Party, Bestiary) {
        let party = Party::new(
            "Tin Lanterns",
            vec![
                Hero::new("Odo", "Gnome", "Artificer", 2),
                Hero::new("Pell", "Human", "Monk", 2),
            ],
        );
        let mut monsters = Vec::new();
        for (name, cr) in [("Kobold", "1/8"), ("Giant Rat", "1/8"), ("Goblin", "1/4")] {
            let mut monster = Monster::new(name, cr);
            monster.environment = vec!["Underdark".to_string()];
            monsters.push(monster);
        }
        (party, Bestiary::from_monsters(monsters))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 31).unwrap()
    }

    #[test]
    fn test_unknown_location_lists_environments_then_exit() {
        let (party, bestiary) = fixtures();
        let links = MonsterLinks::new();
        let dir = tempfile::tempdir().unwrap();
        let session = EncounterSession::new(&party, &bestiary, &links, dir.path(), date());

        let script = "side\nvolcano\nside\nunderdark\nexit\n";
        let mut prompter = Prompter::new(Cursor::new(script), Vec::new());
        let saved = session.run(&mut prompter, &mut create_rng(5)).unwrap();
        assert!(saved.is_none());

        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(output.contains("There are no monsters in this location.\nAvailable environments:\n - Underdark\n"));
        assert!(output.contains("== Encounter Generated =="));
        assert!(output.contains("Exiting without saving."));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_choice_then_save() {
        let (party, bestiary) = fixtures();
        let links = MonsterLinks::new();
        let dir = tempfile::tempdir().unwrap();
        let session = EncounterSession::new(&party, &bestiary, &links, dir.path(), date());

        let script = "main\nUnderdark\nmaybe\nnew\nmain\nunderdark\nsave\n";
        let mut prompter = Prompter::new(Cursor::new(script), Vec::new());
        let saved = session.run(&mut prompter, &mut create_rng(5)).unwrap().unwrap();

        assert!(saved.starts_with(dir.path()));
        assert!(saved.to_string_lossy().contains("2024-10-31_The_"));
        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(output.contains("Invalid input. Please enter 'save', 'new', or 'exit'."));
        assert_eq!(output.matches("== Encounter Generated ==").count(), 2);
    }

    #[test]
    fn test_party_session_creates_and_saves_roster() {
        let dir = tempfile::tempdir().unwrap();
        let party_file = dir.path().join("party.json");
        let script = "Lamplighters\n1\nNim\nHalfling\nBard\n4\nforest\nmain\n\n";
        let mut prompter = Prompter::new(Cursor::new(script), Vec::new());

        let party = PartySession::new(&party_file).run(&mut prompter).unwrap();
        assert_eq!(party.members[0].level, 4);
        assert_eq!(Party::load(&party_file).unwrap(), Some(party));

        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(output.contains("== Create New Party =="));
        assert!(output.contains("Encounter at: forest"));
        assert!(output.contains("No specific monster preference."));
    }

    #[test]
    fn test_party_session_loads_existing_roster() {
        let dir = tempfile::tempdir().unwrap();
        let party_file = dir.path().join("party.json");
        let (party, _) = fixtures();
        party.save(&party_file).unwrap();

        let script = "\ndesert\nSide Quest\nBlue Dragon\n";
        let mut prompter = Prompter::new(Cursor::new(script), Vec::new());
        let loaded = PartySession::new(&party_file).run(&mut prompter).unwrap();
        assert_eq!(loaded, party);

        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(output.contains("== Loaded Party =="));
        assert!(output.contains("Type: side quest"));
        assert!(output.contains("Special Monster: Blue Dragon"));
    }
}

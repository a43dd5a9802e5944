//! # Generation Module
//!
//! Budget-constrained encounter generation.
//!
//! This module ties the pieces together: the party sets the XP budget, the
//! bestiary supplies monsters for the requested environment, and the
//! selector fills the budget. All randomness comes from the RNG handed in,
//! so a fixed seed always produces the same encounter.

pub mod encounters;
pub mod names;

pub use encounters::*;
pub use names::*;

use crate::{AmbushResult, Bestiary, ChallengeRating, Monster, Party, QuestType};
use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A monster picked for an encounter, with its resolved rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedMonster {
    pub monster: Monster,
    pub cr: ChallengeRating,
    pub xp: u32,
}

/// A finished encounter ready for display or rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    /// Flavor name such as "The Cursed Vault"
    pub name: String,
    pub quest_type: QuestType,
    /// Environment the monsters were drawn from, lowercased
    pub environment: String,
    /// XP budget the monsters were chosen against
    pub budget: i64,
    /// Monsters in selection order, anchor first
    pub monsters: Vec<SelectedMonster>,
}

impl Encounter {
    /// Combined XP of all selected monsters.
    pub fn total_xp(&self) -> i64 {
        self.monsters.iter().map(|m| i64::from(m.xp)).sum()
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRequest {
    pub environment: String,
    pub quest_type: QuestType,
}

impl EncounterRequest {
    pub fn new(environment: &str, quest_type: QuestType) -> Self {
        Self {
            environment: environment.trim().to_lowercase(),
            quest_type,
        }
    }
}

/// Result of a generation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Generated(Encounter),
    /// Nothing lives in the requested environment; lists the ones that exist
    NoMonsters { environments: BTreeSet<String> },
}

/// Builds encounters for one party from one compendium.
pub struct EncounterGenerator<'a> {
    bestiary: &'a Bestiary,
    party: &'a Party,
}

impl<'a> EncounterGenerator<'a> {
    pub fn new(bestiary: &'a Bestiary, party: &'a Party) -> Self {
        Self { bestiary, party }
    }

    /// Budgets, filters, selects, and names an encounter.
    ///
    /// # Errors
    ///
    /// Fails only when the party cannot be budgeted (empty roster or a level
    /// outside the tables). Selection itself never fails.
    pub fn generate(
        &self,
        request: &EncounterRequest,
        rng: &mut StdRng,
    ) -> AmbushResult<GenerationOutcome> {
        let difficulty = request.quest_type.difficulty();
        let budget = self.party.budget(difficulty)?;
        debug!("Budget for {} encounter: {} XP", difficulty, budget);

        let matching = self.bestiary.in_environment(&request.environment);
        if matching.is_empty() {
            return Ok(GenerationOutcome::NoMonsters {
                environments: self.bestiary.environments(),
            });
        }

        let monsters = build_encounter(&matching, budget, request.quest_type.is_main(), rng);
        let encounter = Encounter {
            name: random_encounter_name(rng),
            quest_type: request.quest_type,
            environment: request.environment.clone(),
            budget,
            monsters,
        };
        info!(
            "Generated '{}' with {} monsters ({} / {} XP)",
            encounter.name,
            encounter.monsters.len(),
            encounter.total_xp(),
            budget
        );
        Ok(GenerationOutcome::Generated(encounter))
    }
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hero;

    fn party_of(level: u32, size: usize) -> Party {
        let members = (0..size)
            .map(|i| Hero::new(&format!("Hero {}", i), "Human", "Fighter", level))
            .collect();
        Party::new("Test Party", members)
    }

    fn swamp_bestiary() -> Bestiary {
        let mut monsters = Vec::new();
        for (name, cr) in [("Bullywug", "1/4"), ("Crocodile", "1/2"), ("Hag", "2"), ("Hydra", "8")] {
            let mut monster = Monster::new(name, cr);
            monster.environment = vec!["swamp".to_string()];
            monsters.push(monster);
        }
        let mut camel = Monster::new("Camel", "1/8");
        camel.environment = vec!["desert".to_string()];
        monsters.push(camel);
        Bestiary::from_monsters(monsters)
    }

    #[test]
    fn test_generated_encounter_respects_budget() {
        let bestiary = swamp_bestiary();
        let party = party_of(3, 4);
        let generator = EncounterGenerator::new(&bestiary, &party);
        let mut rng = utils::create_rng(12345);

        let request = EncounterRequest::new("Swamp", QuestType::Side);
        match generator.generate(&request, &mut rng).unwrap() {
            GenerationOutcome::Generated(encounter) => {
                assert_eq!(encounter.budget, 600);
                assert_eq!(encounter.environment, "swamp");
                assert!(encounter.total_xp() <= encounter.budget);
                assert!(encounter.name.starts_with("The "));
                assert!(encounter
                    .monsters
                    .iter()
                    .all(|m| m.monster.name != "Hydra" && m.monster.name != "Camel"));
            }
            other => panic!("expected an encounter, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_environment_lists_known_ones() {
        let bestiary = swamp_bestiary();
        let party = party_of(3, 4);
        let generator = EncounterGenerator::new(&bestiary, &party);
        let mut rng = utils::create_rng(1);

        let request = EncounterRequest::new("tundra", QuestType::Main);
        let outcome = generator.generate(&request, &mut rng).unwrap();
        let expected: BTreeSet<String> = ["desert", "swamp"].iter().map(|s| s.to_string()).collect();
        assert_eq!(outcome, GenerationOutcome::NoMonsters { environments: expected });
    }

    #[test]
    fn test_same_seed_same_encounter() {
        let bestiary = swamp_bestiary();
        let party = party_of(5, 5);
        let generator = EncounterGenerator::new(&bestiary, &party);
        let request = EncounterRequest::new("swamp", QuestType::Main);

        let first = generator.generate(&request, &mut utils::create_rng(99)).unwrap();
        let second = generator.generate(&request, &mut utils::create_rng(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_party_errors_propagate() {
        let bestiary = swamp_bestiary();
        let party = Party::new("Empty", Vec::new());
        let generator = EncounterGenerator::new(&bestiary, &party);
        let request = EncounterRequest::new("swamp", QuestType::Side);

        assert!(generator.generate(&request, &mut utils::create_rng(1)).is_err());
    }
}

//! # Party Module
//!
//! The hero roster, its JSON persistence, and the inputs it feeds into the
//! encounter budget.

pub mod roster;

pub use roster::*;

use crate::{get_xp_threshold, AmbushError, AmbushResult, Difficulty};
use log::info;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// A single adventurer in the party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub race: String,
    pub class: String,
    #[serde(deserialize_with = "level_from_number_or_text")]
    pub level: u32,
}

impl Hero {
    pub fn new(name: &str, race: &str, class: &str, level: u32) -> Self {
        Self {
            name: name.to_string(),
            race: race.to_string(),
            class: class.to_string(),
            level,
        }
    }
}

/// Rosters written by earlier versions store the level as text.
fn level_from_number_or_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLevel {
        Number(u32),
        Text(String),
    }

    match RawLevel::deserialize(deserializer)? {
        RawLevel::Number(level) => Ok(level),
        RawLevel::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("level '{}' is not a number", text))),
    }
}

/// An adventuring party. Members are kept in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub party_name: String,
    pub members: Vec<Hero>,
}

impl Party {
    pub fn new(party_name: &str, members: Vec<Hero>) -> Self {
        Self {
            party_name: party_name.to_string(),
            members,
        }
    }

    /// Reads a roster file, returning `None` when it does not exist.
    pub fn load(path: &Path) -> AmbushResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)?;
        let party: Party = serde_json::from_str(&text)?;
        info!(
            "Loaded party '{}' ({} members) from {}",
            party.party_name,
            party.members.len(),
            path.display()
        );
        Ok(Some(party))
    }

    /// Writes the roster as indented JSON.
    pub fn save(&self, path: &Path) -> AmbushResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        info!("Saved party '{}' to {}", self.party_name, path.display());
        Ok(())
    }

    /// Level and head count used for budgeting.
    ///
    /// All heroes share one level, so the first member's level stands for
    /// the whole party.
    pub fn budget_inputs(&self) -> AmbushResult<(u32, usize)> {
        let leader = self.members.first().ok_or_else(|| {
            AmbushError::InvalidParty(format!("party '{}' has no members", self.party_name))
        })?;
        Ok((leader.level, self.members.len()))
    }

    /// Encounter XP budget for this party at the given difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambush::{Difficulty, Hero, Party};
    ///
    /// let heroes = (0..4).map(|i| Hero::new(&format!("Hero {}", i), "Elf", "Bard", 5)).collect();
    /// let party = Party::new("The Lanterns", heroes);
    /// assert_eq!(party.budget(Difficulty::Hard).unwrap(), 3000);
    /// ```
    pub fn budget(&self, difficulty: Difficulty) -> AmbushResult<i64> {
        let (level, count) = self.budget_inputs()?;
        get_xp_threshold(level, count, difficulty)
    }

    /// Human-readable roster listing.
    pub fn summary(&self) -> String {
        let mut text = format!("Party Name: {}", self.party_name);
        for hero in &self.members {
            text.push_str(&format!(
                "\n  {} - {} {} (Level {})",
                hero.name, hero.race, hero.class, hero.level
            ));
        }
        text
    }
}

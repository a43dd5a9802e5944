//! # Bestiary Module
//!
//! Monster records and the compendium they are loaded from.
//!
//! Compendium files follow the `{"monster": [...]}` layout. Only the name,
//! challenge rating, and environment tags are interpreted; statblock fields
//! are carried through untouched for the renderer.

pub mod monster;

pub use monster::*;

use crate::AmbushResult;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// A loaded monster compendium.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bestiary {
    #[serde(rename = "monster", default)]
    pub monsters: Vec<Monster>,
}

impl Bestiary {
    /// Wraps an in-memory list of monsters.
    pub fn from_monsters(monsters: Vec<Monster>) -> Self {
        Self { monsters }
    }

    /// Reads a compendium file.
    pub fn load(path: &Path) -> AmbushResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let bestiary: Bestiary = serde_json::from_str(&text)?;
        info!(
            "Loaded {} monsters from {}",
            bestiary.monsters.len(),
            path.display()
        );
        Ok(bestiary)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Monsters that can appear in `location`, compared case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambush::{Bestiary, Monster};
    ///
    /// let mut wolf = Monster::new("Wolf", "1/4");
    /// wolf.environment = vec!["Forest".to_string()];
    /// let bestiary = Bestiary::from_monsters(vec![wolf]);
    ///
    /// assert_eq!(bestiary.in_environment("forest").len(), 1);
    /// assert!(bestiary.in_environment("desert").is_empty());
    /// ```
    pub fn in_environment(&self, location: &str) -> Vec<Monster> {
        let location = location.trim().to_lowercase();
        let matching: Vec<Monster> = self
            .monsters
            .iter()
            .filter(|monster| monster.lives_in(&location))
            .cloned()
            .collect();
        debug!("{} monsters found in '{}'", matching.len(), location);
        matching
    }

    /// Every environment tag used in the compendium, sorted.
    pub fn environments(&self) -> BTreeSet<String> {
        self.monsters
            .iter()
            .flat_map(|monster| monster.environment.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster_in(name: &str, environments: &[&str]) -> Monster {
        let mut monster = Monster::new(name, "1");
        monster.environment = environments.iter().map(|e| e.to_string()).collect();
        monster
    }

    #[test]
    fn test_environment_filter_ignores_case() {
        let bestiary = Bestiary::from_monsters(vec![
            monster_in("Crocodile", &["swamp", "coastal"]),
            monster_in("Bullywug", &["Swamp"]),
            monster_in("Jackal", &["desert"]),
        ]);

        let names: Vec<String> = bestiary
            .in_environment(" SWAMP ")
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Crocodile", "Bullywug"]);
    }

    #[test]
    fn test_environment_listing_is_sorted_and_unique() {
        let bestiary = Bestiary::from_monsters(vec![
            monster_in("Crocodile", &["swamp", "coastal"]),
            monster_in("Lizardfolk", &["swamp"]),
            monster_in("Jackal", &["desert"]),
            monster_in("Commoner", &[]),
        ]);

        let envs: Vec<String> = bestiary.environments().into_iter().collect();
        assert_eq!(envs, vec!["coastal", "desert", "swamp"]);
    }

    #[test]
    fn test_parse_compendium_document() {
        let json = r#"{
            "monster": [
                {"name": "Goblin", "source": "MM", "cr": "1/4", "environment": ["forest", "hill"],
                 "size": ["S"], "str": 8, "dex": 14},
                {"name": "Adult Green Dragon", "cr": {"value": "15", "lair": "16"},
                 "environment": ["forest"]},
                {"name": "Shadow Demon", "cr": 4}
            ]
        }"#;

        let bestiary: Bestiary = serde_json::from_str(json).unwrap();
        assert_eq!(bestiary.len(), 3);

        let goblin = &bestiary.monsters[0];
        assert_eq!(goblin.challenge_rating(), Some(crate::ChallengeRating::OneQuarter));
        assert_eq!(goblin.source.as_deref(), Some("MM"));

        let dragon = &bestiary.monsters[1];
        assert_eq!(dragon.challenge_rating(), Some(crate::ChallengeRating::Cr15));

        assert!(bestiary.monsters[2].environment.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bestiary.json");
        std::fs::write(&path, r#"{"monster": [{"name": "Rat", "cr": "0"}]}"#).unwrap();

        let bestiary = Bestiary::load(&path).unwrap();
        assert_eq!(bestiary.monsters[0].name, "Rat");

        assert!(Bestiary::load(&dir.path().join("missing.json")).is_err());
    }
}

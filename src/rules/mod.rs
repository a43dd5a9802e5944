//! # Rules Module
//!
//! Challenge ratings, difficulty tiers, and the encounter-building XP tables.

pub mod tables;

pub use tables::*;

use crate::{AmbushError, AmbushResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standardized difficulty label of a single monster.
///
/// Only labels present in the CR→XP table can be represented, so a value of
/// this type always has a known XP value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChallengeRating {
    Zero,
    OneEighth,
    OneQuarter,
    OneHalf,
    Cr1,
    Cr2,
    Cr3,
    Cr4,
    Cr5,
    Cr6,
    Cr7,
    Cr8,
    Cr9,
    Cr10,
    Cr11,
    Cr12,
    Cr13,
    Cr14,
    Cr15,
    Cr16,
    Cr17,
    Cr18,
    Cr19,
    Cr20,
}

impl ChallengeRating {
    /// Every rating, lowest first.
    pub fn all() -> &'static [ChallengeRating] {
        use ChallengeRating::*;
        &[
            Zero, OneEighth, OneQuarter, OneHalf, Cr1, Cr2, Cr3, Cr4, Cr5, Cr6, Cr7, Cr8, Cr9,
            Cr10, Cr11, Cr12, Cr13, Cr14, Cr15, Cr16, Cr17, Cr18, Cr19, Cr20,
        ]
    }

    /// Resolves a compendium label such as `"1/4"` or `"12"`.
    ///
    /// Returns `None` for labels without an XP entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambush::ChallengeRating;
    ///
    /// assert_eq!(ChallengeRating::from_label("1/2"), Some(ChallengeRating::OneHalf));
    /// assert_eq!(ChallengeRating::from_label("25"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        CR_XP
            .iter()
            .position(|(cr_label, _)| *cr_label == label)
            .map(|index| Self::all()[index])
    }

    /// The label as written in compendium data.
    pub fn label(self) -> &'static str {
        CR_XP[self as usize].0
    }

    /// XP awarded for defeating a monster of this rating.
    pub fn xp(self) -> u32 {
        CR_XP[self as usize].1
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Encounter difficulty tier, selecting a column of the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Deadly,
}

impl Difficulty {
    /// Column of this tier in [`XP_THRESHOLDS`].
    pub fn column(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Deadly => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Deadly => "deadly",
        }
    }
}

impl FromStr for Difficulty {
    type Err = AmbushError;

    fn from_str(s: &str) -> AmbushResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "deadly" => Ok(Difficulty::Deadly),
            other => Err(AmbushError::InvalidBudgetParameters(format!(
                "unknown difficulty '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an encounter advances the main story or a side quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    Main,
    Side,
}

impl QuestType {
    /// Interprets a typed answer. Only `main` selects a main quest.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("main") {
            QuestType::Main
        } else {
            QuestType::Side
        }
    }

    pub fn is_main(self) -> bool {
        self == QuestType::Main
    }

    /// Main quests are budgeted as deadly fights, side quests as medium ones.
    pub fn difficulty(self) -> Difficulty {
        match self {
            QuestType::Main => Difficulty::Deadly,
            QuestType::Side => Difficulty::Medium,
        }
    }

    /// Title-cased label used in rendered documents.
    pub fn title(self) -> &'static str {
        match self {
            QuestType::Main => "Main",
            QuestType::Side => "Side",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_table() {
        for cr in ChallengeRating::all() {
            assert_eq!(ChallengeRating::from_label(cr.label()), Some(*cr));
        }
        assert_eq!(ChallengeRating::all().len(), CR_XP.len());
    }

    #[test]
    fn test_golden_xp_values() {
        assert_eq!(ChallengeRating::Zero.xp(), 10);
        assert_eq!(ChallengeRating::OneHalf.xp(), 100);
        assert_eq!(ChallengeRating::Cr2.xp(), 450);
        assert_eq!(ChallengeRating::Cr5.xp(), 1800);
        assert_eq!(ChallengeRating::Cr20.xp(), 25000);
    }

    #[test]
    fn test_unknown_labels_do_not_resolve() {
        assert_eq!(ChallengeRating::from_label("21"), None);
        assert_eq!(ChallengeRating::from_label(""), None);
        assert_eq!(ChallengeRating::from_label("1/3"), None);
        assert_eq!(ChallengeRating::from_label(" 1"), None);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Deadly".parse::<Difficulty>().unwrap(), Difficulty::Deadly);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);

        let err = "brutal".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, AmbushError::InvalidBudgetParameters(_)));
    }

    #[test]
    fn test_quest_type_selects_difficulty() {
        assert_eq!(QuestType::from_answer(" Main "), QuestType::Main);
        assert_eq!(QuestType::from_answer("side"), QuestType::Side);
        assert_eq!(QuestType::from_answer("whatever"), QuestType::Side);
        assert_eq!(QuestType::Main.difficulty(), Difficulty::Deadly);
        assert_eq!(QuestType::Side.difficulty(), Difficulty::Medium);
    }
}

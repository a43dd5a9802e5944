//! # Monster Records
//!
//! A compendium entry and the shapes its challenge rating can take.

use crate::ChallengeRating;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Challenge rating as it appears in compendium data.
///
/// Most entries carry a bare label. Monsters with a lair or coven variant
/// carry an object whose `value` is the base rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CrField {
    Label(String),
    Structured(StructuredCr),
    Other(Value),
}

/// Object form of a challenge rating, e.g. `{"value": "10", "lair": "11"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredCr {
    /// `None` only when the key is absent; an explicit `null` is `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Default for CrField {
    fn default() -> Self {
        CrField::Other(Value::Null)
    }
}

impl From<&str> for CrField {
    fn from(label: &str) -> Self {
        CrField::Label(label.to_string())
    }
}

/// Reduces a compendium CR field to its label.
///
/// Never fails: anything that is neither a label nor a structured value
/// becomes `"0"`, as does a structured value without a `value` key. A
/// `value` that is not a string or number (including `null`) keeps its JSON
/// text, which does not match any table entry.
///
/// # Examples
///
/// ```
/// use ambush::{normalize_cr, CrField};
///
/// let structured: CrField = serde_json::from_str(r#"{"value": "3", "lair": "4"}"#).unwrap();
/// assert_eq!(normalize_cr(&structured), "3");
/// assert_eq!(normalize_cr(&CrField::from("3")), "3");
/// ```
pub fn normalize_cr(cr: &CrField) -> String {
    match cr {
        CrField::Label(label) => label.clone(),
        CrField::Structured(structured) => match &structured.value {
            None => "0".to_string(),
            Some(Value::String(label)) => label.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(other) => other.to_string(),
        },
        CrField::Other(_) => "0".to_string(),
    }
}

/// One monster from the compendium.
///
/// Statblock fields are kept as raw JSON because compendiums disagree on
/// their shape; unknown keys are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub cr: CrField,
    #[serde(default)]
    pub environment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub creature_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<Value>,
    #[serde(rename = "str", default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<Value>,
    #[serde(rename = "dex", default, skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<Value>,
    #[serde(rename = "con", default, skip_serializing_if = "Option::is_none")]
    pub constitution: Option<Value>,
    #[serde(rename = "int", default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<Value>,
    #[serde(rename = "wis", default, skip_serializing_if = "Option::is_none")]
    pub wisdom: Option<Value>,
    #[serde(rename = "cha", default, skip_serializing_if = "Option::is_none")]
    pub charisma: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pb: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senses: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passive: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Monster {
    /// Creates a monster with only a name and CR label set.
    pub fn new(name: &str, cr: &str) -> Self {
        Self {
            name: name.to_string(),
            source: None,
            cr: CrField::from(cr),
            environment: Vec::new(),
            description: None,
            size: None,
            creature_type: None,
            alignment: None,
            ac: None,
            speed: None,
            strength: None,
            dexterity: None,
            constitution: None,
            intelligence: None,
            wisdom: None,
            charisma: None,
            pb: None,
            save: None,
            skill: None,
            senses: None,
            passive: None,
            languages: None,
            extra: BTreeMap::new(),
        }
    }

    /// The resolved rating, or `None` when the CR has no XP entry.
    pub fn challenge_rating(&self) -> Option<ChallengeRating> {
        ChallengeRating::from_label(&normalize_cr(&self.cr))
    }

    /// Checks the environment tags against an already lowercased location.
    pub(crate) fn lives_in(&self, location: &str) -> bool {
        self.environment
            .iter()
            .any(|env| env.to_lowercase() == location)
    }

    /// Ability scores in STR, DEX, CON, INT, WIS, CHA order.
    pub fn ability_scores(&self) -> [Option<&Value>; 6] {
        [
            self.strength.as_ref(),
            self.dexterity.as_ref(),
            self.constitution.as_ref(),
            self.intelligence.as_ref(),
            self.wisdom.as_ref(),
            self.charisma.as_ref(),
        ]
    }
}

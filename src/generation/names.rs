//! # Encounter Names
//!
//! Flavor names for generated encounters.

use rand::seq::SliceRandom;
use rand::Rng;

const ADJECTIVES: [&str; 7] = [
    "Bloody",
    "Silent",
    "Burning",
    "Twisted",
    "Shattered",
    "Cursed",
    "Forgotten",
];

const NOUNS: [&str; 7] = ["Oath", "Throne", "Marsh", "Beast", "Vault", "Coven", "Wound"];

/// Picks an adjective and a noun independently, e.g. "The Cursed Vault".
pub fn random_encounter_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Nameless");
    let noun = NOUNS.choose(rng).copied().unwrap_or("Fight");
    format!("The {} {}", adjective, noun)
}

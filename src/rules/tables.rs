//! # XP Reference Tables
//!
//! Fixed encounter-design tables: XP per challenge rating and per-character
//! XP thresholds by party level and difficulty.

use super::Difficulty;
use crate::{AmbushError, AmbushResult};

/// XP value of each challenge rating, in [`ChallengeRating`](super::ChallengeRating) order.
pub const CR_XP: [(&str, u32); 24] = [
    ("0", 10),
    ("1/8", 25),
    ("1/4", 50),
    ("1/2", 100),
    ("1", 200),
    ("2", 450),
    ("3", 700),
    ("4", 1100),
    ("5", 1800),
    ("6", 2300),
    ("7", 2900),
    ("8", 3900),
    ("9", 5000),
    ("10", 5900),
    ("11", 7200),
    ("12", 8400),
    ("13", 10000),
    ("14", 11500),
    ("15", 13000),
    ("16", 15000),
    ("17", 18000),
    ("18", 20000),
    ("19", 22000),
    ("20", 25000),
];

/// Per-character XP thresholds `[easy, medium, hard, deadly]`.
/// Index is level - 1.
pub const XP_THRESHOLDS: [[u32; 4]; 20] = [
    [25, 50, 75, 100],         // Level 1
    [50, 100, 150, 200],       // Level 2
    [75, 150, 225, 400],       // Level 3
    [125, 250, 375, 500],      // Level 4
    [250, 500, 750, 1100],     // Level 5
    [300, 600, 900, 1400],     // Level 6
    [350, 750, 1100, 1700],    // Level 7
    [450, 900, 1400, 2100],    // Level 8
    [550, 1100, 1600, 2400],   // Level 9
    [600, 1200, 1900, 2800],   // Level 10
    [800, 1600, 2400, 3600],   // Level 11
    [1000, 2000, 3000, 4500],  // Level 12
    [1100, 2200, 3400, 5100],  // Level 13
    [1250, 2500, 3800, 5700],  // Level 14
    [1400, 2800, 4300, 6400],  // Level 15
    [1600, 3200, 4800, 7200],  // Level 16
    [2000, 3900, 5900, 8800],  // Level 17
    [2100, 4200, 6300, 9500],  // Level 18
    [2400, 4900, 7300, 10900], // Level 19
    [2800, 5700, 8500, 12700], // Level 20
];

/// Total encounter XP budget for `count` characters of the given level.
///
/// # Errors
///
/// Returns [`AmbushError::InvalidBudgetParameters`] when `level` is outside 1..=20.
///
/// # Examples
///
/// ```
/// use ambush::{get_xp_threshold, Difficulty};
///
/// assert_eq!(get_xp_threshold(5, 4, Difficulty::Hard).unwrap(), 3000);
/// assert!(get_xp_threshold(0, 4, Difficulty::Hard).is_err());
/// ```
pub fn get_xp_threshold(level: u32, count: usize, difficulty: Difficulty) -> AmbushResult<i64> {
    if !(1..=20).contains(&level) {
        return Err(AmbushError::InvalidBudgetParameters(format!(
            "level {} is outside 1-20",
            level
        )));
    }

    let per_character = XP_THRESHOLDS[(level - 1) as usize][difficulty.column()];
    Ok(i64::from(per_character) * count as i64)
}

/// Same as [`get_xp_threshold`], with the difficulty given as text.
pub fn budget_for_label(level: u32, count: usize, difficulty: &str) -> AmbushResult<i64> {
    get_xp_threshold(level, count, difficulty.parse()?)
}

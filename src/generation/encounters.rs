//! # Encounter Selection
//!
//! Greedy, randomized selection of monsters against an XP budget.
//!
//! Selection runs in up to two passes over a shuffled pool. Main-quest
//! encounters first reserve a single anchor: the strongest monster worth at
//! most 70% of the budget. A fill pass then adds monsters in random order
//! while they fit, stopping once 90% of the budget is spent.

use super::SelectedMonster;
use crate::config::{ANCHOR_BUDGET_TENTHS, FILL_STOP_TENTHS};
use crate::{ChallengeRating, Monster};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// A monster whose rating resolved, identified by its position in the input.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    cr: ChallengeRating,
    xp: u32,
}

/// Selects monsters from `monsters` worth at most `budget` XP in total.
///
/// Monsters whose challenge rating has no XP entry are skipped. The result
/// lists monsters in the order they were picked, anchor first, and never
/// contains the same input entry twice. An empty pool or a budget of zero
/// or less yields an empty encounter.
///
/// # Examples
///
/// ```
/// use ambush::{build_encounter, Monster};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let pool = vec![Monster::new("Ogre", "2"), Monster::new("Tarrasque", "20")];
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let picked = build_encounter(&pool, 500, false, &mut rng);
/// assert_eq!(picked.len(), 1);
/// assert_eq!(picked[0].monster.name, "Ogre");
/// ```
pub fn build_encounter<R: Rng + ?Sized>(
    monsters: &[Monster],
    budget: i64,
    main_quest: bool,
    rng: &mut R,
) -> Vec<SelectedMonster> {
    let mut pool: Vec<Candidate> = monsters
        .iter()
        .enumerate()
        .filter_map(|(index, monster)| match monster.challenge_rating() {
            Some(cr) => Some(Candidate {
                index,
                cr,
                xp: cr.xp(),
            }),
            None => {
                debug!("Skipping '{}': challenge rating has no XP value", monster.name);
                None
            }
        })
        .collect();

    pool.shuffle(rng);

    let mut chosen: Vec<Candidate> = Vec::new();

    if main_quest {
        // Stable sort keeps the shuffled order among equal XP values.
        pool.sort_by(|a, b| b.xp.cmp(&a.xp));
        if let Some(anchor) = pool
            .iter()
            .find(|c| i64::from(c.xp) * 10 <= budget * ANCHOR_BUDGET_TENTHS)
        {
            debug!(
                "Anchor: '{}' ({} XP)",
                monsters[anchor.index].name, anchor.xp
            );
            chosen.push(*anchor);
        }
        pool.shuffle(rng);
    }

    let mut total: i64 = chosen.iter().map(|c| i64::from(c.xp)).sum();
    let stop_at_tenths = budget * FILL_STOP_TENTHS;

    for candidate in &pool {
        if chosen.iter().any(|c| c.index == candidate.index) {
            continue;
        }
        if total + i64::from(candidate.xp) <= budget {
            chosen.push(*candidate);
            total += i64::from(candidate.xp);
            if total * 10 >= stop_at_tenths {
                break;
            }
        }
    }

    debug!(
        "Selected {} of {} eligible monsters for {} / {} XP",
        chosen.len(),
        pool.len(),
        total,
        budget
    );

    chosen
        .into_iter()
        .map(|c| SelectedMonster {
            monster: monsters[c.index].clone(),
            cr: c.cr,
            xp: c.xp,
        })
        .collect()
}

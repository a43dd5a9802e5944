//! # Markdown Encounter Documents
//!
//! Writes an encounter as a notes page: front matter, then one section per
//! monster with an `ad-statblock` block.

use super::{display_value, title_case, MonsterLinks};
use crate::{AmbushResult, Encounter, SelectedMonster};
use chrono::NaiveDate;
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name for an encounter document, e.g. `2024-05-01_The_Cursed_Vault.md`.
pub fn encounter_file_name(encounter: &Encounter, date: NaiveDate) -> String {
    let safe_name = encounter.name.replace(' ', "_").replace('/', "_");
    format!("{}_{}.md", date.format("%Y-%m-%d"), safe_name)
}

/// Writes the full document for `encounter` to `out`.
pub fn render_markdown<W: Write>(
    encounter: &Encounter,
    links: &MonsterLinks,
    date: NaiveDate,
    out: &mut W,
) -> AmbushResult<()> {
    let sources: Vec<&str> = encounter
        .monsters
        .iter()
        .map(|m| m.monster.source.as_deref().unwrap_or("?"))
        .collect();

    writeln!(out, "---")?;
    writeln!(out, "title: {}", encounter.name)?;
    writeln!(out, "type: {} Quest", encounter.quest_type.title())?;
    writeln!(out, "environment: {}", title_case(&encounter.environment))?;
    writeln!(out, "date: {}", date.format("%Y-%m-%d"))?;
    writeln!(out, "tags: [encounter, dnd5e]")?;
    writeln!(out, "obsidianUIMode: preview")?;
    writeln!(out, "cssclasses: json5e-monster")?;
    writeln!(out, "sources: {}", sources.join(", "))?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out, "# {}", encounter.name)?;
    writeln!(out)?;

    for selected in &encounter.monsters {
        render_monster(selected, links, out)?;
    }
    Ok(())
}

fn render_monster<W: Write>(
    selected: &SelectedMonster,
    links: &MonsterLinks,
    out: &mut W,
) -> AmbushResult<()> {
    let monster = &selected.monster;

    writeln!(out, "# {}", links.link_for(&monster.name))?;
    if let Some(description) = monster.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(out, "{}", description)?;
        writeln!(out)?;
    }

    writeln!(out, "## Statblock")?;
    writeln!(out, "```ad-statblock")?;
    writeln!(out, "title: {}", monster.name)?;
    writeln!(
        out,
        "*{} {}, {}*",
        display_value(monster.size.as_ref(), "?"),
        display_value(monster.creature_type.as_ref(), "?"),
        display_value(monster.alignment.as_ref(), "?")
    )?;
    writeln!(out)?;
    writeln!(out, "{}", display_value(monster.ac.as_ref(), "?"))?;
    writeln!(out, "- **Speed** {}", display_value(monster.speed.as_ref(), "?"))?;
    writeln!(out)?;

    let scores: Vec<String> = monster
        .ability_scores()
        .iter()
        .map(|score| display_value(*score, "?"))
        .collect();
    writeln!(out, "|STR|DEX|CON|INT|WIS|CHA|")?;
    writeln!(out, "|:---:|:---:|:---:|:---:|:---:|:---:|")?;
    writeln!(out, "|{}|", scores.join("|"))?;
    writeln!(out)?;

    writeln!(out, "- **Proficiency Bonus** {}", display_value(monster.pb.as_ref(), "—"))?;
    writeln!(out, "- **Saving Throws** {}", display_value(monster.save.as_ref(), "—"))?;
    writeln!(out, "- **Skills** {}", display_value(monster.skill.as_ref(), "—"))?;
    writeln!(
        out,
        "- **Senses** {}, passive Perception {}",
        display_value(monster.senses.as_ref(), ""),
        display_value(monster.passive.as_ref(), "?")
    )?;
    writeln!(out, "- **Languages** {}", display_value(monster.languages.as_ref(), "—"))?;
    writeln!(out, "- **Challenge** {} ({} XP)", selected.cr, selected.xp)?;
    writeln!(out, "```")?;
    Ok(())
}

/// Renders `encounter` into `dir` and returns the path written.
pub fn write_encounter_file(
    dir: &Path,
    encounter: &Encounter,
    links: &MonsterLinks,
    date: NaiveDate,
) -> AmbushResult<PathBuf> {
    let path = dir.join(encounter_file_name(encounter, date));
    let mut buffer = Vec::new();
    render_markdown(encounter, links, date, &mut buffer)?;
    std::fs::write(&path, buffer)?;
    info!("Saved encounter to {}", path.display());
    Ok(path)
}

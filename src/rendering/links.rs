//! # Vault Links
//!
//! Resolves monster names against markdown pages in a notes vault.

use crate::AmbushResult;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

/// Lowercased page title → page file stem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterLinks {
    pages: HashMap<String, String>,
}

impl MonsterLinks {
    /// An empty table; every name renders unlinked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every `*.md` file under `vault`, recursively.
    ///
    /// A page `adult-red-dragon.md` is found by the name "Adult Red Dragon".
    /// A missing vault gives an empty table.
    pub fn scan(vault: &Path) -> AmbushResult<Self> {
        let mut links = Self::new();
        if !vault.is_dir() {
            warn!("Vault {} not found; monster names will not be linked", vault.display());
            return Ok(links);
        }
        links.scan_dir(vault)?;
        debug!("Indexed {} vault pages from {}", links.len(), vault.display());
        Ok(links)
    }

    fn scan_dir(&mut self, dir: &Path) -> AmbushResult<()> {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                self.scan_dir(&path)?;
            } else if path.extension().map_or(false, |ext| ext == "md") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    self.insert(stem);
                }
            }
        }
        Ok(())
    }

    /// Registers a page by its file stem.
    pub fn insert(&mut self, stem: &str) {
        let key = stem.replace('-', " ").to_lowercase();
        self.pages.insert(key, stem.to_string());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Wiki-style link for a monster, aliased to its display name when a
    /// page exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambush::MonsterLinks;
    ///
    /// let mut links = MonsterLinks::new();
    /// links.insert("giant-spider");
    /// assert_eq!(links.link_for("Giant Spider"), "[[giant-spider|Giant Spider]]");
    /// assert_eq!(links.link_for("Ettercap"), "[[Ettercap]]");
    /// ```
    pub fn link_for(&self, name: &str) -> String {
        match self.pages.get(&name.to_lowercase()) {
            Some(slug) => format!("[[{}|{}]]", slug, name),
            None => format!("[[{}]]", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_walks_nested_folders() {
        let vault = tempfile::tempdir().unwrap();
        let nested = vault.path().join("bestiary").join("dragons");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(vault.path().join("owlbear.md"), "").unwrap();
        std::fs::write(nested.join("young-green-dragon.md"), "").unwrap();
        std::fs::write(nested.join("notes.txt"), "").unwrap();

        let links = MonsterLinks::scan(vault.path()).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(
            links.link_for("Young Green Dragon"),
            "[[young-green-dragon|Young Green Dragon]]"
        );
        assert_eq!(links.link_for("OWLBEAR"), "[[owlbear|OWLBEAR]]");
    }

    #[test]
    fn test_missing_vault_is_empty() {
        let vault = tempfile::tempdir().unwrap();
        let links = MonsterLinks::scan(&vault.path().join("nowhere")).unwrap();
        assert!(links.is_empty());
        assert_eq!(links.link_for("Goblin"), "[[Goblin]]");
    }
}

//! Static category and loadout catalogs.
//!
//! Both catalogs are loaded once at startup, validated, and shared read-only
//! for the process lifetime (behind an `Arc` in application state). Lookups
//! are linear scans; the catalogs hold tens of entries at most.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Category, CategoryClass, Goal, Loadout};

const BUILTIN_CATEGORIES: &str = include_str!("../../data/categories.json");
const BUILTIN_LOADOUTS: &str = include_str!("../../data/loadouts.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse catalog file: {0}")]
    Json(#[from] serde_json::Error),

    /// A goal value the ranking rules do not recognize. This is a
    /// data-integrity problem in the catalog file, caught at load so it can
    /// never surface mid-query.
    #[error("Unknown category goal: expected \"maximize\" or \"minimize\", got \"{0}\"")]
    UnknownGoal(String),

    #[error("Expected exactly 2 category classes (main, challenge), found {0}")]
    ClassCount(usize),

    #[error("Duplicate category id {0}")]
    DuplicateId(i32),

    #[error("Duplicate category abbreviation \"{0}\"")]
    DuplicateAbbr(String),
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    #[serde(rename = "categoryClasses")]
    category_classes: Vec<ClassEntry>,
}

#[derive(Debug, Deserialize)]
struct ClassEntry {
    #[allow(dead_code)]
    class: String,
    categories: Vec<CategoryEntry>,
}

// Goal is kept as a raw string through parsing so an unrecognized value
// reports as UnknownGoal instead of a generic serde error.
#[derive(Debug, Deserialize)]
struct CategoryEntry {
    id: i32,
    name: String,
    goal: String,
    abbr: String,
    definition: String,
}

fn parse_goal(raw: &str) -> Result<Goal, CatalogError> {
    match raw {
        "maximize" => Ok(Goal::Maximize),
        "minimize" => Ok(Goal::Minimize),
        other => Err(CatalogError::UnknownGoal(other.to_string())),
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    loadouts: Vec<Loadout>,
}

impl Catalog {
    /// Catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATEGORIES, BUILTIN_LOADOUTS)
    }

    /// Load `categories.json` and `loadouts.json` from a directory,
    /// for deployments that override the builtin catalog.
    pub fn from_dir(dir: &std::path::Path) -> Result<Self, CatalogError> {
        let categories = std::fs::read_to_string(dir.join("categories.json"))?;
        let loadouts = std::fs::read_to_string(dir.join("loadouts.json"))?;
        Self::from_json(&categories, &loadouts)
    }

    pub fn from_json(categories_json: &str, loadouts_json: &str) -> Result<Self, CatalogError> {
        let file: CategoryFile = serde_json::from_str(categories_json)?;
        if file.category_classes.len() != 2 {
            return Err(CatalogError::ClassCount(file.category_classes.len()));
        }

        // Class membership is positional: first block is main, second is
        // challenge. Ids and abbreviations must be unique across both.
        let mut categories = Vec::new();
        for (index, class_entry) in file.category_classes.into_iter().enumerate() {
            let class = if index == 0 {
                CategoryClass::Main
            } else {
                CategoryClass::Challenge
            };
            for entry in class_entry.categories {
                categories.push(Category {
                    id: entry.id,
                    name: entry.name,
                    goal: parse_goal(&entry.goal)?,
                    abbr: entry.abbr,
                    definition: entry.definition,
                    class,
                });
            }
        }

        for (i, cat) in categories.iter().enumerate() {
            for other in &categories[i + 1..] {
                if cat.id == other.id {
                    return Err(CatalogError::DuplicateId(cat.id));
                }
                if cat.abbr == other.abbr {
                    return Err(CatalogError::DuplicateAbbr(cat.abbr.clone()));
                }
            }
        }

        let names: Vec<String> = serde_json::from_str(loadouts_json)?;
        let loadouts = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Loadout { id: id as i32, name })
            .collect();

        Ok(Self { categories, loadouts })
    }

    /// All categories in catalog order, main block first.
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn main_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(|c| c.class == CategoryClass::Main)
    }

    pub fn challenge_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(|c| c.class == CategoryClass::Challenge)
    }

    pub fn category_by_abbr(&self, abbr: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.abbr == abbr)
    }

    pub fn category_by_id(&self, id: i32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn loadouts(&self) -> &[Loadout] {
        &self.loadouts
    }

    pub fn loadout_by_id(&self, id: i32) -> Option<&Loadout> {
        self.loadouts.iter().find(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.all().is_empty());
        assert!(!catalog.loadouts().is_empty());
    }

    #[test]
    fn test_class_membership_is_positional() {
        let catalog = Catalog::builtin().unwrap();
        let main: Vec<_> = catalog.main_categories().collect();
        let challenge: Vec<_> = catalog.challenge_categories().collect();
        assert_eq!(main.len() + challenge.len(), catalog.all().len());
        assert!(main.iter().all(|c| c.class == CategoryClass::Main));
        assert!(challenge.iter().all(|c| c.class == CategoryClass::Challenge));
        // catalog order keeps the main block first
        assert_eq!(catalog.all()[0].class, CategoryClass::Main);
    }

    #[test]
    fn test_lookup_by_abbr_and_id() {
        let catalog = Catalog::builtin().unwrap();
        let cat = catalog.category_by_abbr("any").unwrap();
        assert_eq!(cat.goal, Goal::Minimize);
        assert_eq!(catalog.category_by_id(cat.id).unwrap().abbr, "any");

        assert!(catalog.category_by_abbr("nope").is_none());
        assert!(catalog.category_by_id(9999).is_none());
    }

    #[test]
    fn test_loadout_ids_are_positional() {
        let catalog = Catalog::builtin().unwrap();
        let first = catalog.loadout_by_id(0).unwrap();
        assert_eq!(first.name, "Prospector");
        assert!(catalog.loadout_by_id(-1).is_none());
        assert!(catalog.loadout_by_id(1000).is_none());
    }

    #[test]
    fn test_unknown_goal_is_rejected_at_load() {
        let categories = r#"{"categoryClasses":[
            {"class":"main","categories":[
                {"id":1,"name":"A","goal":"sideways","abbr":"a","definition":""}]},
            {"class":"challenge","categories":[]}]}"#;
        let err = Catalog::from_json(categories, "[]").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownGoal(g) if g == "sideways"));
    }

    #[test]
    fn test_duplicate_id_rejected_across_classes() {
        let categories = r#"{"categoryClasses":[
            {"class":"main","categories":[
                {"id":1,"name":"A","goal":"maximize","abbr":"a","definition":""}]},
            {"class":"challenge","categories":[
                {"id":1,"name":"B","goal":"minimize","abbr":"b","definition":""}]}]}"#;
        let err = Catalog::from_json(categories, "[]").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_duplicate_abbr_rejected() {
        let categories = r#"{"categoryClasses":[
            {"class":"main","categories":[
                {"id":1,"name":"A","goal":"maximize","abbr":"a","definition":""}]},
            {"class":"challenge","categories":[
                {"id":2,"name":"B","goal":"minimize","abbr":"a","definition":""}]}]}"#;
        let err = Catalog::from_json(categories, "[]").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAbbr(a) if a == "a"));
    }

    #[test]
    fn test_wrong_class_count_rejected() {
        let categories = r#"{"categoryClasses":[
            {"class":"main","categories":[]}]}"#;
        let err = Catalog::from_json(categories, "[]").unwrap_err();
        assert!(matches!(err, CatalogError::ClassCount(1)));
    }
}

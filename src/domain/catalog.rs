//! The immutable skill catalog
//!
//! Records are validated once when the catalog is built. After that the
//! catalog is only ever read; it is shared behind an `Arc` by the state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::skill::{Category, Proficiency, SkillCategory, SkillId, SkillRecord};

/// How a data/code mismatch (a category with no display mapping) is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Fail fast with an error
    Strict,
    /// Keep going with a generic fallback label
    Lenient,
}

impl MismatchPolicy {
    /// Strict in debug/test builds, lenient in release builds
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            MismatchPolicy::Strict
        } else {
            MismatchPolicy::Lenient
        }
    }

    pub fn from_override(strict: Option<bool>) -> Self {
        match strict {
            Some(true) => MismatchPolicy::Strict,
            Some(false) => MismatchPolicy::Lenient,
            None => Self::for_build(),
        }
    }
}

impl Default for MismatchPolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate skill id: {0}")]
    DuplicateId(SkillId),
    #[error("proficiency of {id} must be within 0..=100, got {value}")]
    ProficiencyOutOfRange { id: SkillId, value: u32 },
    #[error("skill {id} references unmapped category: {category}")]
    UnmappedCategory { id: SkillId, category: String },
}

/// Skill record as written in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    pub proficiency: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<SkillRecord>,
}

impl SkillCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(skills: Vec<SkillRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(skills.len());
        for skill in &skills {
            if !seen.insert(&skill.id) {
                return Err(CatalogError::DuplicateId(skill.id.clone()));
            }
        }
        Ok(Self { skills })
    }

    /// Build a catalog from configuration entries.
    ///
    /// Under [`MismatchPolicy::Strict`] an entry whose category is not part of
    /// [`Category`] is an error. Under [`MismatchPolicy::Lenient`] it is kept
    /// as [`SkillCategory::Unmapped`] and rendered with a fallback label.
    pub fn from_entries(
        entries: &[SkillEntry],
        policy: MismatchPolicy,
    ) -> Result<Self, CatalogError> {
        let mut skills = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = SkillId::new(entry.id.as_str());
            let proficiency = u8::try_from(entry.proficiency)
                .ok()
                .and_then(Proficiency::new)
                .ok_or_else(|| CatalogError::ProficiencyOutOfRange {
                    id: id.clone(),
                    value: entry.proficiency,
                })?;
            let category = SkillCategory::from(entry.category.as_str());
            if let SkillCategory::Unmapped(key) = &category {
                match policy {
                    MismatchPolicy::Strict => {
                        return Err(CatalogError::UnmappedCategory {
                            id,
                            category: key.clone(),
                        });
                    }
                    MismatchPolicy::Lenient => {
                        log::warn!("skill {id} uses unmapped category {key}");
                    }
                }
            }
            skills.push(SkillRecord {
                id,
                name: entry.name.clone(),
                category,
                icon: entry.icon.clone(),
                proficiency,
            });
        }
        Self::new(skills)
    }

    pub fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn get(&self, id: &SkillId) -> Option<&SkillRecord> {
        self.skills.iter().find(|skill| &skill.id == id)
    }

    /// Distinct categories in first-occurrence order
    pub fn categories(&self) -> Vec<SkillCategory> {
        let mut seen = HashSet::new();
        self.skills
            .iter()
            .filter(|skill| seen.insert(&skill.category))
            .map(|skill| skill.category.clone())
            .collect()
    }

    /// Number of skills whose category is one of `categories`
    pub fn count_in(&self, categories: &[Category]) -> usize {
        self.skills
            .iter()
            .filter(|skill| {
                skill
                    .category
                    .known()
                    .is_some_and(|category| categories.contains(&category))
            })
            .count()
    }
}

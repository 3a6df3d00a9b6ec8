use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The closed set of skill categories
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Programming,
    AiMl,
    Web,
    Tools,
    SoftSkills,
}

/// Category tag as carried by a skill record.
///
/// Records built from configuration may reference a category that has no
/// counterpart in [`Category`]. Such a record is kept as `Unmapped` so the
/// presenter can decide whether to fail or fall back, instead of the loader
/// silently dropping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillCategory {
    Known(Category),
    Unmapped(String),
}

impl SkillCategory {
    pub fn key(&self) -> &str {
        match self {
            SkillCategory::Known(category) => category.as_ref(),
            SkillCategory::Unmapped(key) => key,
        }
    }

    pub fn known(&self) -> Option<Category> {
        match self {
            SkillCategory::Known(category) => Some(*category),
            SkillCategory::Unmapped(_) => None,
        }
    }

    /// Popover text: first `-` replaced by a space, upper-cased.
    pub fn popover_text(&self) -> String {
        self.key().replacen('-', " ", 1).to_uppercase()
    }
}

impl From<Category> for SkillCategory {
    fn from(category: Category) -> Self {
        SkillCategory::Known(category)
    }
}

impl From<&str> for SkillCategory {
    fn from(key: &str) -> Self {
        match Category::from_str(key) {
            Ok(category) => SkillCategory::Known(category),
            Err(_) => SkillCategory::Unmapped(key.to_owned()),
        }
    }
}

impl From<String> for SkillCategory {
    fn from(key: String) -> Self {
        SkillCategory::from(key.as_str())
    }
}

impl From<SkillCategory> for String {
    fn from(category: SkillCategory) -> Self {
        category.key().to_owned()
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(String);

impl SkillId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A single entry of the skill catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRecord {
    pub id: SkillId,
    pub name: String,
    pub category: SkillCategory,
    pub icon: String,
    pub proficiency: Proficiency,
}

impl SkillRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<SkillCategory>,
        icon: impl Into<String>,
        proficiency: Proficiency,
    ) -> Self {
        Self {
            id: SkillId::new(id),
            name: name.into(),
            category: category.into(),
            icon: icon.into(),
            proficiency,
        }
    }
}

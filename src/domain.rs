//! Domain types
//!
//! This module contains the data the portfolio is built from:
//! - Skill records and the closed category set
//! - The immutable skill catalog
//! - The visual theme and its owning context

pub mod catalog;
pub mod skill;
pub mod theme;

pub use catalog::{CatalogError, MismatchPolicy, SkillCatalog, SkillEntry};
pub use skill::{Category, Proficiency, SkillCategory, SkillId, SkillRecord};
pub use theme::{Theme, ThemeColors, ThemeContext, ThemeMode};

//! Display names and icons for skill categories

use thiserror::Error;

use crate::{
    domain::{Category, MismatchPolicy, SkillCategory},
    model::filter::Filter,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentError {
    #[error("no display label for skill category: {0}")]
    UnmappedCategory(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub name: &'static str,
    pub icon: &'static str,
}

/// One entry per [`Category`] variant; extend together with the enum.
pub const CATEGORY_LABELS: [(Category, Label); 5] = [
    (
        Category::Programming,
        Label {
            name: "Programming Languages",
            icon: "</>",
        },
    ),
    (
        Category::AiMl,
        Label {
            name: "AI/ML Frameworks",
            icon: "◉",
        },
    ),
    (
        Category::Web,
        Label {
            name: "Web Technologies",
            icon: "◎",
        },
    ),
    (
        Category::Tools,
        Label {
            name: "Tools & Platforms",
            icon: "⚙",
        },
    ),
    (
        Category::SoftSkills,
        Label {
            name: "Soft Skills",
            icon: "♥",
        },
    ),
];

pub const FALLBACK_LABEL: Label = Label {
    name: "Other",
    icon: "•",
};

pub const ALL_SKILLS_TITLE: &str = "All Skills";

fn lookup(category: Category) -> Option<Label> {
    CATEGORY_LABELS
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, label)| *label)
}

/// Label of `category`.
///
/// A category without a table entry is a data/code mismatch: an error under
/// [`MismatchPolicy::Strict`], the generic [`FALLBACK_LABEL`] otherwise. This
/// runs on every frame; the mismatch is logged once when the catalog loads.
pub fn label_for(category: &SkillCategory, policy: MismatchPolicy) -> Result<Label, PresentError> {
    match (category.known().and_then(lookup), policy) {
        (Some(label), _) => Ok(label),
        (None, MismatchPolicy::Strict) => {
            Err(PresentError::UnmappedCategory(category.key().to_owned()))
        }
        (None, MismatchPolicy::Lenient) => Ok(FALLBACK_LABEL),
    }
}

/// Label of `category`, never failing
pub fn lenient_label(category: &SkillCategory) -> Label {
    category
        .known()
        .and_then(lookup)
        .unwrap_or(FALLBACK_LABEL)
}

/// Human-readable title of a filter
pub fn filter_title(filter: &Filter) -> String {
    match filter {
        Filter::All => ALL_SKILLS_TITLE.to_owned(),
        Filter::Category(category) => lenient_label(category).name.to_owned(),
    }
}

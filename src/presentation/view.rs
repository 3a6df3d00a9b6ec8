//! Pure derivation of the skills section view
//!
//! `derive_view` turns state into plain data; widgets only draw that data.

use crate::{
    core::state::skills::SkillsState,
    domain::{Category, MismatchPolicy, SkillCatalog, Theme},
    model::filter::Filter,
    presentation::{
        labels::{self, PresentError},
        skill_grid::{self, SkillCard},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: Filter,
    pub title: String,
    pub icon: Option<&'static str>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStat {
    pub title: &'static str,
    pub count: usize,
    pub description: &'static str,
}

impl SummaryStat {
    pub fn count_label(&self) -> String {
        format!("{}+", self.count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsView {
    pub filters: Vec<FilterButton>,
    pub cards: Vec<SkillCard>,
    pub summary: Vec<SummaryStat>,
}

pub fn derive_view(
    state: &SkillsState,
    theme: &Theme,
    policy: MismatchPolicy,
) -> Result<SkillsView, PresentError> {
    let current = state.filter.current_filter();

    let mut filters = vec![FilterButton {
        filter: Filter::All,
        title: labels::ALL_SKILLS_TITLE.to_owned(),
        icon: None,
        selected: *current == Filter::All,
    }];
    for category in state.filter.available_categories() {
        let label = labels::label_for(&category, policy)?;
        let filter = Filter::Category(category);
        filters.push(FilterButton {
            selected: *current == filter,
            filter,
            title: label.name.to_owned(),
            icon: Some(label.icon),
        });
    }

    let elapsed = state.reveal_elapsed();
    let cards = state
        .visible_skills()
        .into_iter()
        .enumerate()
        .map(|(index, skill)| {
            let hovered = state.hover.is_hovered(&skill.id);
            skill_grid::render_card(skill, index, hovered, theme, policy, elapsed)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SkillsView {
        filters,
        cards,
        summary: summary_stats(state.catalog()),
    })
}

/// Headline counts over the whole catalog, independent of the filter
pub fn summary_stats(catalog: &SkillCatalog) -> Vec<SummaryStat> {
    vec![
        SummaryStat {
            title: "Technical Mastery",
            count: catalog.count_in(&[
                Category::Programming,
                Category::AiMl,
                Category::Web,
                Category::Tools,
            ]),
            description: "Programming languages, frameworks, and development tools",
        },
        SummaryStat {
            title: "AI/ML Expertise",
            count: catalog.count_in(&[Category::AiMl]),
            description: "Machine learning frameworks and neural network architectures",
        },
        SummaryStat {
            title: "Soft Skills",
            count: catalog.count_in(&[Category::SoftSkills]),
            description: "Leadership, communication, and collaborative abilities",
        },
    ]
}

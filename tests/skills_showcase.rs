use std::sync::Arc;

use pretty_assertions::assert_eq;
use ratatui::layout::Rect;

use folio::{
    core::{msg::skills::SkillsMsg, state::skills::SkillsState},
    domain::{
        CatalogError, Category, MismatchPolicy, Proficiency, SkillCatalog, SkillCategory,
        SkillEntry, SkillId, SkillRecord, Theme,
    },
    model::filter::Filter,
    presentation::{
        labels::{self, PresentError},
        skill_grid, view,
    },
};

const VIEWPORT: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 40,
};

fn skill(id: &str, category: Category, proficiency: u8) -> SkillRecord {
    SkillRecord::new(
        id,
        id.to_uppercase(),
        category,
        "*",
        Proficiency::new(proficiency).unwrap(),
    )
}

fn entry(id: &str, category: &str, proficiency: u32) -> SkillEntry {
    SkillEntry {
        id: id.to_owned(),
        name: id.to_uppercase(),
        category: category.to_owned(),
        icon: String::new(),
        proficiency,
    }
}

fn ids(skills: &[&SkillRecord]) -> Vec<String> {
    skills.iter().map(|skill| skill.id.to_string()).collect()
}

fn scenario_state() -> SkillsState {
    let catalog = SkillCatalog::new(vec![
        skill("p1", Category::Programming, 90),
        skill("m1", Category::AiMl, 85),
        skill("p2", Category::Programming, 70),
    ])
    .unwrap();
    SkillsState::new(Arc::new(catalog))
}

#[test]
fn test_filter_scenario() {
    let mut state = scenario_state();

    assert_eq!(
        state.filter.available_categories(),
        vec![
            SkillCategory::Known(Category::Programming),
            SkillCategory::Known(Category::AiMl),
        ]
    );
    assert_eq!(ids(&state.visible_skills()), vec!["p1", "m1", "p2"]);

    let programming = Filter::Category(Category::Programming.into());
    assert_eq!(
        state.update(SkillsMsg::FilterSelected(programming.clone()), VIEWPORT),
        Ok(true)
    );
    assert_eq!(ids(&state.visible_skills()), vec!["p1", "p2"]);

    // Selecting the same filter again changes nothing
    assert_eq!(
        state.update(SkillsMsg::FilterSelected(programming), VIEWPORT),
        Ok(false)
    );
    assert_eq!(ids(&state.visible_skills()), vec!["p1", "p2"]);

    state
        .update(SkillsMsg::FilterSelected(Filter::All), VIEWPORT)
        .unwrap();
    assert_eq!(ids(&state.visible_skills()), vec!["p1", "m1", "p2"]);
}

#[test]
fn test_filter_with_no_match_is_empty() {
    let state = scenario_state();
    let web = Filter::Category(Category::Web.into());
    assert!(skill_grid::visible_skills(state.catalog(), &web).is_empty());
}

#[test]
fn test_hover_guard() {
    let mut state = scenario_state();
    let a = SkillId::from("p1");
    let b = SkillId::from("m1");

    state
        .update(SkillsMsg::HoverEntered(a.clone()), VIEWPORT)
        .unwrap();
    state
        .update(SkillsMsg::HoverEntered(b.clone()), VIEWPORT)
        .unwrap();
    state.update(SkillsMsg::HoverLeft(a.clone()), VIEWPORT).unwrap();

    assert!(state.hover.is_hovered(&b));
    assert!(!state.hover.is_hovered(&a));

    state.update(SkillsMsg::HoverLeft(b), VIEWPORT).unwrap();
    assert_eq!(state.hover.hovered(), None);
}

#[test]
fn test_hovered_card_shows_popover() {
    let mut state = scenario_state();
    state
        .update(SkillsMsg::HoverEntered(SkillId::from("m1")), VIEWPORT)
        .unwrap();

    let view = view::derive_view(&state, &Theme::default(), MismatchPolicy::Strict).unwrap();
    let popovers: Vec<Option<String>> =
        view.cards.iter().map(|card| card.popover.clone()).collect();
    assert_eq!(popovers, vec![None, Some("AI ML".to_owned()), None]);
}

#[test]
fn test_unmapped_category_strict_is_an_error() {
    let entries = vec![entry("p1", "programming", 80), entry("x", "quantum", 50)];
    assert_eq!(
        SkillCatalog::from_entries(&entries, MismatchPolicy::Strict),
        Err(CatalogError::UnmappedCategory {
            id: SkillId::from("x"),
            category: "quantum".to_owned(),
        })
    );
}

#[test]
fn test_unmapped_category_lenient_falls_back() {
    let entries = vec![entry("p1", "programming", 80), entry("x", "quantum", 50)];
    let catalog = SkillCatalog::from_entries(&entries, MismatchPolicy::Lenient).unwrap();
    let state = SkillsState::new(Arc::new(catalog));

    let view = view::derive_view(&state, &Theme::default(), MismatchPolicy::Lenient).unwrap();
    assert_eq!(view.cards[1].category_label.name, "Other");

    // The same catalog cannot be presented once the policy turns strict
    assert_eq!(
        view::derive_view(&state, &Theme::default(), MismatchPolicy::Strict).map(|_| ()),
        Err(PresentError::UnmappedCategory("quantum".to_owned()))
    );
    assert_eq!(
        labels::label_for(&SkillCategory::from("quantum"), MismatchPolicy::Lenient),
        Ok(labels::FALLBACK_LABEL)
    );
}

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use ratatui::layout::Rect;
use strum::IntoEnumIterator;

use folio::{
    core::{msg::skills::SkillsMsg, state::skills::SkillsState},
    domain::{Category, MismatchPolicy, Proficiency, SkillCatalog, SkillRecord, Theme},
    model::filter::Filter,
    presentation::{skill_grid, view},
};

const VIEWPORT: Rect = Rect {
    x: 0,
    y: 0,
    width: 200,
    height: 60,
};

fn large_catalog(size: usize) -> SkillCatalog {
    let categories: Vec<Category> = Category::iter().collect();
    let skills = (0..size)
        .map(|i| {
            SkillRecord::new(
                format!("skill-{i}"),
                format!("Skill {i}"),
                categories[i % categories.len()],
                "*",
                Proficiency::new((i % 101) as u8).unwrap(),
            )
        })
        .collect();
    SkillCatalog::new(skills).unwrap()
}

fn benchmark(c: &mut Criterion) {
    let catalog = large_catalog(10_000);
    let filter = Filter::Category(Category::AiMl.into());

    c.bench_function("visible-skills-all", |b| {
        b.iter(|| skill_grid::visible_skills(black_box(&catalog), black_box(&Filter::All)))
    });

    c.bench_function("visible-skills-category", |b| {
        b.iter(|| skill_grid::visible_skills(black_box(&catalog), black_box(&filter)))
    });

    let mut state = SkillsState::new(Arc::new(catalog));
    state
        .update(SkillsMsg::NthCategorySelected(1), VIEWPORT)
        .unwrap();
    state.advance(Duration::from_millis(1500));
    let theme = Theme::default();

    c.bench_function("derive-view", |b| {
        b.iter(|| view::derive_view(black_box(&state), &theme, MismatchPolicy::Strict))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

//! Skill grid: which skills are shown and how each card looks

use std::time::Duration;

use crate::{
    domain::{MismatchPolicy, Proficiency, SkillCatalog, SkillId, SkillRecord, Theme},
    model::filter::Filter,
    presentation::labels::{self, Label, PresentError},
};

/// Skills shown for `filter`, in catalog order
pub fn visible_skills<'a>(catalog: &'a SkillCatalog, filter: &Filter) -> Vec<&'a SkillRecord> {
    catalog
        .skills()
        .iter()
        .filter(|skill| filter.matches(skill))
        .collect()
}

/// Staggered fill animation of the proficiency gauges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub delay: Duration,
    pub stagger: Duration,
    pub duration: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            stagger: Duration::from_millis(100),
            duration: Duration::from_millis(1000),
        }
    }
}

impl RevealTiming {
    pub fn start_of(&self, index: usize) -> Duration {
        self.delay + self.stagger * index as u32
    }

    /// Gauge ratio of the card at `index`, `elapsed` after the reveal began.
    ///
    /// Once the card's animation is over the ratio is exactly
    /// `proficiency / 100`.
    pub fn fill_ratio(&self, index: usize, proficiency: Proficiency, elapsed: Duration) -> f64 {
        let start = self.start_of(index);
        if elapsed <= start {
            return 0.0;
        }
        let running = elapsed - start;
        if running >= self.duration {
            return proficiency.ratio();
        }
        let progress = running.as_secs_f64() / self.duration.as_secs_f64();
        proficiency.ratio() * progress
    }

    /// Whether every one of `count` cards has finished filling
    pub fn is_complete(&self, count: usize, elapsed: Duration) -> bool {
        count == 0 || elapsed >= self.start_of(count - 1) + self.duration
    }
}

/// Everything needed to draw one card
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCard {
    pub id: SkillId,
    pub name: String,
    pub icon: String,
    pub proficiency: Proficiency,
    pub fill: f64,
    pub hovered: bool,
    pub category_label: Label,
    /// Category popover, present only while hovered
    pub popover: Option<String>,
    pub accent: String,
}

impl SkillCard {
    /// The displayed percentage; always the exact catalog value
    pub fn percent_label(&self) -> String {
        self.proficiency.to_string()
    }
}

pub fn render_card(
    skill: &SkillRecord,
    index: usize,
    is_hovered: bool,
    theme: &Theme,
    policy: MismatchPolicy,
    elapsed: Duration,
) -> Result<SkillCard, PresentError> {
    let category_label = labels::label_for(&skill.category, policy)?;
    Ok(SkillCard {
        id: skill.id.clone(),
        name: skill.name.clone(),
        icon: skill.icon.clone(),
        proficiency: skill.proficiency,
        fill: RevealTiming::default().fill_ratio(index, skill.proficiency, elapsed),
        hovered: is_hovered,
        category_label,
        popover: is_hovered.then(|| skill.category.popover_text()),
        accent: theme.primary_color.clone(),
    })
}

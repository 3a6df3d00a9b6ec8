//! Category filter state
//!
//! Follows the same pattern as the other models: state changes only through
//! [`CategoryFilter::update`], and every transition is a `Message` variant.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::domain::{SkillCatalog, SkillCategory, SkillRecord};

/// The active selection: everything, or a single category
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(SkillCategory),
}

impl Filter {
    pub const ALL_KEY: &'static str = "all";

    pub fn matches(&self, skill: &SkillRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => &skill.category == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(Self::ALL_KEY),
            Filter::Category(category) => write!(f, "{category}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown skill category: {0}")]
    UnknownCategory(String),
}

/// Messages that can be sent to update the filter
pub enum Message {
    /// A filter button was chosen
    FilterSelected(Filter),
    /// The n-th available category (zero based) was chosen
    NthCategorySelected(usize),
    /// The filter after the current one was chosen, wrapping to "all"
    NextFilterSelected,
    /// The filter before the current one was chosen, wrapping to the last category
    PreviousFilterSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    catalog: Arc<SkillCatalog>,
    selected: Filter,
}

impl CategoryFilter {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self {
            catalog,
            selected: Filter::All,
        }
    }

    pub fn catalog(&self) -> &Arc<SkillCatalog> {
        &self.catalog
    }

    /// Distinct categories present in the catalog, in first-occurrence order
    pub fn available_categories(&self) -> Vec<SkillCategory> {
        self.catalog.categories()
    }

    pub fn current_filter(&self) -> &Filter {
        &self.selected
    }

    /// Replace the selection.
    ///
    /// A category that no skill belongs to is rejected and the selection is
    /// left unchanged. Returns whether the selection changed.
    pub fn select(&mut self, filter: Filter) -> Result<bool, FilterError> {
        if let Filter::Category(category) = &filter {
            if !self.available_categories().contains(category) {
                return Err(FilterError::UnknownCategory(category.to_string()));
            }
        }
        let changed = self.selected != filter;
        self.selected = filter;
        Ok(changed)
    }

    /// Resolve user-provided text (`all` or a category key) against the catalog
    pub fn parse(&self, input: &str) -> Result<Filter, FilterError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(Filter::ALL_KEY) {
            return Ok(Filter::All);
        }
        let category = SkillCategory::from(input);
        if self.available_categories().contains(&category) {
            Ok(Filter::Category(category))
        } else {
            Err(FilterError::UnknownCategory(input.to_owned()))
        }
    }

    /// Apply a message. Returns whether the selection changed.
    pub fn update(&mut self, message: Message) -> Result<bool, FilterError> {
        match message {
            Message::FilterSelected(filter) => self.select(filter),
            Message::NthCategorySelected(index) => match self.available_categories().get(index) {
                Some(category) => self.select(Filter::Category(category.clone())),
                None => Ok(false),
            },
            Message::NextFilterSelected => {
                let cycle = self.cycle();
                let position = self.position_in(&cycle);
                let next = cycle[(position + 1) % cycle.len()].clone();
                self.select(next)
            }
            Message::PreviousFilterSelected => {
                let cycle = self.cycle();
                let position = self.position_in(&cycle);
                let previous = cycle[(position + cycle.len() - 1) % cycle.len()].clone();
                self.select(previous)
            }
        }
    }

    /// `All` followed by every available category
    fn cycle(&self) -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(
                self.available_categories()
                    .into_iter()
                    .map(Filter::Category),
            )
            .collect()
    }

    fn position_in(&self, cycle: &[Filter]) -> usize {
        cycle
            .iter()
            .position(|filter| filter == &self.selected)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{Category, Proficiency};

    fn catalog() -> Arc<SkillCatalog> {
        let skill = |id: &str, category: Category| {
            SkillRecord::new(id, id, category, "", Proficiency::new(70).unwrap())
        };
        Arc::new(
            SkillCatalog::new(vec![
                skill("p1", Category::Programming),
                skill("m1", Category::AiMl),
                skill("p2", Category::Programming),
            ])
            .unwrap(),
        )
    }

    fn category(category: Category) -> Filter {
        Filter::Category(SkillCategory::Known(category))
    }

    #[test]
    fn test_initial_filter_is_all() {
        let filter = CategoryFilter::new(catalog());
        assert_eq!(filter.current_filter(), &Filter::All);
    }

    #[test]
    fn test_available_categories() {
        let filter = CategoryFilter::new(catalog());
        assert_eq!(
            filter.available_categories(),
            vec![
                SkillCategory::Known(Category::Programming),
                SkillCategory::Known(Category::AiMl),
            ]
        );
    }

    #[test]
    fn test_select_replaces_filter() {
        let mut filter = CategoryFilter::new(catalog());
        assert_eq!(filter.select(category(Category::AiMl)), Ok(true));
        assert_eq!(filter.current_filter(), &category(Category::AiMl));
        assert_eq!(filter.select(Filter::All), Ok(true));
        assert_eq!(filter.current_filter(), &Filter::All);
    }

    #[test]
    fn test_select_same_filter_twice_is_noop() {
        let mut filter = CategoryFilter::new(catalog());
        assert_eq!(filter.select(category(Category::Programming)), Ok(true));
        assert_eq!(filter.select(category(Category::Programming)), Ok(false));
        assert_eq!(filter.current_filter(), &category(Category::Programming));
    }

    #[test]
    fn test_select_rejects_absent_category() {
        let mut filter = CategoryFilter::new(catalog());
        filter.select(category(Category::AiMl)).unwrap();

        assert_eq!(
            filter.select(category(Category::Web)),
            Err(FilterError::UnknownCategory("web".to_owned()))
        );
        // Rejection leaves the selection alone instead of falling back to "all"
        assert_eq!(filter.current_filter(), &category(Category::AiMl));
    }

    #[test]
    fn test_parse() {
        let filter = CategoryFilter::new(catalog());
        assert_eq!(filter.parse("all"), Ok(Filter::All));
        assert_eq!(filter.parse("ai-ml"), Ok(category(Category::AiMl)));
        assert_eq!(
            filter.parse("quantum"),
            Err(FilterError::UnknownCategory("quantum".to_owned()))
        );
    }

    #[test]
    fn test_nth_category_selected() {
        let mut filter = CategoryFilter::new(catalog());
        assert_eq!(filter.update(Message::NthCategorySelected(1)), Ok(true));
        assert_eq!(filter.current_filter(), &category(Category::AiMl));

        assert_eq!(filter.update(Message::NthCategorySelected(7)), Ok(false));
        assert_eq!(filter.current_filter(), &category(Category::AiMl));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut filter = CategoryFilter::new(catalog());

        filter.update(Message::NextFilterSelected).unwrap();
        assert_eq!(filter.current_filter(), &category(Category::Programming));
        filter.update(Message::NextFilterSelected).unwrap();
        assert_eq!(filter.current_filter(), &category(Category::AiMl));
        filter.update(Message::NextFilterSelected).unwrap();
        assert_eq!(filter.current_filter(), &Filter::All);

        filter.update(Message::PreviousFilterSelected).unwrap();
        assert_eq!(filter.current_filter(), &category(Category::AiMl));
    }

    #[test]
    fn test_cycle_on_empty_catalog_stays_on_all() {
        let mut filter = CategoryFilter::new(Arc::new(SkillCatalog::default()));
        assert_eq!(filter.update(Message::NextFilterSelected), Ok(false));
        assert_eq!(filter.update(Message::PreviousFilterSelected), Ok(false));
        assert_eq!(filter.current_filter(), &Filter::All);
    }
}

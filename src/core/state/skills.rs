use std::{sync::Arc, time::Duration};

use ratatui::layout::Rect;

use crate::{
    core::msg::skills::SkillsMsg,
    domain::{SkillCatalog, SkillId, SkillRecord},
    model::{
        filter::{CategoryFilter, FilterError, Message as FilterMessage},
        hover::{HoverState, Message as HoverMessage},
    },
    presentation::{layout, skill_grid},
};

/// Skills section state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsState {
    pub filter: CategoryFilter,
    pub hover: HoverState,
    /// Time since the grid was last (re)revealed
    reveal_elapsed: Duration,
    /// First card row on screen
    scroll: usize,
}

impl SkillsState {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self {
            filter: CategoryFilter::new(catalog),
            hover: HoverState::new(),
            reveal_elapsed: Duration::ZERO,
            scroll: 0,
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        self.filter.catalog()
    }

    pub fn visible_skills(&self) -> Vec<&SkillRecord> {
        skill_grid::visible_skills(self.catalog(), self.filter.current_filter())
    }

    pub fn reveal_elapsed(&self) -> Duration {
        self.reveal_elapsed
    }

    /// Start the reveal animation over, e.g. when the grid is replaced
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn restart_reveal(&mut self) {
        self.reveal_elapsed = Duration::ZERO;
    }

    pub fn advance(&mut self, delta: Duration) {
        self.reveal_elapsed = self.reveal_elapsed.saturating_add(delta);
    }

    /// Skills-specific update function.
    ///
    /// Returns whether the filter changed. A changed filter replaces the whole
    /// grid: the reveal restarts and any hover on the old grid is dropped.
    pub fn update(&mut self, msg: SkillsMsg, viewport: Rect) -> Result<bool, FilterError> {
        let filter_message = match msg {
            SkillsMsg::FilterSelected(filter) => FilterMessage::FilterSelected(filter),
            SkillsMsg::NthCategorySelected(index) => FilterMessage::NthCategorySelected(index),
            SkillsMsg::NextFilter => FilterMessage::NextFilterSelected,
            SkillsMsg::PreviousFilter => FilterMessage::PreviousFilterSelected,
            SkillsMsg::HoverEntered(id) => {
                self.hover.update(HoverMessage::Entered(id));
                return Ok(false);
            }
            SkillsMsg::HoverLeft(id) => {
                self.hover.update(HoverMessage::Left(id));
                return Ok(false);
            }
            SkillsMsg::HoverCleared => {
                self.hover.update(HoverMessage::Cleared);
                return Ok(false);
            }
            SkillsMsg::HoverNext => {
                self.move_hover(viewport, 1);
                return Ok(false);
            }
            SkillsMsg::HoverPrevious => {
                self.move_hover(viewport, -1);
                return Ok(false);
            }
            SkillsMsg::PointerMoved { column, row } => {
                self.pointer_moved(viewport, column, row);
                return Ok(false);
            }
            SkillsMsg::GridScrolled(rows) => {
                self.scroll_by(viewport, rows);
                return Ok(false);
            }
        };

        let changed = self.filter.update(filter_message)?;
        if changed {
            self.hover.update(HoverMessage::Cleared);
            self.scroll = 0;
            self.restart_reveal();
        }
        Ok(changed)
    }

    fn move_hover(&mut self, viewport: Rect, step: isize) {
        let ids: Vec<SkillId> = self
            .visible_skills()
            .into_iter()
            .map(|skill| skill.id.clone())
            .collect();
        if ids.is_empty() {
            return;
        }
        let len = ids.len() as isize;
        let next = match self.hover.hovered() {
            Some(current) => match ids.iter().position(|id| id == current) {
                Some(position) => (position as isize + step).rem_euclid(len),
                None => 0,
            },
            None if step < 0 => len - 1,
            None => 0,
        };
        let next = next as usize;
        self.hover.update(HoverMessage::Entered(ids[next].clone()));
        // Keep the keyboard cursor on screen
        let grid = layout::skills_grid(viewport);
        self.scroll = layout::scroll_to_card(grid, ids.len(), self.scroll, next);
    }

    fn scroll_by(&mut self, viewport: Rect, rows: isize) {
        let count = self.visible_skills().len();
        let window = layout::grid_window_in(viewport, count, self.scroll);
        self.scroll = window
            .first_row
            .saturating_add_signed(rows)
            .min(window.max_first_row(count));
    }

    fn pointer_moved(&mut self, viewport: Rect, column: u16, row: u16) {
        let visible = self.visible_skills();
        let under_pointer = layout::card_index_at(viewport, visible.len(), self.scroll, column, row)
            .map(|index| visible[index].id.clone());
        match (under_pointer, self.hover.hovered().cloned()) {
            (Some(id), _) => self.hover.update(HoverMessage::Entered(id)),
            (None, Some(previous)) => self.hover.update(HoverMessage::Left(previous)),
            (None, None) => {}
        }
    }
}

use crate::domain::SkillId;
use crate::model::filter::Filter;

/// Messages specific to SkillsState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillsMsg {
    FilterSelected(Filter),
    /// Digit shortcut: zero based index into the available categories
    NthCategorySelected(usize),
    NextFilter,
    PreviousFilter,
    HoverEntered(SkillId),
    HoverLeft(SkillId),
    HoverCleared,
    /// Move the keyboard hover cursor to the next visible card
    HoverNext,
    /// Move the keyboard hover cursor to the previous visible card
    HoverPrevious,
    /// Mouse pointer position in terminal cells
    PointerMoved { column: u16, row: u16 },
    /// Scroll the card grid by whole rows, negative is up
    GridScrolled(isize),
}

impl SkillsMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SkillsMsg::PointerMoved { .. })
    }
}

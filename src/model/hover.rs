//! Hover state for skill cards
//!
//! At most one card is hovered at any time. A `Left` message only clears the
//! hover when it refers to the card that is currently hovered, so a late leave
//! from a previous card cannot cancel a newer hover.

use crate::domain::SkillId;

pub enum Message {
    /// The pointer (or keyboard cursor) entered a card
    Entered(SkillId),
    /// The pointer left a card
    Left(SkillId),
    /// Hover was dropped regardless of which card held it
    Cleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<SkillId>,
}

impl HoverState {
    pub fn new() -> Self {
        Self { hovered: None }
    }

    pub fn hovered(&self) -> Option<&SkillId> {
        self.hovered.as_ref()
    }

    pub fn is_hovered(&self, id: &SkillId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    pub fn enter(&mut self, id: SkillId) {
        self.hovered = Some(id);
    }

    pub fn leave(&mut self, id: &SkillId) {
        if self.is_hovered(id) {
            self.hovered = None;
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Entered(id) => self.enter(id),
            Message::Left(id) => self.leave(&id),
            Message::Cleared => self.hovered = None,
        }
    }
}

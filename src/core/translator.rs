use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{skills::SkillsMsg, system::SystemMsg, Msg, NavigationMsg, ThemeMsg},
        state::{AppState, Section},
    },
    infrastructure::tui::Event,
    model::filter::Filter,
    presentation::config::keybindings::{Action, KeyBindings},
};

/// Translates terminal events into domain messages.
/// This function is pure and contains no side effects.
///
/// `Tick` carries no duration here; the runner measures it and sends
/// [`SystemMsg::Tick`] itself.
pub fn translate_event(event: Event, state: &AppState, keybindings: &KeyBindings) -> Vec<Msg> {
    match event {
        Event::Quit => vec![Msg::System(SystemMsg::Quit)],
        Event::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        Event::Key(key) => translate_key_event(key, state, keybindings),
        Event::Mouse(mouse) => translate_mouse_event(mouse, state),
        Event::Error => vec![Msg::System(SystemMsg::ShowError {
            label: "Terminal".to_owned(),
            text: "failed to read terminal event".to_owned(),
        })],
        Event::Init
        | Event::Closed
        | Event::Tick
        | Event::Render
        | Event::FocusGained
        | Event::FocusLost
        | Event::Paste(_) => vec![],
    }
}

/// Translates keyboard input based on the current section and key bindings
fn translate_key_event(key: KeyEvent, state: &AppState, keybindings: &KeyBindings) -> Vec<Msg> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    if let Some(action) = keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action, state);
    }

    // Digits pick the n-th category button (1-based, as shown)
    match key.code {
        KeyCode::Char(c @ '1'..='9')
            if key.modifiers.is_empty() && state.section == Section::Skills =>
        {
            let index = c as usize - '1' as usize;
            vec![Msg::Skills(SkillsMsg::NthCategorySelected(index))]
        }
        _ => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::ToggleTheme => vec![Msg::Theme(ThemeMsg::ToggleRequested)],
        Action::NextSection => vec![Msg::Navigation(NavigationMsg::NextSection)],
        Action::PreviousSection => vec![Msg::Navigation(NavigationMsg::PreviousSection)],
        // Skills controls only act while the grid is on screen
        _ if state.section != Section::Skills => vec![],
        Action::NextFilter => vec![Msg::Skills(SkillsMsg::NextFilter)],
        Action::PreviousFilter => vec![Msg::Skills(SkillsMsg::PreviousFilter)],
        Action::AllSkills => vec![Msg::Skills(SkillsMsg::FilterSelected(Filter::All))],
        Action::HoverNext => vec![Msg::Skills(SkillsMsg::HoverNext)],
        Action::HoverPrevious => vec![Msg::Skills(SkillsMsg::HoverPrevious)],
        Action::ClearHover => vec![Msg::Skills(SkillsMsg::HoverCleared)],
    }
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if state.section != Section::Skills {
        return vec![];
    }
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Down(_) | MouseEventKind::Drag(_) => {
            vec![Msg::Skills(SkillsMsg::PointerMoved {
                column: mouse.column,
                row: mouse.row,
            })]
        }
        MouseEventKind::ScrollDown => vec![Msg::Skills(SkillsMsg::GridScrolled(1))],
        MouseEventKind::ScrollUp => vec![Msg::Skills(SkillsMsg::GridScrolled(-1))],
        _ => vec![],
    }
}

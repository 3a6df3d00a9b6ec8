use crate::{
    core::{
        cmd::Cmd,
        msg::{system::SystemMsg, Msg, NavigationMsg, ThemeMsg},
        state::{AppState, Section},
    },
    model::status_bar::Message as StatusMessage,
    presentation::labels,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(SystemMsg::Tick(delta)) => {
            state.skills.advance(delta);
            (state, vec![])
        }

        Msg::System(SystemMsg::ShowError { label, text }) => {
            state.status_bar.update(StatusMessage::Failed { label, text });
            (state, vec![])
        }

        // Remaining system messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Navigation(navigation_msg) => {
            let target = match navigation_msg {
                NavigationMsg::SectionSelected(section) => section,
                NavigationMsg::NextSection => state.section.next(),
                NavigationMsg::PreviousSection => state.section.previous(),
            };
            let commands = enter_section(&mut state, target);
            (state, commands)
        }

        // Skills messages (delegated to SkillsState)
        Msg::Skills(skills_msg) => {
            let viewport = state.system.viewport;
            match state.skills.update(skills_msg, viewport) {
                Ok(true) => {
                    let title = labels::filter_title(state.skills.filter.current_filter());
                    state.status_bar.update(StatusMessage::Notified {
                        label: "Filter".to_owned(),
                        text: title,
                    });
                }
                Ok(false) => {}
                Err(e) => {
                    log::warn!("rejected filter selection: {e}");
                    state.status_bar.update(StatusMessage::Failed {
                        label: "Filter".to_owned(),
                        text: e.to_string(),
                    });
                }
            }
            (state, vec![])
        }

        // Hero messages (delegated to HeroState)
        Msg::Hero(hero_msg) => {
            let commands = state.hero.update(hero_msg);
            (state, commands)
        }

        // The ThemeContext owns the theme; update only asks for a change and
        // mirrors what the context publishes.
        Msg::Theme(ThemeMsg::ToggleRequested) => {
            let mode = state.theme.mode.toggled();
            (state, vec![Cmd::SetThemeMode(mode)])
        }

        Msg::Theme(ThemeMsg::Changed(theme)) => {
            state.status_bar.update(StatusMessage::Notified {
                label: "Theme".to_owned(),
                text: theme.mode.to_string(),
            });
            state.theme = theme;
            (state, vec![])
        }
    }
}

/// Commands needed to mount the initial section
pub fn init(mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = match state.section {
        Section::Hero => state.hero.mount(),
        Section::Skills => {
            state.skills.restart_reveal();
            vec![]
        }
    };
    (state, commands)
}

/// Commands needed to tear down whatever is mounted
pub fn teardown(mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = match state.section {
        Section::Hero => state.hero.unmount(),
        Section::Skills => vec![],
    };
    (state, commands)
}

fn enter_section(state: &mut AppState, target: Section) -> Vec<Cmd> {
    if state.section == target {
        return vec![];
    }
    let mut commands = vec![];
    if state.section == Section::Hero {
        commands.extend(state.hero.unmount());
    }
    state.section = target;
    match target {
        Section::Hero => commands.extend(state.hero.mount()),
        Section::Skills => state.skills.restart_reveal(),
    }
    commands
}

use crate::domain::ThemeMode;
use crate::model::role_rotation::RoleTimings;

/// Elm-like command definitions.
/// Side effects the update function asks the runner to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Spawn the timer that drives the hero's role label
    StartRoleTicker {
        generation: u64,
        timings: RoleTimings,
    },
    /// Cancel the running role timer, if any
    StopRoleTicker,
    /// Ask the ThemeContext to switch modes
    SetThemeMode(ThemeMode),

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.remove(0),
            _ => Cmd::Batch(commands),
        }
    }

    /// Flatten batches into a plain list, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(commands) => commands.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => vec![],
            cmd => vec![cmd],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_batch_empty() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let cmd = Cmd::SetThemeMode(ThemeMode::Tech);
        assert_eq!(Cmd::batch(vec![cmd.clone()]), cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        let cmds = vec![Cmd::StopRoleTicker, Cmd::SetThemeMode(ThemeMode::Tech)];
        assert_eq!(Cmd::batch(cmds.clone()), Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_flatten() {
        let nested = Cmd::Batch(vec![
            Cmd::None,
            Cmd::Batch(vec![Cmd::StopRoleTicker]),
            Cmd::SetThemeMode(ThemeMode::Theatrical),
        ]);
        assert_eq!(
            nested.flatten(),
            vec![
                Cmd::StopRoleTicker,
                Cmd::SetThemeMode(ThemeMode::Theatrical)
            ]
        );
    }
}

//! Rotating role label of the hero banner
//!
//! The label cycles `Entering -> Holding -> Leaving`, then advances to the
//! next role. Timing lives outside the model: a ticker sends
//! [`Message::PhaseElapsed`] whenever the current phase's duration has passed.
//! Every run carries a generation number so ticks from a cancelled run are
//! ignored after a restart or a stop.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Entering,
    Holding,
    Leaving,
}

impl Phase {
    pub fn next(self) -> Self {
        match self {
            Phase::Entering => Phase::Holding,
            Phase::Holding => Phase::Leaving,
            Phase::Leaving => Phase::Entering,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTimings {
    pub enter: Duration,
    pub dwell: Duration,
    pub exit: Duration,
}

impl RoleTimings {
    pub fn from_millis(enter: u64, dwell: u64, exit: u64) -> Self {
        Self {
            enter: Duration::from_millis(enter),
            dwell: Duration::from_millis(dwell),
            exit: Duration::from_millis(exit),
        }
    }

    pub fn duration_of(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Entering => self.enter,
            Phase::Holding => self.dwell,
            Phase::Leaving => self.exit,
        }
    }

    /// Time one role stays on screen, fades included
    pub fn cycle(&self) -> Duration {
        self.enter + self.dwell + self.exit
    }
}

impl Default for RoleTimings {
    fn default() -> Self {
        Self::from_millis(400, 2000, 400)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A new run began; the rotation restarts from the first role
    Started { generation: u64 },
    /// The current phase of run `generation` is over
    PhaseElapsed { generation: u64 },
    /// The owning view was torn down
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRotation {
    roles: Vec<String>,
    index: usize,
    phase: Phase,
    running: Option<u64>,
}

impl RoleRotation {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            index: 0,
            phase: Phase::Entering,
            running: None,
        }
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn generation(&self) -> Option<u64> {
        self.running
    }

    pub fn current_role(&self) -> Option<&str> {
        self.roles.get(self.index).map(String::as_str)
    }

    /// Whether the label is fading in or out
    pub fn is_fading(&self) -> bool {
        self.phase != Phase::Holding
    }

    /// Apply a message. Returns whether the displayed label changed.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Started { generation } => {
                let changed = self.index != 0;
                self.index = 0;
                self.phase = Phase::Entering;
                self.running = Some(generation);
                changed
            }
            Message::PhaseElapsed { generation } => {
                if self.running != Some(generation) || self.roles.is_empty() {
                    return false;
                }
                let leaving = self.phase == Phase::Leaving;
                self.phase = self.phase.next();
                if leaving {
                    self.index = (self.index + 1) % self.roles.len();
                }
                leaving && self.roles.len() > 1
            }
            Message::Stopped => {
                self.running = None;
                false
            }
        }
    }
}

impl Default for RoleRotation {
    fn default() -> Self {
        Self::new(
            ["AI Engineer", "DevOps Engineer", "Software Engineer"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn elapse(rotation: &mut RoleRotation, generation: u64, phases: usize) {
        for _ in 0..phases {
            rotation.update(Message::PhaseElapsed { generation });
        }
    }

    #[test]
    fn test_phase_cycle() {
        assert_eq!(Phase::Entering.next(), Phase::Holding);
        assert_eq!(Phase::Holding.next(), Phase::Leaving);
        assert_eq!(Phase::Leaving.next(), Phase::Entering);
    }

    #[test]
    fn test_default_timings() {
        let timings = RoleTimings::default();
        assert_eq!(timings.duration_of(Phase::Holding), Duration::from_secs(2));
        assert_eq!(timings.cycle(), Duration::from_millis(2800));
    }

    #[test]
    fn test_not_running_until_started() {
        let mut rotation = RoleRotation::default();
        assert!(!rotation.is_running());

        elapse(&mut rotation, 0, 3);
        assert_eq!(rotation.current_role(), Some("AI Engineer"));
        assert_eq!(rotation.phase(), Phase::Entering);
    }

    #[test]
    fn test_advances_after_full_cycle() {
        let mut rotation = RoleRotation::default();
        rotation.update(Message::Started { generation: 1 });

        elapse(&mut rotation, 1, 1);
        assert_eq!(rotation.phase(), Phase::Holding);
        assert_eq!(rotation.current_role(), Some("AI Engineer"));

        elapse(&mut rotation, 1, 1);
        assert_eq!(rotation.phase(), Phase::Leaving);
        assert_eq!(rotation.current_role(), Some("AI Engineer"));

        assert!(rotation.update(Message::PhaseElapsed { generation: 1 }));
        assert_eq!(rotation.phase(), Phase::Entering);
        assert_eq!(rotation.current_role(), Some("DevOps Engineer"));
    }

    #[test]
    fn test_three_cycles_return_to_first_role() {
        let mut rotation = RoleRotation::default();
        rotation.update(Message::Started { generation: 1 });

        elapse(&mut rotation, 1, 3 * 3);
        assert_eq!(rotation.current_role(), Some("AI Engineer"));
        assert_eq!(rotation.phase(), Phase::Entering);
    }

    #[test]
    fn test_stopped_rotation_ignores_ticks() {
        let mut rotation = RoleRotation::default();
        rotation.update(Message::Started { generation: 1 });
        elapse(&mut rotation, 1, 4);
        assert_eq!(rotation.current_role(), Some("DevOps Engineer"));

        rotation.update(Message::Stopped);
        elapse(&mut rotation, 1, 6);
        assert_eq!(rotation.current_role(), Some("DevOps Engineer"));
        assert_eq!(rotation.phase(), Phase::Holding);
    }

    #[test]
    fn test_restart_ignores_previous_generation() {
        let mut rotation = RoleRotation::default();
        rotation.update(Message::Started { generation: 1 });
        elapse(&mut rotation, 1, 3);

        rotation.update(Message::Started { generation: 2 });
        assert_eq!(rotation.current_role(), Some("AI Engineer"));

        elapse(&mut rotation, 1, 3);
        assert_eq!(rotation.current_role(), Some("AI Engineer"));
        assert_eq!(rotation.phase(), Phase::Entering);
    }

    #[test]
    fn test_empty_roles() {
        let mut rotation = RoleRotation::new(vec![]);
        rotation.update(Message::Started { generation: 1 });
        assert!(!rotation.update(Message::PhaseElapsed { generation: 1 }));
        assert_eq!(rotation.current_role(), None);
    }

    #[test]
    fn test_single_role_never_changes_label() {
        let mut rotation = RoleRotation::new(vec!["Engineer".to_owned()]);
        rotation.update(Message::Started { generation: 1 });
        for _ in 0..6 {
            assert!(!rotation.update(Message::PhaseElapsed { generation: 1 }));
        }
        assert_eq!(rotation.current_role(), Some("Engineer"));
    }
}

use crate::{
    core::{cmd::Cmd, msg::hero::HeroMsg},
    model::role_rotation::{Message as RotationMessage, RoleRotation, RoleTimings},
};

/// Static text of the hero banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroProfile {
    pub name: String,
    pub tagline: String,
}

impl Default for HeroProfile {
    fn default() -> Self {
        Self {
            name: "MANOJ MS".to_owned(),
            tagline: "Bridging the gap between artificial intelligence and human creativity"
                .to_owned(),
        }
    }
}

/// Hero banner state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroState {
    pub profile: HeroProfile,
    pub rotation: RoleRotation,
    pub timings: RoleTimings,
    next_generation: u64,
}

impl HeroState {
    pub fn new(profile: HeroProfile, roles: Vec<String>, timings: RoleTimings) -> Self {
        Self {
            profile,
            rotation: RoleRotation::new(roles),
            timings,
            next_generation: 1,
        }
    }

    /// The banner became visible: restart the rotation with a fresh ticker
    pub fn mount(&mut self) -> Vec<Cmd> {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.rotation.update(RotationMessage::Started { generation });
        vec![Cmd::StartRoleTicker {
            generation,
            timings: self.timings,
        }]
    }

    /// The banner was torn down: stop the rotation and cancel its ticker
    pub fn unmount(&mut self) -> Vec<Cmd> {
        self.rotation.update(RotationMessage::Stopped);
        vec![Cmd::StopRoleTicker]
    }

    /// Hero-specific update function
    pub fn update(&mut self, msg: HeroMsg) -> Vec<Cmd> {
        match msg {
            HeroMsg::RolePhaseElapsed { generation } => {
                if self.rotation.update(RotationMessage::PhaseElapsed { generation }) {
                    log::debug!("role label changed to {:?}", self.rotation.current_role());
                }
                vec![]
            }
        }
    }
}

impl Default for HeroState {
    fn default() -> Self {
        let rotation = RoleRotation::default();
        Self::new(
            HeroProfile::default(),
            rotation.roles().to_vec(),
            RoleTimings::default(),
        )
    }
}

/// Messages specific to HeroState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroMsg {
    /// Sent by the role ticker of run `generation`
    RolePhaseElapsed { generation: u64 },
}

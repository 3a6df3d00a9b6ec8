//! Timer task driving the hero's role label

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::msg::{hero::HeroMsg, Msg},
    model::role_rotation::{Phase, RoleTimings},
};

/// Sends `RolePhaseElapsed` for its generation at every phase boundary until
/// cancelled. Dropping the ticker cancels it.
#[derive(Debug)]
pub struct RoleTicker {
    generation: u64,
    cancellation_token: CancellationToken,
    task: JoinHandle<()>,
}

impl RoleTicker {
    pub fn spawn(generation: u64, timings: RoleTimings, msg_tx: UnboundedSender<Msg>) -> Self {
        let cancellation_token = CancellationToken::new();
        let token = cancellation_token.clone();
        let task = tokio::spawn(async move {
            let mut phase = Phase::default();
            loop {
                let delay = timings.duration_of(phase);
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = tokio::time::sleep(delay) => {
                        if msg_tx
                            .send(Msg::Hero(HeroMsg::RolePhaseElapsed { generation }))
                            .is_err()
                        {
                            break;
                        }
                        phase = phase.next();
                    }
                }
            }
            log::debug!("role ticker {generation} finished");
        });
        Self {
            generation,
            cancellation_token,
            task,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RoleTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

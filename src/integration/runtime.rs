use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd,
    msg::Msg,
    state::AppState,
    update::{self, update},
};

/// Owns the application state and feeds queued messages through `update`
#[derive(Debug)]
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_msgs(&mut self, msgs: impl IntoIterator<Item = Msg>) {
        self.msg_queue.extend(msgs);
    }

    pub fn pending_msgs(&self) -> usize {
        self.msg_queue.len()
    }

    /// Mount the initial section
    pub fn init(&mut self) -> Vec<Cmd> {
        self.apply(update::init)
    }

    /// Tear down the mounted section
    pub fn teardown(&mut self) -> Vec<Cmd> {
        self.apply(update::teardown)
    }

    /// Process every queued message, returning the commands they produced
    pub fn run_update_cycle(&mut self) -> Vec<Cmd> {
        let mut commands = vec![];
        while let Some(msg) = self.msg_queue.pop_front() {
            if !msg.is_frequent() {
                log::debug!("update: {msg:?}");
            }
            commands.extend(self.apply(|state| update(msg, state)));
        }
        commands
    }

    fn apply(&mut self, f: impl FnOnce(AppState) -> (AppState, Vec<Cmd>)) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (state, commands) = f(state);
        self.state = state;
        commands.into_iter().flat_map(Cmd::flatten).collect()
    }
}

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    core::{cmd::Cmd, msg::Msg},
    domain::ThemeContext,
    infrastructure::role_ticker::RoleTicker,
};

/// Performs the side effects requested by `update`
#[derive(Debug)]
pub struct CmdExecutor {
    msg_tx: UnboundedSender<Msg>,
    theme: ThemeContext,
    role_ticker: Option<RoleTicker>,
}

impl CmdExecutor {
    pub fn new(msg_tx: UnboundedSender<Msg>, theme: ThemeContext) -> Self {
        Self {
            msg_tx,
            theme,
            role_ticker: None,
        }
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    pub fn role_ticker(&self) -> Option<&RoleTicker> {
        self.role_ticker.as_ref()
    }

    pub fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::StartRoleTicker {
                generation,
                timings,
            } => {
                // Replacing the ticker drops, and so cancels, the previous one
                self.role_ticker = Some(RoleTicker::spawn(
                    generation,
                    timings,
                    self.msg_tx.clone(),
                ));
            }
            Cmd::StopRoleTicker => {
                if let Some(ticker) = self.role_ticker.take() {
                    ticker.cancel();
                }
            }
            Cmd::SetThemeMode(mode) => {
                if !self.theme.set_mode(mode) {
                    log::debug!("theme already in {mode} mode");
                }
            }
            Cmd::Batch(commands) => self.execute_all(commands),
            Cmd::None => {}
        }
    }

    pub fn execute_all(&mut self, commands: Vec<Cmd>) {
        for cmd in commands {
            self.execute(cmd);
        }
    }

    /// Cancel every running timer
    pub fn shutdown(&mut self) {
        self.execute(Cmd::StopRoleTicker);
    }
}

use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::{
    sync::{mpsc, watch, Mutex},
    time::Instant,
};

use crate::{
    core::{
        msg::{system::SystemMsg, Msg, ThemeMsg},
        state::{AppState, Section},
        translator::translate_event,
    },
    domain::{Theme, ThemeContext, ThemeMode},
    infrastructure::{config::Config, tui},
    integration::{cmd_executor::CmdExecutor, renderer::Renderer, runtime::Runtime},
    presentation::config::KeyBindings,
};

/// Startup choices that override the configuration, usually from the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    pub theme: Option<ThemeMode>,
    pub filter: Option<String>,
    pub section: Option<Section>,
}

/// Drives the Elm loop: terminal events, role ticks and theme changes in,
/// state updates and side effects, then a render.
pub struct AppRunner {
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    runtime: Runtime,
    executor: CmdExecutor,
    renderer: Renderer,
    keybindings: KeyBindings,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    theme_rx: watch::Receiver<Theme>,
    last_tick: Instant,
}

impl AppRunner {
    /// Build the initial state from `config` and `startup`.
    ///
    /// Fails on an invalid catalog, or on an unknown startup filter.
    pub fn new_with_tui(
        config: Config,
        startup: StartupOptions,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Result<Self> {
        let policy = config.policy();
        let catalog = config.catalog()?;
        log::info!("loaded {} skills ({policy:?} labels)", catalog.len());

        let theme = ThemeContext::new(
            startup.theme.unwrap_or(config.theme.mode),
            config.theme.colors(),
        );
        let theme_rx = theme.subscribe();

        let mut state = AppState::new(Arc::new(catalog), theme.current())
            .with_hero(config.hero.state())
            .with_policy(policy)
            .with_section(startup.section.unwrap_or_default());
        if let Some(raw) = startup.filter.as_deref() {
            let filter = state.skills.filter.parse(raw)?;
            state.skills.filter.select(filter)?;
        }

        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Ok(Self {
            tui,
            runtime: Runtime::new(state),
            executor: CmdExecutor::new(msg_tx, theme),
            renderer: Renderer::new(),
            keybindings: config.keybindings,
            msg_rx,
            theme_rx,
            last_tick: Instant::now(),
        })
    }

    pub fn new_with_real(
        config: Config,
        startup: StartupOptions,
        tui: Arc<Mutex<tui::real::RealTui>>,
    ) -> Result<Self> {
        Self::new_with_tui(config, startup, tui)
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn executor(&self) -> &CmdExecutor {
        &self.executor
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let commands = self.runtime.init();
        self.executor.execute_all(commands);
        self.last_tick = Instant::now();
        self.render().await?;

        while !self.state().system.should_quit {
            tokio::select! {
                biased;
                Some(msg) = self.msg_rx.recv() => {
                    self.runtime.send_msg(msg);
                }
                Ok(()) = self.theme_rx.changed() => {
                    let theme = self.theme_rx.borrow_and_update().clone();
                    self.runtime.send_msg(Msg::Theme(ThemeMsg::Changed(theme)));
                }
                event = next_event(&self.tui) => {
                    self.handle_event(event).await?;
                }
            }

            let commands = self.runtime.run_update_cycle();
            self.executor.execute_all(commands);
            self.render().await?;
        }

        let commands = self.runtime.teardown();
        self.executor.execute_all(commands);
        self.executor.shutdown();
        self.tui.lock().await.exit()?;
        Ok(())
    }

    async fn handle_event(&mut self, event: Option<tui::Event>) -> Result<()> {
        match event {
            // The event source is gone; nothing more can happen
            None | Some(tui::Event::Closed) => {
                self.runtime.send_msg(Msg::System(SystemMsg::Quit));
            }
            Some(tui::Event::Tick) => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_tick);
                self.last_tick = now;
                self.runtime.send_msg(Msg::System(SystemMsg::Tick(delta)));
            }
            Some(tui::Event::Resize(width, height)) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                self.runtime
                    .send_msg(Msg::System(SystemMsg::Resize(width, height)));
            }
            Some(event) => {
                let msgs = translate_event(event, self.runtime.state(), &self.keybindings);
                self.runtime.send_msgs(msgs);
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let area = self.renderer.render(&self.tui, self.runtime.state()).await?;
        // Keep hit-testing in sync with the real terminal size
        if area != self.state().system.viewport {
            self.runtime
                .send_msg(Msg::System(SystemMsg::Resize(area.width, area.height)));
            let commands = self.runtime.run_update_cycle();
            self.executor.execute_all(commands);
        }
        Ok(())
    }
}

async fn next_event(tui: &Arc<Mutex<dyn tui::TuiLike + Send>>) -> Option<tui::Event> {
    tui.lock().await.next().await
}

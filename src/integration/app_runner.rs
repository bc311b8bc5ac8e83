use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    domain::clock::{Clock, SystemClock},
    infrastructure::{
        config::Config,
        tui::{event_source::EventSource, real::RealTui, Event, Frame, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the app: terminal events in, runtime cycle, host commands out, render.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    components: Components,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
    should_render: bool,
}

impl AppRunner {
    /// Runner over any terminal implementation with an injected clock
    pub fn new_with_tui(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let mut runtime = Runtime::new_with_executor(AppState::new_with_config(config), clock);

        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx)?;
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_tx)?;

        Ok(Self {
            runtime,
            events: EventSource::real(Arc::clone(&tui)),
            tui,
            components: Components::new(),
            tui_rx,
            render_rx,
            should_render: true,
        })
    }

    /// Runner for the real terminal and wall clock
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        Self::new_with_tui(config, tui, Arc::new(SystemClock))
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        while self.run_one_cycle().await? {}

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Handle one terminal event end to end.
    /// Returns false when the app should stop: quit requested or no more events.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let Some(event) = self.events.next().await else {
            return Ok(false);
        };
        self.forward_event(event);

        self.update_cycle();
        self.drain_host_commands().await?;

        if self.runtime.state().system.should_suspend {
            self.tui.lock().await.suspend()?;
            self.runtime.send_raw_msg(RawMsg::Resume);
            self.tui.lock().await.enter()?;
            self.update_cycle();
            self.should_render = true;
        }

        if self.should_render {
            self.render().await?;
        }

        Ok(!self.runtime.state().system.should_quit)
    }

    fn forward_event(&mut self, event: Event) {
        let raw = match event {
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Tick => RawMsg::Tick,
            Event::Render => {
                self.should_render = true;
                RawMsg::Render
            }
            Event::Resize(w, h) => RawMsg::Resize(w, h),
            Event::Key(key) => RawMsg::Key(key),
            Event::Paste(s) => RawMsg::Paste(s),
            Event::Error => RawMsg::Error("Failed to read terminal event".to_string()),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Mouse(_) => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    fn update_cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }
    }

    async fn drain_host_commands(&mut self) -> Result<()> {
        while let Ok(cmd) = self.tui_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    self.should_render = true;
                }
            }
        }
        while self.render_rx.try_recv().is_ok() {
            self.should_render = true;
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |f: &mut Frame<'_>| components.render(f, state))?;
        self.should_render = false;
        Ok(())
    }
}

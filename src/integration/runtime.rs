use std::{collections::VecDeque, sync::Arc};

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        textarea_engine::TextAreaEngine,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    domain::{clock::Clock, ui::Focus},
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;

/// Owns the state and drives translate -> update -> execute
pub struct Runtime {
    clock: Arc<dyn Clock>,
    text_area: &'static dyn TextAreaEngine,
    state: AppState,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Runtime without a command executor; commands only queue up
    pub fn new(initial_state: AppState, clock: Arc<dyn Clock>) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            clock,
            text_area: &ENGINE,
            state: initial_state,
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Runtime whose executor reports timers back into its own raw channel
    pub fn new_with_executor(initial_state: AppState, clock: Arc<dyn Clock>) -> Self {
        let mut runtime = Self::new(initial_state, clock);
        runtime.set_executor();
        runtime
    }

    pub fn set_executor(&mut self) {
        self.cmd_executor = Some(CmdExecutor::new(self.raw_msg_tx.clone()));
    }

    fn executor_mut(&mut self) -> Result<&mut CmdExecutor> {
        self.cmd_executor
            .as_mut()
            .ok_or_else(|| eyre!("No executor available. Use set_executor() first."))
    }

    /// Route TuiCommand to the host
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) -> Result<()> {
        self.executor_mut()?.set_tui_sender(tui_sender);
        Ok(())
    }

    pub fn add_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) -> Result<()> {
        self.executor_mut()?.set_render_request_sender(sender);
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Drain queued commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        if self.cmd_executor.is_none() {
            return Err(eyre!(
                "No command executor available. Use set_executor() to configure."
            ));
        }

        let commands = self.pending_commands();
        match &self.cmd_executor {
            Some(executor) if !commands.is_empty() => executor.execute_commands(&commands),
            _ => Ok(vec![]),
        }
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match &self.cmd_executor {
            Some(executor) => executor.execute_command(cmd),
            None => Err(eyre!(
                "No command executor available. Use set_executor() to configure."
            )),
        }
    }

    /// Run one domain message through update and queue its commands
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }
        let ctx = UpdateContext {
            text_area: self.text_area,
            clock: self.clock.as_ref(),
        };
        let (new_state, commands) = update_with_context(msg, std::mem::take(&mut self.state), &ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate against the state as it is right now, so each key sees
    /// the effects of the keys before it
    fn process_raw_message(&mut self, raw_msg: RawMsg) -> Vec<Cmd> {
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        domain_msgs
            .into_iter()
            .flat_map(|msg| self.process_message(msg))
            .collect()
    }

    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            all_commands.extend(self.process_raw_message(raw_msg));
        }

        // Fired timers
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            all_commands.extend(self.process_raw_message(raw_msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            reminders_count: self.state.reminders.len(),
            selected_index: self.state.reminders.selected_index,
            focus: self.state.ui.focus,
            has_alert: self.state.ui.has_alert(),
            has_executor: self.cmd_executor.is_some(),
            scheduled_notifications: self
                .cmd_executor
                .as_ref()
                .map(|executor| executor.get_stats().scheduled_notifications)
                .unwrap_or(0),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub reminders_count: usize,
    pub selected_index: Option<usize>,
    pub focus: Focus,
    pub has_alert: bool,
    pub has_executor: bool,
    pub scheduled_notifications: usize,
}

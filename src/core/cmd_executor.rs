use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use color_eyre::eyre::{eyre, Result};
use tokio::{runtime::Handle, sync::mpsc, time::Instant};

use crate::core::{
    cmd::{Cmd, TuiCommand},
    raw_msg::RawMsg,
};

/// Executes commands produced by `update`.
/// Timers report back through the raw message channel, so the pure update
/// path only ever sees their effect as `RawMsg::AlarmFired`.
#[derive(Clone)]
pub struct CmdExecutor {
    raw_msg_sender: mpsc::UnboundedSender<RawMsg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
    scheduled: Arc<AtomicUsize>,
}

impl CmdExecutor {
    pub fn new(raw_msg_sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_msg_sender,
            tui_sender: None,
            render_req_sender: None,
            scheduled: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::ScheduleNotification { text, delay } => {
                let handle = Handle::try_current()
                    .map_err(|e| eyre!("Cannot schedule notification without a runtime: {e}"))?;
                // Deadline is fixed now, not when the task first gets polled
                let deadline = Instant::now() + *delay;
                let sender = self.raw_msg_sender.clone();
                let text = text.clone();

                log::info!("Scheduling notification in {}s", delay.as_secs());
                self.scheduled.fetch_add(1, Ordering::Relaxed);
                handle.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    log::info!("Notification due: {text}");
                    if sender.send(RawMsg::AlarmFired(text)).is_err() {
                        log::warn!("Notification dropped: runtime is gone");
                    }
                });
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(tx) = &self.render_req_sender {
                    let _ = tx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands, collecting a line per command
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_raw_msg_sender_closed: self.raw_msg_sender.is_closed(),
            has_tui_sender: self.tui_sender.is_some(),
            scheduled_notifications: self.scheduled.load(Ordering::Relaxed),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_raw_msg_sender_closed: bool,
    pub has_tui_sender: bool,
    /// Notifications handed to the runtime so far (fired or not)
    pub scheduled_notifications: usize,
}

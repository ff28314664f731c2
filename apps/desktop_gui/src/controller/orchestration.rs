//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected; restart the application".to_string();
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn queues_command_without_touching_status() {
        let (cmd_tx, cmd_rx) = bounded(1);
        let mut status = "ready".to_string();

        dispatch_backend_command(&cmd_tx, BackendCommand::Refresh, &mut status);

        assert_eq!(cmd_rx.try_recv().expect("queued"), BackendCommand::Refresh);
        assert_eq!(status, "ready");
    }

    #[test]
    fn full_queue_is_reported_in_status() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let mut status = String::new();

        dispatch_backend_command(&cmd_tx, BackendCommand::Refresh, &mut status);
        dispatch_backend_command(&cmd_tx, BackendCommand::CancelEdit, &mut status);

        assert_eq!(status, "UI command queue is full; please retry");
    }

    #[test]
    fn disconnected_worker_is_reported_in_status() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);
        let mut status = String::new();

        dispatch_backend_command(&cmd_tx, BackendCommand::CancelEdit, &mut status);

        assert!(status.contains("disconnected"), "status: {status}");
    }
}

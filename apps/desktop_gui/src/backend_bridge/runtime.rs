//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{GameClient, GameSession};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{SessionSnapshot, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Fatal(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = match GameClient::new(&server_url) {
                Ok(client) => client,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Fatal(err.to_string()));
                    tracing::error!(%server_url, %err, "cannot start game client");
                    return;
                }
            };

            let mut session = GameSession::new(Arc::new(client));
            let loaded = session.initialize().await;
            let _ = ui_tx.try_send(UiEvent::Info(startup_status(&server_url, loaded)));
            let _ = ui_tx.try_send(UiEvent::Snapshot(SessionSnapshot::capture(&session)));

            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend command received");
                match cmd {
                    BackendCommand::Refresh => {
                        session.refresh().await;
                    }
                    BackendCommand::Click { row, col } => {
                        session.click(row, col).await;
                    }
                    BackendCommand::Reset => {
                        session.reset().await;
                    }
                }
                if ui_tx
                    .send(UiEvent::Snapshot(SessionSnapshot::capture(&session)))
                    .is_err()
                {
                    break;
                }
            }
            tracing::info!("backend worker stopped");
        });
    });
}

fn startup_status(server_url: &str, loaded: bool) -> String {
    if loaded {
        format!("Connected to {server_url}")
    } else {
        format!("Could not load game from {server_url}")
    }
}

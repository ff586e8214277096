//! Daemon module for the session/break clock.
//!
//! This module contains the core daemon functionality:
//! - `timer`: Timer engine with the countdown state machine and scoped ticker
//! - `ipc`: Unix Domain Socket server and request dispatch
//!
//! `run_daemon` wires the pieces together: one engine behind a mutex, one
//! ticker task, one event consumer driving the sound collaborator, and the
//! accept loop.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::sound::SoundPlayer;
use crate::types::IpcResponse;

pub mod ipc;
pub mod timer;

pub use ipc::{IpcServer, RequestHandler, DEFAULT_SOCKET_PATH};
pub use timer::{run_ticker, TimerEngine, TimerEvent};

/// Runs the daemon until interrupted.
///
/// Accepts IPC connections on `socket_path` and dispatches their commands to
/// the engine. The ticker and event-consumer tasks are aborted on the way
/// out, which also releases any live tick source.
pub async fn run_daemon(
    socket_path: &Path,
    player: Option<Arc<dyn SoundPlayer + Send + Sync>>,
) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(TimerEngine::new(event_tx)));

    let ticker = tokio::spawn(run_ticker(Arc::clone(&engine)));
    let consumer = tokio::spawn(consume_events(event_rx, player));

    let server = IpcServer::new(socket_path)?;
    let handler = RequestHandler::new(Arc::clone(&engine));
    info!("Daemon listening on {:?}", server.socket_path());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
            accepted = server.accept() => {
                let mut stream = accepted?;
                match IpcServer::receive_request(&mut stream).await {
                    Ok(request) => {
                        debug!("Handling request: {:?}", request);
                        let response = handler.handle(request).await;
                        if let Err(e) = IpcServer::send_response(&mut stream, &response).await {
                            warn!("Failed to send response: {}", e);
                        }
                    }
                    Err(e) => {
                        warn!("Rejecting malformed request: {}", e);
                        let response = IpcResponse::error(e.to_string());
                        let _ = IpcServer::send_response(&mut stream, &response).await;
                    }
                }
            }
        }
    }

    ticker.abort();
    consumer.abort();
    Ok(())
}

/// Applies engine events to the sound collaborator and the log.
///
/// The engine never performs audio I/O itself: the completion tone plays
/// here on `Expired`, and `Reset` stops and rewinds a tone that is still
/// sounding.
async fn consume_events(
    mut event_rx: mpsc::UnboundedReceiver<TimerEvent>,
    player: Option<Arc<dyn SoundPlayer + Send + Sync>>,
) {
    while let Some(event) = event_rx.recv().await {
        match event {
            TimerEvent::Expired { entered } => {
                info!("Duration expired, entering {} mode", entered.label());
                if let Some(player) = &player {
                    if let Err(e) = player.play() {
                        warn!("Failed to play completion tone: {}", e);
                    }
                }
            }
            TimerEvent::Reset => {
                info!("Clock reset");
                if let Some(player) = &player {
                    player.stop();
                }
            }
            TimerEvent::Started => info!("Countdown started"),
            TimerEvent::Paused => info!("Countdown paused"),
            TimerEvent::Adjusted { target, minutes } => {
                info!("{} duration set to {} minutes", target.label(), minutes);
            }
            TimerEvent::Tick { remaining_seconds } => {
                debug!("Tick: {} seconds remaining", remaining_seconds);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

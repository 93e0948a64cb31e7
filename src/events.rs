//! The single event funnel.
//!
//! Terminal input and serial link events both post into one unbounded
//! channel. The runtime drains it from a single task, so session
//! handlers never run concurrently with each other or themselves.

use tokio::io::AsyncReadExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::serial::ChannelEvent;

/// Everything the session loop can observe.
#[derive(Debug)]
pub enum AppEvent {
    /// Raw bytes read from stdin. Chunks arrive as the platform
    /// delivers them and are not guaranteed to align with lines.
    TerminalInput(Vec<u8>),
    /// Event emitted by the serial link task.
    Channel(ChannelEvent),
    /// SIGINT — treated like an explicit quit.
    Shutdown,
}

/// Owns the queue both event sources feed into.
pub struct EventBus {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl EventBus {
    /// Bus with the stdin reader and Ctrl-C watcher attached.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        let bus = Self::detached();

        let input_tx = bus.sender();
        tokio::spawn(async move {
            let mut stdin = tokio::io::stdin();
            let mut buf = [0u8; 1024];
            loop {
                match stdin.read(&mut buf).await {
                    Ok(0) => break,
                    Ok(count) => {
                        if input_tx
                            .send(AppEvent::TerminalInput(buf[..count].to_vec()))
                            .is_err()
                        {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "stdin read failed");
                        break;
                    }
                }
            }
        });

        let signal_tx = bus.sender();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = signal_tx.send(AppEvent::Shutdown);
            }
        });

        bus
    }

    /// Bus with no attached sources; producers come from `sender()`.
    /// This is what tests drive directly.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    /// Next event, or `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}

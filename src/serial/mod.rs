//! Serial-port collaborators: enumeration and the link I/O task.
//!
//! The link task owns the `SerialStream` exclusively. The session talks
//! to it through a [`SerialHandle`] (fire-and-forget commands) and hears
//! back through [`ChannelEvent`]s posted into the shared event queue.

mod link;
mod ports;

pub use ports::{list_available_ports, PortCandidate};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::events::AppEvent;

/// Events emitted by the serial link task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// The device was opened and is ready for traffic.
    Opened { port: String },
    /// A chunk of bytes arrived from the device.
    Data(Vec<u8>),
    /// A non-fatal transport error. The link keeps running when it can.
    Error { port: String, message: String },
    /// The device disappeared; the link task has shut down.
    Removed,
}

/// Commands the session issues to the link task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkCommand {
    /// Write bytes to the device verbatim.
    Send(Vec<u8>),
    /// Reconfigure the line speed.
    SetBaudRate(u32),
}

/// Owning handle to a serial link.
///
/// Commands are queued without blocking; delivery is best-effort once
/// the device has been removed. Dropping the handle disconnects the
/// command channel, which ends the link task and closes the device.
#[derive(Debug, Clone)]
pub struct SerialHandle {
    tx: UnboundedSender<LinkCommand>,
}

impl SerialHandle {
    pub fn send(&self, bytes: Vec<u8>) {
        let _ = self.tx.send(LinkCommand::Send(bytes));
    }

    pub fn set_baud_rate(&self, baud: u32) {
        let _ = self.tx.send(LinkCommand::SetBaudRate(baud));
    }

    /// Handle plus the receiving end of its command channel.
    ///
    /// The link task keeps the receiver; tests keep it to observe what
    /// the session actually issued.
    pub fn pair() -> (Self, UnboundedReceiver<LinkCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

/// Seam between the session machine and the real transport.
///
/// The production implementation spawns a tokio task around a
/// `SerialStream`; tests substitute a recorder.
pub trait Connector {
    /// Start opening `port_name`. Progress is reported asynchronously
    /// through `events` (`Opened` on success, `Error` on failure).
    fn connect(&self, port_name: &str, events: UnboundedSender<AppEvent>) -> SerialHandle;
}

/// [`Connector`] backed by tokio-serial.
pub struct TokioSerialConnector {
    initial_baud: u32,
}

impl TokioSerialConnector {
    /// `initial_baud` is applied at open time; the operator's choice
    /// replaces it before the session turns interactive.
    pub fn new(initial_baud: u32) -> Self {
        Self { initial_baud }
    }
}

impl Connector for TokioSerialConnector {
    fn connect(&self, port_name: &str, events: UnboundedSender<AppEvent>) -> SerialHandle {
        link::spawn_link(port_name.to_string(), self.initial_baud, events)
    }
}

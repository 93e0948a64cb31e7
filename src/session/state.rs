//! Session phase.

use crate::fsm::State;
use crate::serial::PortCandidate;

/// Lifecycle of one interactive session.
///
/// Strictly forward: port discovery → port selection → baud-rate
/// negotiation → free duplex forwarding. Invalid input re-prompts
/// within the same phase; nothing moves the session backwards.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// Before port enumeration. No input is expected here.
    Initializing,

    /// Ports were offered to the operator. The candidate list is the
    /// snapshot taken at entry and is never refreshed in place.
    AwaitingPortSelection { candidates: Vec<PortCandidate> },

    /// A port is owned and opening (or open); no baud rate chosen yet.
    AwaitingBaudRate,

    /// Fully configured; bytes flow both ways.
    Interactive,
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Initializing
    }
}

impl State for SessionPhase {}

impl SessionPhase {
    /// Whether the session is waiting for the operator to pick a port.
    pub fn is_awaiting_port(&self) -> bool {
        matches!(self, Self::AwaitingPortSelection { .. })
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive)
    }
}

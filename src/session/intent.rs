//! Session transition intents.

use crate::fsm::Intent;
use crate::serial::PortCandidate;

/// Validated transition requests for the session phase.
///
/// Input that fails validation never becomes an intent — the machine
/// re-prompts and the phase stays put.
#[derive(Debug)]
pub enum SessionIntent {
    /// Startup enumeration finished with at least one port.
    OfferPorts { candidates: Vec<PortCandidate> },

    /// The serial link reported the selected port open.
    ChannelOpened,

    /// A valid baud rate was applied to the owned link.
    BaudRateApplied,
}

impl Intent for SessionIntent {}

//! Interactive serial console.
//!
//! A terminal session walks through port discovery, port selection and
//! baud-rate negotiation, then forwards keystrokes to the device and
//! echoes whatever the device sends back. A single inbound directive
//! (`app:<name>`) lets the device ask the host to launch an application.
//!
//! Terminal input and serial events are two independent asynchronous
//! sources; both post into one [`events::EventBus`] queue drained by a
//! single task, which is the only caller into the
//! [`session::SessionMachine`].

pub mod cli;
pub mod config;
pub mod directive;
pub mod events;
pub mod fsm;
pub mod logging;
pub mod prompt;
pub mod runtime;
pub mod serial;
pub mod session;

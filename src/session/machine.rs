//! The effectful session machine.
//!
//! [`SessionMachine::handle_terminal_line`] and
//! [`SessionMachine::handle_channel_event`] are the only entry points,
//! and the runtime calls both from a single task, so no synchronization
//! exists here. Input is validated locally, side effects (opening the
//! port, link commands, printing) run in place, and phase changes go
//! through [`SessionReducer`] only.

use std::io::Write;
use std::mem;

use tokio::sync::mpsc::UnboundedSender;

use crate::directive::{parse_directive, Launcher};
use crate::events::AppEvent;
use crate::fsm::Reducer;
use crate::prompt;
use crate::serial::{ChannelEvent, Connector, PortCandidate, SerialHandle};

use super::intent::SessionIntent;
use super::reducer::SessionReducer;
use super::state::SessionPhase;

/// What the event loop should do after handling a terminal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The operator asked to leave; exit with success.
    Exit,
}

pub struct SessionMachine<W, C, L> {
    phase: SessionPhase,
    link: Option<SerialHandle>,
    connector: C,
    launcher: L,
    out: W,
    events: UnboundedSender<AppEvent>,
}

impl<W: Write, C: Connector, L: Launcher> SessionMachine<W, C, L> {
    pub fn new(connector: C, launcher: L, out: W, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            phase: SessionPhase::default(),
            link: None,
            connector,
            launcher,
            out,
            events,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }

    /// Startup entry: offer the enumerated ports and start the session.
    ///
    /// `candidates` must be non-empty; the zero-port case exits before
    /// a machine is ever built.
    pub fn offer_ports(&mut self, candidates: Vec<PortCandidate>) {
        prompt::prompt_for_port(&mut self.out, &candidates);
        self.dispatch(SessionIntent::OfferPorts { candidates });
    }

    /// Route one chunk of terminal input according to the phase.
    ///
    /// Bytes that do not decode as UTF-8 are dropped silently. A
    /// decoded line starting with `exit` or `quit` (case-insensitive)
    /// ends the session from any phase, before phase dispatch.
    pub fn handle_terminal_line(&mut self, raw: &[u8]) -> Flow {
        let Ok(text) = std::str::from_utf8(raw) else {
            return Flow::Continue;
        };

        let lowered = text.to_lowercase();
        if lowered.starts_with("exit") || lowered.starts_with("quit") {
            let _ = writeln!(self.out, "Quitting...");
            let _ = self.out.flush();
            return Flow::Exit;
        }

        match &self.phase {
            SessionPhase::AwaitingPortSelection { candidates } => {
                match select_candidate(text, candidates) {
                    Some(port) => {
                        let name = port.name.clone();
                        tracing::info!(port = %name, "port selected, opening");
                        self.link = Some(self.connector.connect(&name, self.events.clone()));
                        // Phase advances when the Opened event arrives.
                    }
                    None => {
                        let _ = write!(self.out, "\nError: Invalid port selection.");
                        prompt::prompt_for_port(&mut self.out, candidates);
                    }
                }
            }

            SessionPhase::AwaitingBaudRate => match parse_baud_rate(text) {
                Some(baud) => {
                    if let Some(link) = &self.link {
                        link.set_baud_rate(baud);
                    }
                    let _ = write!(self.out, "Baud rate set to {}", baud);
                    self.dispatch(SessionIntent::BaudRateApplied);
                    prompt::print_prompt(&mut self.out);
                }
                None => {
                    let _ = write!(self.out, "\nError: Invalid baud rate.");
                    let _ = write!(self.out, "Baud rate should consist only of numeric digits.");
                    prompt::prompt_for_baud_rate(&mut self.out);
                }
            },

            SessionPhase::Interactive => {
                // Forwarded verbatim, newline included. A removed link
                // makes this a no-op rather than an error.
                if let Some(link) = &self.link {
                    link.send(raw.to_vec());
                }
                prompt::print_prompt(&mut self.out);
            }

            SessionPhase::Initializing => {}
        }

        Flow::Continue
    }

    /// React to one serial link event.
    pub fn handle_channel_event(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::Opened { port } => {
                // Only honored while a selection is pending on an owned
                // link; a stray Opened in any other phase is ignored.
                if self.phase.is_awaiting_port() && self.link.is_some() {
                    let _ = write!(self.out, "Serial port {} was opened", port);
                    prompt::prompt_for_baud_rate(&mut self.out);
                    self.dispatch(SessionIntent::ChannelOpened);
                }
            }

            ChannelEvent::Data(bytes) => {
                if let Ok(text) = std::str::from_utf8(&bytes) {
                    let _ = write!(self.out, "\nReceived: \"{}\" {:02x?}", text, bytes);
                    if let Some(app) = parse_directive(text) {
                        let _ = writeln!(self.out, "\nOpening {} ...", app);
                        self.launcher.launch(app);
                    }
                }
                prompt::print_prompt(&mut self.out);
            }

            ChannelEvent::Error { port, message } => {
                let _ = writeln!(
                    self.out,
                    "Serial port ({}) encountered error: {}",
                    port, message
                );
                let _ = self.out.flush();
            }

            ChannelEvent::Removed => {
                // Idempotent. The phase is left alone on purpose: see
                // DESIGN.md on mid-session removal.
                self.link = None;
            }
        }
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        self.phase = SessionReducer::reduce(mem::take(&mut self.phase), intent);
    }
}

/// Resolve a port-selection line against the candidate snapshot.
///
/// Whitespace is stripped, the index parse must succeed, and the index
/// is clamped to the candidate range.
fn select_candidate<'a>(input: &str, candidates: &'a [PortCandidate]) -> Option<&'a PortCandidate> {
    if candidates.is_empty() {
        return None;
    }
    let index: i64 = input.trim().parse().ok()?;
    let last = candidates.len() as i64 - 1;
    let clamped = index.clamp(0, last) as usize;
    candidates.get(clamped)
}

/// Baud rates are positive integers; anything else re-prompts.
fn parse_baud_rate(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|baud| *baud > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> Vec<PortCandidate> {
        names
            .iter()
            .map(|name| PortCandidate {
                name: name.to_string(),
                detail: None,
            })
            .collect()
    }

    #[test]
    fn selection_is_clamped_to_range() {
        let ports = candidates(&["a", "b", "c"]);
        assert_eq!(select_candidate("-5", &ports).unwrap().name, "a");
        assert_eq!(select_candidate("99", &ports).unwrap().name, "c");
        assert_eq!(select_candidate("1", &ports).unwrap().name, "b");
    }

    #[test]
    fn selection_strips_whitespace() {
        let ports = candidates(&["a", "b"]);
        assert_eq!(select_candidate(" 1 \n", &ports).unwrap().name, "b");
    }

    #[test]
    fn selection_rejects_non_numeric() {
        let ports = candidates(&["a"]);
        assert!(select_candidate("abc", &ports).is_none());
        assert!(select_candidate("", &ports).is_none());
        assert!(select_candidate("1.5", &ports).is_none());
    }

    #[test]
    fn selection_on_empty_list_is_none() {
        assert!(select_candidate("0", &[]).is_none());
    }

    #[test]
    fn baud_rate_parses_positive_integers() {
        assert_eq!(parse_baud_rate("9600"), Some(9600));
        assert_eq!(parse_baud_rate(" 115200\n"), Some(115200));
    }

    #[test]
    fn baud_rate_rejects_non_positive_and_non_numeric() {
        assert_eq!(parse_baud_rate("fast"), None);
        assert_eq!(parse_baud_rate("-100"), None);
        assert_eq!(parse_baud_rate("0"), None);
    }
}

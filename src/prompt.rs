//! Prompt and banner rendering.
//!
//! Stateless formatting over any writer. Every function flushes so
//! output appears immediately even when interleaved with async events.

use std::io::Write;

use crate::serial::PortCandidate;

pub fn print_introduction<W: Write>(out: &mut W) {
    let _ = writeln!(out, "portline — interactive serial console.");
    let _ = writeln!(out, "Type 'exit' or 'quit' at any prompt to leave.\n");
    let _ = out.flush();
}

/// The bare interactive prompt.
pub fn print_prompt<W: Write>(out: &mut W) {
    let _ = write!(out, "\n> ");
    let _ = out.flush();
}

/// Numbered, 0-based listing of the candidate ports, then the prompt.
pub fn prompt_for_port<W: Write>(out: &mut W, candidates: &[PortCandidate]) {
    let _ = writeln!(out, "\nPlease select a serial port: \n");
    for (index, port) in candidates.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index, port.label());
    }
    print_prompt(out);
}

pub fn prompt_for_baud_rate<W: Write>(out: &mut W) {
    let _ = write!(out, "\nPlease enter a baud rate: ");
    let _ = out.flush();
}

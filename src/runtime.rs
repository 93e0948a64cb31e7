//! Startup sequencing and the session event loop.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;

use crate::cli::Cli;
use crate::config::Config;
use crate::directive::ProcessLauncher;
use crate::events::{AppEvent, EventBus};
use crate::prompt;
use crate::serial::{self, TokioSerialConnector};
use crate::session::{Flow, SessionMachine};

/// Run the program to completion.
///
/// The returned exit code is SUCCESS for an explicit quit (or Ctrl-C)
/// and FAILURE when no serial ports are attached at startup.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let candidates =
        serial::list_available_ports().context("failed to enumerate serial ports")?;

    let mut out = io::stdout();

    if cli.list {
        for (index, port) in candidates.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index, port.label());
        }
        let _ = out.flush();
        return Ok(ExitCode::SUCCESS);
    }

    prompt::print_introduction(&mut out);

    if candidates.is_empty() {
        let _ = writeln!(out, "No connected serial ports found.");
        let _ = writeln!(
            out,
            "Please connect your USB to serial adapter(s) and run the program again.\n"
        );
        let _ = out.flush();
        return Ok(ExitCode::FAILURE);
    }

    let mut bus = EventBus::new();
    let connector = TokioSerialConnector::new(config.initial_baud);
    let launcher = ProcessLauncher::new(config.launcher_command.clone());
    let mut machine = SessionMachine::new(connector, launcher, out, bus.sender());
    machine.offer_ports(candidates);

    // Single consumer: every state transition happens on this task.
    while let Some(event) = bus.next().await {
        match event {
            AppEvent::TerminalInput(bytes) => {
                if machine.handle_terminal_line(&bytes) == Flow::Exit {
                    break;
                }
            }
            AppEvent::Channel(channel_event) => machine.handle_channel_event(channel_event),
            AppEvent::Shutdown => {
                tracing::info!("interrupt received, quitting");
                break;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

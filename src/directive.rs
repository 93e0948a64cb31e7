//! The `app:` directive and the process-launch collaborator.

use std::process::Command;

/// Directive prefix recognized in inbound device data.
pub const APP_PREFIX: &str = "app:";

/// Extract the application name from an inbound directive.
///
/// The prefix match is exact and case-sensitive, with no whitespace
/// tolerance; the remainder is returned untrimmed. An empty remainder
/// is not a directive.
pub fn parse_directive(text: &str) -> Option<&str> {
    let name = text.strip_prefix(APP_PREFIX)?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Fire-and-forget application launching.
pub trait Launcher {
    fn launch(&self, app: &str);
}

/// [`Launcher`] that spawns a host process and never waits on it.
pub struct ProcessLauncher {
    /// Overrides the platform launcher when set; the application name
    /// is passed as the single argument.
    command: Option<String>,
}

impl ProcessLauncher {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, app: &str) {
        let mut command = match &self.command {
            Some(launcher) => {
                let mut command = Command::new(launcher);
                command.arg(app);
                command
            }
            None => platform_launch_command(app),
        };

        match command.spawn() {
            Ok(child) => tracing::info!(app, pid = child.id(), "launched application"),
            Err(err) => tracing::warn!(app, error = %err, "failed to launch application"),
        }
    }
}

#[cfg(target_os = "macos")]
fn platform_launch_command(app: &str) -> Command {
    let mut command = Command::new("open");
    command.arg("-a").arg(app);
    command
}

#[cfg(not(target_os = "macos"))]
fn platform_launch_command(app: &str) -> Command {
    Command::new(app)
}

//! Configuration file support.

mod loader;

pub use loader::ConfigError;

use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Every field has a default, so an absent config file is equivalent to
/// an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Baud rate applied when a port is first opened, before the
    /// operator picks one interactively.
    pub initial_baud: u32,

    /// Command used to launch applications named by `app:` directives.
    /// The application name is passed as the single argument. Unset
    /// means the platform launcher.
    pub launcher_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_baud: 9600,
            launcher_command: None,
        }
    }
}

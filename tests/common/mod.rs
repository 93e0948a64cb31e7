//! Shared test utilities and spy infrastructure.

#![allow(dead_code, unused_imports)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use portline::directive::Launcher;
use portline::events::AppEvent;
use portline::serial::{Connector, LinkCommand, PortCandidate, SerialHandle};
use portline::session::SessionMachine;

pub type SpyBuffer = Arc<Mutex<Vec<u8>>>;

/// Writer that mirrors everything into a shared buffer.
#[derive(Clone)]
pub struct SpyWriter(pub SpyBuffer);

impl Write for SpyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Connector that records which ports were opened and keeps the
/// receiving end of every link's command channel.
#[derive(Clone, Default)]
pub struct SpyConnector {
    pub opened: Arc<Mutex<Vec<String>>>,
    pub links: Arc<Mutex<Vec<UnboundedReceiver<LinkCommand>>>>,
}

impl Connector for SpyConnector {
    fn connect(&self, port_name: &str, _events: UnboundedSender<AppEvent>) -> SerialHandle {
        let (handle, commands) = SerialHandle::pair();
        self.opened.lock().unwrap().push(port_name.to_string());
        self.links.lock().unwrap().push(commands);
        handle
    }
}

/// Launcher that records launch requests instead of spawning anything.
#[derive(Clone, Default)]
pub struct SpyLauncher {
    pub launched: Arc<Mutex<Vec<String>>>,
}

impl Launcher for SpyLauncher {
    fn launch(&self, app: &str) {
        self.launched.lock().unwrap().push(app.to_string());
    }
}

/// A session machine wired to spies, plus handles to inspect them.
pub struct Harness {
    pub machine: SessionMachine<SpyWriter, SpyConnector, SpyLauncher>,
    pub output: SpyBuffer,
    pub opened: Arc<Mutex<Vec<String>>>,
    pub links: Arc<Mutex<Vec<UnboundedReceiver<LinkCommand>>>>,
    pub launched: Arc<Mutex<Vec<String>>>,
    // Held so machine-issued events have somewhere to go.
    pub events: UnboundedReceiver<AppEvent>,
}

impl Harness {
    pub fn new() -> Self {
        let (events_tx, events_rx) = tokio::sync::mpsc::unbounded_channel();
        let connector = SpyConnector::default();
        let launcher = SpyLauncher::default();
        let output: SpyBuffer = Arc::new(Mutex::new(Vec::new()));

        let machine = SessionMachine::new(
            connector.clone(),
            launcher.clone(),
            SpyWriter(Arc::clone(&output)),
            events_tx,
        );

        Self {
            machine,
            output,
            opened: connector.opened,
            links: connector.links,
            launched: launcher.launched,
            events: events_rx,
        }
    }

    /// Everything printed so far.
    pub fn printed(&self) -> String {
        String::from_utf8_lossy(&self.output.lock().unwrap()).into_owned()
    }

    /// Forget output seen so far; later assertions start clean.
    pub fn clear_output(&self) {
        self.output.lock().unwrap().clear();
    }

    /// Port names the machine asked the connector to open.
    pub fn opened_ports(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    /// Application names the machine asked the launcher to launch.
    pub fn launched_apps(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }

    /// Drain every command the most recently opened link has received.
    pub fn link_commands(&self) -> Vec<LinkCommand> {
        let mut links = self.links.lock().unwrap();
        let link = links.last_mut().expect("no link opened");
        let mut commands = Vec::new();
        while let Ok(command) = link.try_recv() {
            commands.push(command);
        }
        commands
    }
}

pub fn candidates(names: &[&str]) -> Vec<PortCandidate> {
    names
        .iter()
        .map(|name| PortCandidate {
            name: name.to_string(),
            detail: None,
        })
        .collect()
}

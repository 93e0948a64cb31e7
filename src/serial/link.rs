//! The serial link I/O task.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedSender;
use tokio_serial::{SerialPort, SerialPortBuilderExt};

use crate::events::AppEvent;
use crate::serial::{ChannelEvent, LinkCommand, SerialHandle};

/// Spawn the task that owns the device stream.
///
/// The task opens the port, reports `Opened` or `Error`, then loops
/// draining commands and reading device bytes until the device goes
/// away or the handle is dropped.
pub(crate) fn spawn_link(
    port_name: String,
    initial_baud: u32,
    events: UnboundedSender<AppEvent>,
) -> SerialHandle {
    let (handle, mut commands) = SerialHandle::pair();

    tokio::spawn(async move {
        let mut stream = match tokio_serial::new(port_name.as_str(), initial_baud).open_native_async()
        {
            Ok(stream) => {
                tracing::info!(port = %port_name, baud = initial_baud, "serial port opened");
                let _ = events.send(AppEvent::Channel(ChannelEvent::Opened {
                    port: port_name.clone(),
                }));
                stream
            }
            Err(err) => {
                tracing::error!(port = %port_name, error = %err, "failed to open serial port");
                let _ = events.send(AppEvent::Channel(ChannelEvent::Error {
                    port: port_name.clone(),
                    message: err.to_string(),
                }));
                return;
            }
        };

        let mut buf = [0u8; 1024];
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(LinkCommand::Send(bytes)) => {
                        if let Err(err) = stream.write_all(&bytes).await {
                            let _ = events.send(AppEvent::Channel(ChannelEvent::Error {
                                port: port_name.clone(),
                                message: err.to_string(),
                            }));
                        }
                    }
                    Some(LinkCommand::SetBaudRate(baud)) => {
                        match stream.set_baud_rate(baud) {
                            Ok(()) => tracing::info!(port = %port_name, baud, "baud rate changed"),
                            Err(err) => {
                                let _ = events.send(AppEvent::Channel(ChannelEvent::Error {
                                    port: port_name.clone(),
                                    message: err.to_string(),
                                }));
                            }
                        }
                    }
                    // Handle dropped — the session is done with this port.
                    None => break,
                },
                read = stream.read(&mut buf) => match read {
                    Ok(0) => {
                        tracing::warn!(port = %port_name, "serial port removed (EOF)");
                        let _ = events.send(AppEvent::Channel(ChannelEvent::Removed));
                        break;
                    }
                    Ok(count) => {
                        let _ = events.send(AppEvent::Channel(ChannelEvent::Data(
                            buf[..count].to_vec(),
                        )));
                    }
                    Err(err) => {
                        // Unplugging surfaces as a read error on most
                        // platforms; report it, then retire the link.
                        tracing::warn!(port = %port_name, error = %err, "serial read failed");
                        let _ = events.send(AppEvent::Channel(ChannelEvent::Error {
                            port: port_name.clone(),
                            message: err.to_string(),
                        }));
                        let _ = events.send(AppEvent::Channel(ChannelEvent::Removed));
                        break;
                    }
                },
            }
        }
    });

    handle
}

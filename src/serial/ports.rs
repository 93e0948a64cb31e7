//! Serial port enumeration.

use tokio_serial::{SerialPortType, UsbPortInfo};

/// One discoverable serial device, snapshotted at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortCandidate {
    /// System device name, e.g. `/dev/ttyUSB0` or `COM3`.
    pub name: String,
    /// Human-readable hint about what is behind the port, when known.
    pub detail: Option<String>,
}

impl PortCandidate {
    /// Listing label: the device name, with the detail appended when present.
    pub fn label(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{} ({})", self.name, detail),
            None => self.name.clone(),
        }
    }
}

/// Enumerate the serial devices currently attached to the system.
///
/// Ordering follows the platform enumeration; the result may be empty.
pub fn list_available_ports() -> Result<Vec<PortCandidate>, tokio_serial::Error> {
    let ports = tokio_serial::available_ports()?;
    Ok(ports
        .into_iter()
        .map(|info| PortCandidate {
            name: info.port_name,
            detail: describe_port_type(&info.port_type),
        })
        .collect())
}

fn describe_port_type(port_type: &SerialPortType) -> Option<String> {
    match port_type {
        SerialPortType::UsbPort(usb) => Some(describe_usb(usb)),
        SerialPortType::BluetoothPort => Some("Bluetooth".to_string()),
        SerialPortType::PciPort => Some("PCI".to_string()),
        SerialPortType::Unknown => None,
    }
}

fn describe_usb(usb: &UsbPortInfo) -> String {
    match &usb.product {
        Some(product) => format!("USB: {}", product),
        None => format!("USB {:04x}:{:04x}", usb.vid, usb.pid),
    }
}

//! Device registry — the ordered collection of devices a controller owns.

use smarthome_domain::device::Device;
use smarthome_domain::error::{NotFoundError, SmartHomeError};

/// Insertion-ordered set of devices.
///
/// Order matters: bulk operations report results in the order devices were
/// added. Names are not required to be unique; lookups return the first
/// match. Devices can be added but never removed.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a device after all previously added ones.
    pub fn add(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// First device named `name`, if any.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|device| device.name() == name)
    }

    /// Look up a device by name, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`.
    pub fn get(&self, name: &str) -> Result<&Device, SmartHomeError> {
        self.find(name).ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: name.to_string(),
            }
            .into()
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl FromIterator<Device> for DeviceRegistry {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().collect(),
        }
    }
}

impl Extend<Device> for DeviceRegistry {
    fn extend<I: IntoIterator<Item = Device>>(&mut self, iter: I) {
        self.devices.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DeviceRegistry {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

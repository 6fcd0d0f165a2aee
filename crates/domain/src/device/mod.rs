//! Device — a named thing in the home with a fixed set of capabilities.
//!
//! A [`Device`] is only a name and a [`DeviceKind`]. The kind fixes which
//! [`Capability`] tags the device declares and which capability traits it can
//! be viewed through. Callers never downcast: they ask for a handle with one
//! of the `as_*` queries and get `None` when the kind lacks that capability.
//!
//! | Kind | Capabilities |
//! |------|--------------|
//! | [`SwitchableLight`] | switchable |
//! | [`DimmableLight`] | switchable, dimmable |
//! | [`NetworkableLight`] | switchable, networkable |
//! | [`AirConditioner`] | switchable, temperature adjustable |
//! | [`CoffeeMaker`] | switchable, beverage maker |
//! | [`Blinds`] | shade control |
//! | [`VacuumCleaner`] | cleaning appliance |

mod appliance;
mod blinds;
mod light;

pub use appliance::{AirConditioner, CoffeeMaker, VacuumCleaner};
pub use blinds::Blinds;
pub use light::{DimmableLight, NetworkableLight, SwitchableLight};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::capability::{
    BeverageMaker, Capability, CleaningAppliance, Dimmable, Networkable, ShadeControl, Switchable,
    TemperatureAdjustable,
};
use crate::error::ValidationError;

/// The concrete variant behind a [`Device`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    SwitchableLight,
    DimmableLight,
    NetworkableLight,
    AirConditioner,
    CoffeeMaker,
    Blinds,
    VacuumCleaner,
}

impl DeviceKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::SwitchableLight,
        Self::DimmableLight,
        Self::NetworkableLight,
        Self::AirConditioner,
        Self::CoffeeMaker,
        Self::Blinds,
        Self::VacuumCleaner,
    ];

    /// The `snake_case` name used in configuration files and serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SwitchableLight => "switchable_light",
            Self::DimmableLight => "dimmable_light",
            Self::NetworkableLight => "networkable_light",
            Self::AirConditioner => "air_conditioner",
            Self::CoffeeMaker => "coffee_maker",
            Self::Blinds => "blinds",
            Self::VacuumCleaner => "vacuum_cleaner",
        }
    }

    /// Capability tags declared by this kind. Never empty.
    #[must_use]
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::SwitchableLight => &[Capability::Switchable],
            Self::DimmableLight => &[Capability::Switchable, Capability::Dimmable],
            Self::NetworkableLight => &[Capability::Switchable, Capability::Networkable],
            Self::AirConditioner => &[Capability::Switchable, Capability::TemperatureAdjustable],
            Self::CoffeeMaker => &[Capability::Switchable, Capability::BeverageMaker],
            Self::Blinds => &[Capability::ShadeControl],
            Self::VacuumCleaner => &[Capability::CleaningAppliance],
        }
    }

    #[must_use]
    pub fn supports(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    #[must_use]
    pub fn as_switchable(self) -> Option<&'static dyn Switchable> {
        match self {
            Self::SwitchableLight => Some(&SwitchableLight),
            Self::DimmableLight => Some(&DimmableLight),
            Self::NetworkableLight => Some(&NetworkableLight),
            Self::AirConditioner => Some(&AirConditioner),
            Self::CoffeeMaker => Some(&CoffeeMaker),
            Self::Blinds | Self::VacuumCleaner => None,
        }
    }

    #[must_use]
    pub fn as_dimmable(self) -> Option<&'static dyn Dimmable> {
        match self {
            Self::DimmableLight => Some(&DimmableLight),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_networkable(self) -> Option<&'static dyn Networkable> {
        match self {
            Self::NetworkableLight => Some(&NetworkableLight),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_temperature_adjustable(self) -> Option<&'static dyn TemperatureAdjustable> {
        match self {
            Self::AirConditioner => Some(&AirConditioner),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_beverage_maker(self) -> Option<&'static dyn BeverageMaker> {
        match self {
            Self::CoffeeMaker => Some(&CoffeeMaker),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_shade_control(self) -> Option<&'static dyn ShadeControl> {
        match self {
            Self::Blinds => Some(&Blinds),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_cleaning_appliance(self) -> Option<&'static dyn CleaningAppliance> {
        match self {
            Self::VacuumCleaner => Some(&VacuumCleaner),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownDeviceKind(s.to_string()))
    }
}

/// A named device registered in the home.
///
/// Identity is the name alone; it is not checked for uniqueness. Devices
/// carry no runtime state, so every capability call on the same device
/// yields the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    name: String,
    kind: DeviceKind,
}

impl Device {
    #[must_use]
    pub fn new(kind: DeviceKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    #[must_use]
    pub fn capabilities(&self) -> &'static [Capability] {
        self.kind.capabilities()
    }

    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.kind.supports(capability)
    }

    #[must_use]
    pub fn as_switchable(&self) -> Option<&'static dyn Switchable> {
        self.kind.as_switchable()
    }

    #[must_use]
    pub fn as_dimmable(&self) -> Option<&'static dyn Dimmable> {
        self.kind.as_dimmable()
    }

    #[must_use]
    pub fn as_networkable(&self) -> Option<&'static dyn Networkable> {
        self.kind.as_networkable()
    }

    #[must_use]
    pub fn as_temperature_adjustable(&self) -> Option<&'static dyn TemperatureAdjustable> {
        self.kind.as_temperature_adjustable()
    }

    #[must_use]
    pub fn as_beverage_maker(&self) -> Option<&'static dyn BeverageMaker> {
        self.kind.as_beverage_maker()
    }

    #[must_use]
    pub fn as_shade_control(&self) -> Option<&'static dyn ShadeControl> {
        self.kind.as_shade_control()
    }

    #[must_use]
    pub fn as_cleaning_appliance(&self) -> Option<&'static dyn CleaningAppliance> {
        self.kind.as_cleaning_appliance()
    }
}

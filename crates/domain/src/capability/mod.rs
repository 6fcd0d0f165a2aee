//! Capability — a behavioural facet a device kind may implement.
//!
//! Every capability exists twice: as a tag in [`Capability`] (for queries,
//! listings and error reporting) and as a trait in [`contracts`] holding the
//! actual operations. A device kind declares its tags and implements the
//! matching traits, nothing more.

mod contracts;

pub use contracts::{
    BeverageMaker, CleaningAppliance, Dimmable, Networkable, ShadeControl, Switchable,
    TemperatureAdjustable,
};

use serde::{Deserialize, Serialize};

/// Tag naming one capability contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Switchable,
    Dimmable,
    Networkable,
    TemperatureAdjustable,
    BeverageMaker,
    ShadeControl,
    CleaningAppliance,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Switchable,
        Self::Dimmable,
        Self::Networkable,
        Self::TemperatureAdjustable,
        Self::BeverageMaker,
        Self::ShadeControl,
        Self::CleaningAppliance,
    ];

    /// The `snake_case` name used in serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Switchable => "switchable",
            Self::Dimmable => "dimmable",
            Self::Networkable => "networkable",
            Self::TemperatureAdjustable => "temperature_adjustable",
            Self::BeverageMaker => "beverage_maker",
            Self::ShadeControl => "shade_control",
            Self::CleaningAppliance => "cleaning_appliance",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

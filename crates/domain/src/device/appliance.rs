//! Household appliances — air conditioner, coffee maker, vacuum cleaner.

use crate::capability::{BeverageMaker, CleaningAppliance, Switchable, TemperatureAdjustable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AirConditioner;

impl Switchable for AirConditioner {
    fn turn_on(&self) -> String {
        "AC turned on".to_string()
    }

    fn turn_off(&self) -> String {
        "AC turned off".to_string()
    }
}

impl TemperatureAdjustable for AirConditioner {
    fn set_temperature(&self, temperature_in_celsius: i32) -> String {
        format!("Set temperature to {temperature_in_celsius}")
    }
}

/// Brews coffee; must be switched on around each brew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoffeeMaker;

impl Switchable for CoffeeMaker {
    fn turn_on(&self) -> String {
        "Coffee maker turned on".to_string()
    }

    fn turn_off(&self) -> String {
        "Coffee maker turned off".to_string()
    }
}

impl BeverageMaker for CoffeeMaker {
    fn brew(&self, beverage_type: &str) -> String {
        format!("Brewing {beverage_type} coffee")
    }
}

/// Robot vacuum. Not switchable: it is only ever told to start or stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VacuumCleaner;

impl CleaningAppliance for VacuumCleaner {
    fn start_cleaning(&self) -> String {
        "Vacuum cleaner started cleaning".to_string()
    }

    fn stop_cleaning(&self) -> String {
        "Vacuum cleaner stopped cleaning".to_string()
    }
}

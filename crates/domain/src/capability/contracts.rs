//! Operation contracts, one trait per [`Capability`](super::Capability).
//!
//! Operations are stateless: they only describe what the device did, as a
//! status string. Arguments are never validated and are embedded verbatim.

/// Can be powered on and off.
pub trait Switchable {
    fn turn_on(&self) -> String;
    fn turn_off(&self) -> String;
}

/// Brightness can be set as a percentage.
pub trait Dimmable {
    fn dim(&self, level_in_percent: i32) -> String;
}

/// Can join a named network.
pub trait Networkable {
    fn connect_to_network(&self, network_name: &str) -> String;
}

/// Target temperature can be set, in degrees Celsius.
pub trait TemperatureAdjustable {
    fn set_temperature(&self, temperature_in_celsius: i32) -> String;
}

/// Brews a beverage of the requested type.
pub trait BeverageMaker {
    fn brew(&self, beverage_type: &str) -> String;
}

pub trait ShadeControl {
    fn open(&self) -> String;
    fn close(&self) -> String;
}

pub trait CleaningAppliance {
    fn start_cleaning(&self) -> String;
    fn stop_cleaning(&self) -> String;
}

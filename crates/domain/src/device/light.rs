//! Light variants — plain, dimmable and network-connected.

use crate::capability::{Dimmable, Networkable, Switchable};

/// A light that can only be switched on and off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchableLight;

impl Switchable for SwitchableLight {
    fn turn_on(&self) -> String {
        "Switchable light turned on".to_string()
    }

    fn turn_off(&self) -> String {
        "Switchable light turned off".to_string()
    }
}

/// A light with a brightness level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimmableLight;

impl Switchable for DimmableLight {
    fn turn_on(&self) -> String {
        "Dimmable light turned on at full brightness".to_string()
    }

    fn turn_off(&self) -> String {
        "Dimmable light turned off".to_string()
    }
}

impl Dimmable for DimmableLight {
    fn dim(&self, level_in_percent: i32) -> String {
        format!("Dimmable light dimmed to {level_in_percent}%")
    }
}

/// A light that joins the home network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkableLight;

impl Switchable for NetworkableLight {
    fn turn_on(&self) -> String {
        "Networkable light turned on".to_string()
    }

    fn turn_off(&self) -> String {
        "Networkable light turned off".to_string()
    }
}

impl Networkable for NetworkableLight {
    fn connect_to_network(&self, network_name: &str) -> String {
        format!("Networkable light connected to {network_name}")
    }
}

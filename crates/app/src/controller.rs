//! Smart home controller — bulk, scene and targeted device operations.
//!
//! Bulk and scene operations return the status strings of every device that
//! took part, in registry order. A device that cannot take part (unknown
//! name, missing capability) is skipped without error. Targeted operations
//! address a single device by name and report both conditions as
//! [`SmartHomeError`]s instead.

use smarthome_domain::capability::{Capability, Switchable};
use smarthome_domain::device::Device;
use smarthome_domain::error::{SmartHomeError, UnsupportedError};

use crate::registry::DeviceRegistry;
use crate::scene::{NIGHT_CLEANING_SCHEDULED, NightCleaning};

/// Owns the home's devices and its scene state.
#[derive(Debug, Default)]
pub struct SmartHomeController {
    registry: DeviceRegistry,
    night_cleaning: NightCleaning,
}

impl SmartHomeController {
    /// Create a controller with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller owning an existing registry.
    #[must_use]
    pub fn with_registry(registry: DeviceRegistry) -> Self {
        Self {
            registry,
            night_cleaning: NightCleaning::default(),
        }
    }

    #[tracing::instrument(
        skip(self, device),
        fields(device_name = %device.name(), kind = %device.kind())
    )]
    pub fn add_device(&mut self, device: Device) {
        tracing::debug!("device added");
        self.registry.add(device);
    }

    #[must_use]
    pub fn find_device(&self, name: &str) -> Option<&Device> {
        self.registry.find(name)
    }

    pub fn devices(&self) -> std::slice::Iter<'_, Device> {
        self.registry.iter()
    }

    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    #[must_use]
    pub fn night_cleaning(&self) -> &NightCleaning {
        &self.night_cleaning
    }

    #[must_use]
    pub fn is_night_cleaning_scheduled(&self) -> bool {
        self.night_cleaning.is_scheduled()
    }

    // -- bulk operations ----------------------------------------------------

    /// Turn on every switchable device, in registry order.
    #[must_use]
    #[tracing::instrument(skip(self))]
    pub fn turn_on_all(&self) -> Vec<String> {
        self.each_switchable(|device| device.turn_on())
    }

    /// Turn off every switchable device, then start the scheduled night
    /// cleaning if there is one.
    ///
    /// Equivalent to [`turn_off_switchables`](Self::turn_off_switchables)
    /// followed by [`run_scheduled_cleaning`](Self::run_scheduled_cleaning).
    #[must_use]
    #[tracing::instrument(skip(self))]
    pub fn turn_off_all(&self) -> Vec<String> {
        let mut result = self.turn_off_switchables();
        result.extend(self.run_scheduled_cleaning());
        result
    }

    /// Turn off every switchable device, in registry order.
    #[must_use]
    pub fn turn_off_switchables(&self) -> Vec<String> {
        self.each_switchable(|device| device.turn_off())
    }

    /// Start the scheduled cleaning appliance.
    ///
    /// Returns `None` when nothing is scheduled, or when the scheduled device
    /// is missing or cannot clean.
    #[must_use]
    pub fn run_scheduled_cleaning(&self) -> Option<String> {
        let name = self.night_cleaning.device()?;
        let Some(device) = self.registry.find(name) else {
            tracing::debug!(device_name = name, "scheduled cleaning device not found");
            return None;
        };
        let Some(cleaner) = device.as_cleaning_appliance() else {
            tracing::debug!(
                device_name = name,
                "scheduled cleaning device is not a cleaning appliance"
            );
            return None;
        };
        Some(cleaner.start_cleaning())
    }

    fn each_switchable(&self, operation: impl Fn(&dyn Switchable) -> String) -> Vec<String> {
        self.registry
            .iter()
            .filter_map(|device| match device.as_switchable() {
                Some(switchable) => Some(operation(switchable)),
                None => {
                    tracing::trace!(device_name = device.name(), "not switchable, skipping");
                    None
                }
            })
            .collect()
    }

    // -- scenes -------------------------------------------------------------

    /// Open the blinds, then brew a beverage with the coffee maker.
    ///
    /// The blinds contribute `open()` if they exist and control shades. The
    /// coffee maker contributes `turn_on()`, `brew()` and `turn_off()` if it
    /// exists and is both switchable and a beverage maker.
    #[must_use]
    #[tracing::instrument(skip(self))]
    pub fn make_quick_breakfast(
        &self,
        blinds_name: &str,
        coffee_maker_name: &str,
        beverage_type: &str,
    ) -> Vec<String> {
        let mut result = Vec::new();

        match self.registry.find(blinds_name) {
            Some(device) => match device.as_shade_control() {
                Some(blinds) => result.push(blinds.open()),
                None => tracing::debug!(device_name = blinds_name, "cannot control shades"),
            },
            None => tracing::debug!(device_name = blinds_name, "blinds not found"),
        }

        match self.registry.find(coffee_maker_name) {
            Some(device) => match (device.as_switchable(), device.as_beverage_maker()) {
                (Some(power), Some(maker)) => {
                    result.push(power.turn_on());
                    result.push(maker.brew(beverage_type));
                    result.push(power.turn_off());
                }
                _ => tracing::debug!(device_name = coffee_maker_name, "cannot brew"),
            },
            None => tracing::debug!(device_name = coffee_maker_name, "coffee maker not found"),
        }

        result
    }

    /// Remember `cleaning_device_name` for the next
    /// [`turn_off_all`](Self::turn_off_all). Does not clean by itself.
    #[tracing::instrument(skip(self))]
    pub fn schedule_night_cleaning(&mut self, cleaning_device_name: &str) -> Vec<String> {
        self.night_cleaning.schedule(cleaning_device_name);
        tracing::info!("night cleaning scheduled");
        vec![NIGHT_CLEANING_SCHEDULED.to_string()]
    }

    // -- targeted operations ------------------------------------------------

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it is not switchable.
    pub fn turn_on(&self, name: &str) -> Result<String, SmartHomeError> {
        let device = self.capable(name, Capability::Switchable, Device::as_switchable)?;
        Ok(device.turn_on())
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it is not switchable.
    pub fn turn_off(&self, name: &str) -> Result<String, SmartHomeError> {
        let device = self.capable(name, Capability::Switchable, Device::as_switchable)?;
        Ok(device.turn_off())
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it is not dimmable.
    pub fn dim(&self, name: &str, level_in_percent: i32) -> Result<String, SmartHomeError> {
        let device = self.capable(name, Capability::Dimmable, Device::as_dimmable)?;
        Ok(device.dim(level_in_percent))
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it cannot join a network.
    pub fn connect_to_network(
        &self,
        name: &str,
        network_name: &str,
    ) -> Result<String, SmartHomeError> {
        let device = self.capable(name, Capability::Networkable, Device::as_networkable)?;
        Ok(device.connect_to_network(network_name))
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when its temperature is not adjustable.
    pub fn set_temperature(
        &self,
        name: &str,
        temperature_in_celsius: i32,
    ) -> Result<String, SmartHomeError> {
        let device = self.capable(
            name,
            Capability::TemperatureAdjustable,
            Device::as_temperature_adjustable,
        )?;
        Ok(device.set_temperature(temperature_in_celsius))
    }

    /// Brew without switching the device on or off around it.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it is not a beverage maker.
    pub fn brew(&self, name: &str, beverage_type: &str) -> Result<String, SmartHomeError> {
        let device = self.capable(name, Capability::BeverageMaker, Device::as_beverage_maker)?;
        Ok(device.brew(beverage_type))
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it cannot control shades.
    pub fn open(&self, name: &str) -> Result<String, SmartHomeError> {
        let device = self.capable(name, Capability::ShadeControl, Device::as_shade_control)?;
        Ok(device.open())
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it cannot control shades.
    pub fn close(&self, name: &str) -> Result<String, SmartHomeError> {
        let device = self.capable(name, Capability::ShadeControl, Device::as_shade_control)?;
        Ok(device.close())
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it is not a cleaning appliance.
    pub fn start_cleaning(&self, name: &str) -> Result<String, SmartHomeError> {
        let device = self.capable(
            name,
            Capability::CleaningAppliance,
            Device::as_cleaning_appliance,
        )?;
        Ok(device.start_cleaning())
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device is named `name`,
    /// or [`SmartHomeError::Unsupported`] when it is not a cleaning appliance.
    pub fn stop_cleaning(&self, name: &str) -> Result<String, SmartHomeError> {
        let device = self.capable(
            name,
            Capability::CleaningAppliance,
            Device::as_cleaning_appliance,
        )?;
        Ok(device.stop_cleaning())
    }

    /// Resolve `name` to a capability handle obtained through `query`.
    fn capable<T: ?Sized + 'static>(
        &self,
        name: &str,
        capability: Capability,
        query: impl FnOnce(&Device) -> Option<&'static T>,
    ) -> Result<&'static T, SmartHomeError> {
        let device = self.registry.get(name)?;
        query(device).ok_or_else(|| {
            UnsupportedError {
                device: device.name().to_string(),
                capability,
            }
            .into()
        })
    }
}

impl From<DeviceRegistry> for SmartHomeController {
    fn from(registry: DeviceRegistry) -> Self {
        Self::with_registry(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthome_domain::device::DeviceKind;
    use smarthome_domain::error::NotFoundError;

    fn demo_home() -> SmartHomeController {
        let mut controller = SmartHomeController::new();
        controller.add_device(Device::new(DeviceKind::SwitchableLight, "Living Room Light"));
        controller.add_device(Device::new(DeviceKind::SwitchableLight, "Dining Room Light"));
        controller.add_device(Device::new(DeviceKind::NetworkableLight, "Kitchen Light"));
        controller.add_device(Device::new(DeviceKind::DimmableLight, "Bedroom Light"));
        controller.add_device(Device::new(DeviceKind::CoffeeMaker, "Coffee Maker"));
        controller.add_device(Device::new(DeviceKind::AirConditioner, "AC"));
        controller
    }

    fn breakfast_home() -> SmartHomeController {
        let mut controller = SmartHomeController::new();
        controller.add_device(Device::new(DeviceKind::Blinds, "Bedroom Blinds"));
        controller.add_device(Device::new(DeviceKind::CoffeeMaker, "Coffee Maker"));
        controller
    }

    #[test]
    fn should_turn_on_all_switchables_in_insertion_order() {
        assert_eq!(
            demo_home().turn_on_all(),
            [
                "Switchable light turned on",
                "Switchable light turned on",
                "Networkable light turned on",
                "Dimmable light turned on at full brightness",
                "Coffee maker turned on",
                "AC turned on",
            ]
        );
    }

    #[test]
    fn should_turn_off_all_switchables_in_insertion_order() {
        assert_eq!(
            demo_home().turn_off_all(),
            [
                "Switchable light turned off",
                "Switchable light turned off",
                "Networkable light turned off",
                "Dimmable light turned off",
                "Coffee maker turned off",
                "AC turned off",
            ]
        );
    }

    #[test]
    fn should_skip_devices_that_are_not_switchable() {
        let mut controller = SmartHomeController::new();
        controller.add_device(Device::new(DeviceKind::Blinds, "Blinds"));
        controller.add_device(Device::new(DeviceKind::AirConditioner, "AC"));
        controller.add_device(Device::new(DeviceKind::VacuumCleaner, "Vacuum"));

        assert_eq!(controller.turn_on_all(), ["AC turned on"]);
        assert_eq!(controller.turn_off_all(), ["AC turned off"]);
    }

    #[test]
    fn should_return_nothing_for_empty_home() {
        let controller = SmartHomeController::new();
        assert!(controller.turn_on_all().is_empty());
        assert!(controller.turn_off_all().is_empty());
    }

    #[test]
    fn should_return_identical_results_when_turned_on_twice() {
        let controller = demo_home();
        assert_eq!(controller.turn_on_all(), controller.turn_on_all());
    }

    #[test]
    fn should_make_quick_breakfast() {
        assert_eq!(
            breakfast_home().make_quick_breakfast("Bedroom Blinds", "Coffee Maker", "Colombian"),
            [
                "Blinds opened",
                "Coffee maker turned on",
                "Brewing Colombian coffee",
                "Coffee maker turned off",
            ]
        );
    }

    #[test]
    fn should_skip_blinds_when_not_found() {
        assert_eq!(
            breakfast_home().make_quick_breakfast("Garage Door", "Coffee Maker", "Arabica"),
            [
                "Coffee maker turned on",
                "Brewing Arabica coffee",
                "Coffee maker turned off",
            ]
        );
    }

    #[test]
    fn should_skip_coffee_maker_when_not_found() {
        assert_eq!(
            breakfast_home().make_quick_breakfast("Bedroom Blinds", "Kettle", "Colombian"),
            ["Blinds opened"]
        );
    }

    #[test]
    fn should_skip_devices_lacking_breakfast_capabilities() {
        let controller = breakfast_home();
        let result = controller.make_quick_breakfast("Coffee Maker", "Bedroom Blinds", "Colombian");
        assert!(result.is_empty());
    }

    #[test]
    fn should_confirm_when_night_cleaning_scheduled() {
        let mut controller = demo_home();
        assert!(!controller.is_night_cleaning_scheduled());

        let result = controller.schedule_night_cleaning("Vacuum");

        assert_eq!(result, ["Night cleaning scheduled"]);
        assert!(controller.is_night_cleaning_scheduled());
        assert_eq!(controller.night_cleaning().device(), Some("Vacuum"));
    }

    #[test]
    fn should_start_cleaning_after_switchables_when_scheduled() {
        let mut controller = SmartHomeController::new();
        controller.add_device(Device::new(DeviceKind::VacuumCleaner, "Vacuum"));
        controller.add_device(Device::new(DeviceKind::SwitchableLight, "Hall Light"));

        assert_eq!(controller.turn_off_all(), ["Switchable light turned off"]);

        controller.schedule_night_cleaning("Vacuum");

        assert_eq!(
            controller.turn_off_all(),
            [
                "Switchable light turned off",
                "Vacuum cleaner started cleaning",
            ]
        );
    }

    #[test]
    fn should_not_clean_when_turning_on_all() {
        let mut controller = SmartHomeController::new();
        controller.add_device(Device::new(DeviceKind::VacuumCleaner, "Vacuum"));
        controller.schedule_night_cleaning("Vacuum");
        assert!(controller.turn_on_all().is_empty());
    }

    #[test]
    fn should_skip_cleaning_when_scheduled_device_missing_or_incapable() {
        let mut controller = demo_home();
        controller.schedule_night_cleaning("Vacuum");
        assert_eq!(controller.turn_off_all().len(), 6);

        controller.schedule_night_cleaning("AC");
        assert_eq!(controller.turn_off_all().len(), 6);
        assert_eq!(controller.run_scheduled_cleaning(), None);
    }

    #[test]
    fn should_compose_turn_off_all_from_its_parts() {
        let mut controller = demo_home();
        controller.add_device(Device::new(DeviceKind::VacuumCleaner, "Vacuum"));
        controller.schedule_night_cleaning("Vacuum");

        let mut expected = controller.turn_off_switchables();
        expected.extend(controller.run_scheduled_cleaning());
        assert_eq!(controller.turn_off_all(), expected);
    }

    #[test]
    fn should_dim_light_by_name() {
        assert_eq!(
            demo_home().dim("Bedroom Light", 50).unwrap(),
            "Dimmable light dimmed to 50%"
        );
    }

    #[test]
    fn should_connect_light_to_network_by_name() {
        assert_eq!(
            demo_home()
                .connect_to_network("Kitchen Light", "Home Network")
                .unwrap(),
            "Networkable light connected to Home Network"
        );
    }

    #[test]
    fn should_run_every_targeted_operation_on_a_capable_device() {
        let mut controller = breakfast_home();
        controller.add_device(Device::new(DeviceKind::VacuumCleaner, "Vacuum"));
        controller.add_device(Device::new(DeviceKind::AirConditioner, "AC"));

        assert_eq!(controller.turn_on("AC").unwrap(), "AC turned on");
        assert_eq!(controller.turn_off("AC").unwrap(), "AC turned off");
        assert_eq!(
            controller.set_temperature("AC", 21).unwrap(),
            "Set temperature to 21"
        );
        assert_eq!(
            controller.brew("Coffee Maker", "Kona").unwrap(),
            "Brewing Kona coffee"
        );
        assert_eq!(controller.open("Bedroom Blinds").unwrap(), "Blinds opened");
        assert_eq!(controller.close("Bedroom Blinds").unwrap(), "Blinds closed");
        assert_eq!(
            controller.start_cleaning("Vacuum").unwrap(),
            "Vacuum cleaner started cleaning"
        );
        assert_eq!(
            controller.stop_cleaning("Vacuum").unwrap(),
            "Vacuum cleaner stopped cleaning"
        );
    }

    #[test]
    fn should_return_not_found_for_unknown_device() {
        let result = demo_home().dim("Garage Light", 10);
        assert!(matches!(
            result,
            Err(SmartHomeError::NotFound(NotFoundError { ref id, .. })) if id == "Garage Light"
        ));
    }

    #[test]
    fn should_return_unsupported_when_capability_missing() {
        let result = demo_home().dim("Living Room Light", 10);
        assert!(matches!(
            result,
            Err(SmartHomeError::Unsupported(UnsupportedError {
                ref device,
                capability: Capability::Dimmable,
            })) if device == "Living Room Light"
        ));
    }

    #[test]
    fn should_build_from_registry() {
        let registry: DeviceRegistry = [
            Device::new(DeviceKind::SwitchableLight, "A"),
            Device::new(DeviceKind::Blinds, "B"),
        ]
        .into_iter()
        .collect();
        let controller = SmartHomeController::from(registry);

        assert_eq!(controller.registry().len(), 2);
        assert_eq!(controller.devices().count(), 2);
        assert!(controller.find_device("B").is_some());
        assert_eq!(controller.turn_on_all(), ["Switchable light turned on"]);
    }
}

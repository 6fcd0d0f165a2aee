//! Command-line interface — argument parsing and dispatch onto the controller.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use smarthome_app::controller::SmartHomeController;
use smarthome_domain::capability::Capability;
use smarthome_domain::device::{Device, DeviceKind};
use smarthome_domain::error::SmartHomeError;

use crate::config::{Config, OutputFormat};

/// Drive a simulated smart home and print what every device reports.
#[derive(Debug, Parser)]
#[command(name = "smarthomectl", version, about)]
pub struct Cli {
    /// Configuration file (defaults to `smarthome.toml` when present).
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List configured devices and their capabilities.
    Devices,
    /// Turn on every switchable device.
    TurnOnAll,
    /// Turn off every switchable device, then run night cleaning if scheduled.
    TurnOffAll {
        /// Schedule night cleaning with this device first.
        #[arg(long, value_name = "DEVICE")]
        night_cleaning: Option<String>,
    },
    /// Open the blinds and brew a coffee.
    Breakfast {
        #[arg(long)]
        blinds: Option<String>,
        #[arg(long)]
        coffee_maker: Option<String>,
        #[arg(long)]
        beverage: Option<String>,
    },
    /// Schedule night cleaning with the given device.
    ScheduleCleaning { device: String },
    /// Run a single operation on one device.
    Device {
        name: String,
        #[command(subcommand)]
        action: DeviceAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DeviceAction {
    On,
    Off,
    Dim {
        #[arg(allow_negative_numbers = true)]
        level: i32,
    },
    Connect {
        network: String,
    },
    Temperature {
        #[arg(allow_negative_numbers = true)]
        celsius: i32,
    },
    Brew {
        beverage: String,
    },
    Open,
    Close,
    StartCleaning,
    StopCleaning,
}

/// What a command produced, before rendering.
#[derive(Debug, PartialEq, Eq)]
pub enum Report {
    Statuses(Vec<String>),
    Devices(Vec<DeviceSummary>),
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DeviceSummary {
    pub name: String,
    pub kind: DeviceKind,
    pub capabilities: Vec<Capability>,
}

impl From<&Device> for DeviceSummary {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name().to_string(),
            kind: device.kind(),
            capabilities: device.capabilities().to_vec(),
        }
    }
}

impl Command {
    /// Execute the command against `controller`, using `config` for scene
    /// defaults.
    ///
    /// # Errors
    ///
    /// Only targeted device operations fail, with
    /// [`SmartHomeError::NotFound`] or [`SmartHomeError::Unsupported`].
    pub fn run(
        self,
        controller: &mut SmartHomeController,
        config: &Config,
    ) -> Result<Report, SmartHomeError> {
        let statuses = match self {
            Self::Devices => {
                return Ok(Report::Devices(
                    controller.devices().map(DeviceSummary::from).collect(),
                ));
            }
            Self::TurnOnAll => controller.turn_on_all(),
            Self::TurnOffAll { night_cleaning } => {
                let night = &config.scenes.night_cleaning;
                if let Some(device) = night_cleaning {
                    controller.schedule_night_cleaning(&device);
                } else if night.enabled {
                    controller.schedule_night_cleaning(&night.device);
                }
                controller.turn_off_all()
            }
            Self::Breakfast {
                blinds,
                coffee_maker,
                beverage,
            } => {
                let scene = &config.scenes.quick_breakfast;
                controller.make_quick_breakfast(
                    blinds.as_deref().unwrap_or(&scene.blinds),
                    coffee_maker.as_deref().unwrap_or(&scene.coffee_maker),
                    beverage.as_deref().unwrap_or(&scene.beverage),
                )
            }
            Self::ScheduleCleaning { device } => controller.schedule_night_cleaning(&device),
            Self::Device { name, action } => vec![action.run(controller, &name)?],
        };
        Ok(Report::Statuses(statuses))
    }
}

impl DeviceAction {
    fn run(self, controller: &SmartHomeController, name: &str) -> Result<String, SmartHomeError> {
        match self {
            Self::On => controller.turn_on(name),
            Self::Off => controller.turn_off(name),
            Self::Dim { level } => controller.dim(name, level),
            Self::Connect { network } => controller.connect_to_network(name, &network),
            Self::Temperature { celsius } => controller.set_temperature(name, celsius),
            Self::Brew { beverage } => controller.brew(name, &beverage),
            Self::Open => controller.open(name),
            Self::Close => controller.close(name),
            Self::StartCleaning => controller.start_cleaning(name),
            Self::StopCleaning => controller.stop_cleaning(name),
        }
    }
}

impl Report {
    /// Render for stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match (self, format) {
            (Self::Statuses(lines), OutputFormat::Text) => Ok(lines.join("\n")),
            (Self::Statuses(lines), OutputFormat::Json) => serde_json::to_string_pretty(lines),
            (Self::Devices(devices), OutputFormat::Text) => Ok(devices
                .iter()
                .map(|device| {
                    let capabilities: Vec<&str> =
                        device.capabilities.iter().copied().map(Capability::as_str).collect();
                    format!(
                        "{} ({}): {}",
                        device.name,
                        device.kind,
                        capabilities.join(", ")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")),
            (Self::Devices(devices), OutputFormat::Json) => serde_json::to_string_pretty(devices),
        }
    }
}

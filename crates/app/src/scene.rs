//! Scene state — what a controller remembers between scene operations.

/// Confirmation returned when night cleaning gets scheduled.
pub const NIGHT_CLEANING_SCHEDULED: &str = "Night cleaning scheduled";

/// Whether a cleaning run is pending for the next "turn everything off".
///
/// There is no way back to [`NotScheduled`](Self::NotScheduled):
/// once scheduled, it stays scheduled for the controller's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NightCleaning {
    #[default]
    NotScheduled,
    Scheduled {
        /// Name of the cleaning appliance to start.
        device: String,
    },
}

impl NightCleaning {
    /// Schedule cleaning with `device`, replacing any earlier choice.
    pub fn schedule(&mut self, device: impl Into<String>) {
        *self = Self::Scheduled {
            device: device.into(),
        };
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }

    /// The device to start, when scheduled.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        match self {
            Self::NotScheduled => None,
            Self::Scheduled { device } => Some(device),
        }
    }
}

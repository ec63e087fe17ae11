//! motorctl actions, built on the same `PanelClient` as the browser panel

use anyhow::{Context, Result};
use tracing::{debug, info};

use motor_panel_protocol::{Command, PanelClient, Setting, Settings, Transport};

/// Values given on the command line; missing ones come from the device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub rotation_speed: Option<i64>,
    pub interval_time: Option<i64>,
}

impl Overrides {
    pub const fn complete(&self) -> Option<Settings> {
        match (self.rotation_speed, self.interval_time) {
            (Some(rotation_speed), Some(interval_time)) => {
                Some(Settings::new(rotation_speed, interval_time))
            }
            _ => None,
        }
    }

    pub fn apply(&self, base: Settings) -> Settings {
        Settings {
            rotation_speed: self.rotation_speed.unwrap_or(base.rotation_speed),
            interval_time: self.interval_time.unwrap_or(base.interval_time),
        }
    }
}

/// `rotation_speed: 42%` / `interval_time: 7s`, one per line
pub fn format_settings(settings: &Settings) -> String {
    Setting::ALL
        .iter()
        .map(|s| format!("{s}: {}", s.unit().format(settings.get(*s))))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn fetch_settings<T: Transport>(client: &PanelClient<T>) -> Result<Settings> {
    client
        .fetch_settings()
        .await
        .context("Failed to load settings")
}

/// Settings to send: the overrides, completed from `/get_settings` if needed.
/// Both values are always sent, like the panel does.
pub async fn resolve_settings<T: Transport>(
    client: &PanelClient<T>,
    overrides: Overrides,
) -> Result<Settings> {
    if let Some(settings) = overrides.complete() {
        return Ok(settings);
    }

    let current = fetch_settings(client).await?;
    debug!(?current, "filling missing values from device");
    Ok(overrides.apply(current))
}

pub async fn run_command<T: Transport>(client: &PanelClient<T>, command: Command) -> Result<()> {
    client
        .send(&command)
        .await
        .context(command.failure_message())?;
    info!("{}", command.success_message());
    Ok(())
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Display unit for a setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Seconds,
}

impl Unit {
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Seconds => "s",
        }
    }

    /// Format a value with this unit's suffix, e.g. `42%` or `7s`
    pub fn format(self, value: impl fmt::Display) -> String {
        format!("{value}{}", self.suffix())
    }
}

/// One of the two device settings exposed by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    RotationSpeed, // rotation_speed, percent of max speed
    IntervalTime,  // interval_time, seconds between direction changes
}

impl Setting {
    pub const ALL: [Self; 2] = [Self::RotationSpeed, Self::IntervalTime];

    /// Wire name, used as JSON field, form key and input element id
    pub const fn key(self) -> &'static str {
        match self {
            Self::RotationSpeed => "rotation_speed",
            Self::IntervalTime => "interval_time",
        }
    }

    /// Id of the element mirroring the input's value
    pub const fn display_id(self) -> &'static str {
        match self {
            Self::RotationSpeed => "rotation_speed_disp",
            Self::IntervalTime => "interval_time_disp",
        }
    }

    pub const fn unit(self) -> Unit {
        match self {
            Self::RotationSpeed => Unit::Percent,
            Self::IntervalTime => Unit::Seconds,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Device settings as exchanged with `/get_settings`, `/update` and `/save`.
///
/// No bounds are enforced here; the device decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub rotation_speed: i64,
    pub interval_time: i64,
}

impl Settings {
    pub const fn new(rotation_speed: i64, interval_time: i64) -> Self {
        Self {
            rotation_speed,
            interval_time,
        }
    }

    /// Build settings from raw control values (as read from the inputs)
    pub fn from_raw(rotation_speed: &str, interval_time: &str) -> Result<Self, ProtocolError> {
        Ok(Self {
            rotation_speed: parse_value(Setting::RotationSpeed, rotation_speed)?,
            interval_time: parse_value(Setting::IntervalTime, interval_time)?,
        })
    }

    /// Parse the JSON body returned by `/get_settings`
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(|e| ProtocolError::Json(e.to_string()))
    }

    pub const fn get(&self, setting: Setting) -> i64 {
        match setting {
            Setting::RotationSpeed => self.rotation_speed,
            Setting::IntervalTime => self.interval_time,
        }
    }

    /// `application/x-www-form-urlencoded` body: `rotation_speed=<v>&interval_time=<v>`.
    ///
    /// Both values are plain integers, so nothing needs escaping.
    pub fn to_form_body(&self) -> String {
        format!(
            "{}={}&{}={}",
            Setting::RotationSpeed.key(),
            self.rotation_speed,
            Setting::IntervalTime.key(),
            self.interval_time
        )
    }
}

fn parse_value(setting: Setting, raw: &str) -> Result<i64, ProtocolError> {
    raw.trim()
        .parse()
        .map_err(|_| ProtocolError::InvalidValue {
            key: setting.key(),
            value: raw.to_string(),
        })
}

//! Runtime settings of one physical unit, persisted as TOML.
//!
//! Geometry lives in [`super::config`]; what differs between units (servo
//! calibration, wiring, timing) lives here.
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::robot::{config::MAX_SWITCH_STEPS, joint::Joint, leg::Leg, leg::LEG_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between two ticks, in milliseconds.
    pub step_delay_ms: u64,
    /// Number of interpolation steps when switching modes.
    pub switch_steps: usize,
    /// Time given to the servos to reach the default pose at startup.
    pub settle_delay_ms: u64,
    /// Actuation channel of every joint.
    pub channel_map: [[u8; 3]; LEG_COUNT],
    /// Pulse width, in microseconds, that holds each joint at its zero angle.
    pub calibration: [[u32; 3]; LEG_COUNT],
    pub sweep: SweepSettings,
}

/// Bounds and pace of the diagnostic sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    pub center_us: u32,
    pub amplitude_us: u32,
    pub step_us: u32,
    pub period_ms: u64,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            center_us: 1500,
            amplitude_us: 500,
            step_us: 100,
            period_ms: 1000,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let mut channel_map = [[0; 3]; LEG_COUNT];
        for (leg, channels) in channel_map.iter_mut().enumerate() {
            for (joint, channel) in channels.iter_mut().enumerate() {
                *channel = (leg * 3 + joint) as u8;
            }
        }

        Self {
            step_delay_ms: 20,
            switch_steps: 10,
            settle_delay_ms: 1000,
            channel_map,
            calibration: [[1500; 3]; LEG_COUNT],
            sweep: SweepSettings::default(),
        }
    }
}

impl Settings {
    pub fn channel(&self, leg: Leg, joint: Joint) -> u8 {
        self.channel_map[leg][joint as usize]
    }

    pub fn calibration(&self, leg: Leg, joint: Joint) -> u32 {
        self.calibration[leg][joint as usize]
    }

    pub fn set_calibration(&mut self, leg: Leg, joint: Joint, value_us: u32) {
        self.calibration[leg][joint as usize] = value_us;
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.switch_steps == 0 || self.switch_steps > MAX_SWITCH_STEPS {
            return Err(SettingsError::Invalid("switch_steps must be within 1..=64"));
        }
        if self.step_delay_ms == 0 || self.sweep.period_ms == 0 {
            return Err(SettingsError::Invalid("delays must be positive"));
        }
        if self.sweep.step_us == 0 || self.sweep.amplitude_us > self.sweep.center_us {
            return Err(SettingsError::Invalid("sweep bounds are inconsistent"));
        }
        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        let settings: Settings = basic_toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(basic_toml::to_string(self)?)
    }

    /// Loads the settings file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let settings = Self::from_toml(&contents)?;
                info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.channel(Leg::FrontRight, Joint::Tibia), 17);
        assert_eq!(settings.calibration(Leg::RearLeft, Joint::Femur), 1500);
    }

    #[test]
    fn toml_survives_a_save_and_reload() {
        let mut settings = Settings::default();
        settings.set_calibration(Leg::MiddleRight, Joint::Coxa, 1432);
        settings.switch_steps = 12;

        let text = settings.to_toml().unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::from_toml("step_delay_ms = 35\n").unwrap();
        assert_eq!(settings.step_delay_ms, 35);
        assert_eq!(settings.switch_steps, 10);
        assert_eq!(settings.sweep, SweepSettings::default());
    }

    #[test]
    fn rejects_oversized_transitions() {
        let err = Settings::from_toml("switch_steps = 65\n").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(Settings::from_toml("switch_steps = 0\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("hexapod-gait-settings-that-does-not-exist.toml");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }
}

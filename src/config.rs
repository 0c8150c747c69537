//! Locomotion tunables and loading them from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables read by the locomotion states. Every field is optional in JSON;
/// missing fields take their [`Default`] value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Speed gained per second at full axis deflection.
    pub base_acceleration: f32,
    /// Symmetric bound on `|speed|` while running.
    pub max_speed: f32,
    /// Reversing input above this `|speed|` skids instead of turning.
    pub skid_speed_threshold: f32,
    /// Seconds a skid takes to resolve.
    pub skid_duration: f32,
    /// Grace period with no input before Run gives way to Stop.
    pub stop_delay: f32,
    /// Speed lost per second while stopping.
    pub stop_friction: f32,
    /// Run frame hold at zero speed. Shrinks toward 0 at max speed.
    pub walk_anim_frame_interval: f32,
    /// Downward acceleration while airborne.
    pub airborne_gravity: f32,
    /// Extra reach of the ground and sweep probes past the character radius.
    pub probe_skin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_acceleration: 12.0,
            max_speed: 8.0,
            skid_speed_threshold: 3.0,
            skid_duration: 0.25,
            stop_delay: 0.1,
            stop_friction: 20.0,
            walk_anim_frame_interval: 0.2,
            airborne_gravity: 9.81,
            probe_skin: 0.05,
        }
    }
}

impl Tuning {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("base_acceleration", self.base_acceleration),
            ("max_speed", self.max_speed),
            ("skid_speed_threshold", self.skid_speed_threshold),
            ("skid_duration", self.skid_duration),
            ("stop_delay", self.stop_delay),
            ("stop_friction", self.stop_friction),
            ("walk_anim_frame_interval", self.walk_anim_frame_interval),
            ("airborne_gravity", self.airborne_gravity),
            ("probe_skin", self.probe_skin),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be negative",
                });
            }
        }
        for (field, value) in [
            ("max_speed", self.max_speed),
            ("skid_duration", self.skid_duration),
            ("stop_friction", self.stop_friction),
        ] {
            if value == 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive",
                });
            }
        }
        Ok(())
    }
}

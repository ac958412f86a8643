use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::error::ConfigError;

/// Tuning constants for one character. Set once at construction and held
/// constant for the driver's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Planar speed in units per second while the move gate is open.
    pub move_speed: f32,
    /// Exponential facing-blend rate; `rotation_speed * dt` is the slerp
    /// fraction per tick, clamped to 1.
    pub rotation_speed: f32,
    /// Steer in the camera's horizontal frame instead of world axes.
    pub camera_relative: bool,
    /// Smoothing time constant handed to the animation sink.
    pub anim_damp: f32,
    pub move_deadzone: f32,
    pub look_deadzone: f32,
    /// Move/facing alignment below which motion counts as backward.
    #[serde(default = "default_backward_alignment")]
    pub backward_alignment: f32,
    /// Squared stick magnitude below which a sample means "no intent".
    #[serde(default = "default_near_zero")]
    pub near_zero: f32,
}

fn default_backward_alignment() -> f32 {
    -0.35
}

fn default_near_zero() -> f32 {
    1e-4
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            rotation_speed: 10.0,
            camera_relative: true,
            anim_damp: 0.1,
            move_deadzone: 0.12,
            look_deadzone: 0.12,
            backward_alignment: default_backward_alignment(),
            near_zero: default_near_zero(),
        }
    }
}

impl LocomotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("rotation_speed", self.rotation_speed),
            ("anim_damp", self.anim_damp),
            ("move_deadzone", self.move_deadzone),
            ("look_deadzone", self.look_deadzone),
            ("backward_alignment", self.backward_alignment),
            ("near_zero", self.near_zero),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }

        if self.move_speed < 0.0 {
            return Err(ConfigError::Negative("move_speed", self.move_speed));
        }
        if self.rotation_speed < 0.0 {
            return Err(ConfigError::Negative("rotation_speed", self.rotation_speed));
        }
        if self.anim_damp < 0.0 {
            return Err(ConfigError::Negative("anim_damp", self.anim_damp));
        }
        if !(0.0..=1.0).contains(&self.move_deadzone) {
            return Err(ConfigError::OutOfRange(
                "move_deadzone",
                0.0,
                1.0,
                self.move_deadzone,
            ));
        }
        if !(0.0..=1.0).contains(&self.look_deadzone) {
            return Err(ConfigError::OutOfRange(
                "look_deadzone",
                0.0,
                1.0,
                self.look_deadzone,
            ));
        }
        if !(-1.0..=1.0).contains(&self.backward_alignment) {
            return Err(ConfigError::OutOfRange(
                "backward_alignment",
                -1.0,
                1.0,
                self.backward_alignment,
            ));
        }
        if self.near_zero <= 0.0 {
            return Err(ConfigError::NotPositive("near_zero", self.near_zero));
        }

        Ok(())
    }
}

pub fn load_or_create_config() -> Result<LocomotionConfig> {
    let config_path = get_config_path()?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    if !config_path.exists() {
        let default_config = LocomotionConfig::default();
        let toml_content = toml::to_string_pretty(&default_config)?;
        std::fs::write(&config_path, toml_content).context("Failed to write default config")?;
        return Ok(default_config);
    }

    let content = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    toml::from_str(&content).context("Failed to parse config file")
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("dev", "strider", "strider").context("Couldn't determine project directory")?;
    Ok(proj_dirs.config_dir().join("locomotion.toml"))
}

//! Tuning конфигурация персонажей, AI и контроллера игрока
//!
//! Значения по умолчанию = shipping тюнинг.
//! Загружается из JSON (`SimulationConfig::from_json_str`), валидируется
//! ОДИН раз при конструкции: в runtime ошибок конфигурации нет.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибка конфигурации (construction-time, не восстанавливается в runtime)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field}: min {min} is greater than max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("action layer mask is empty")]
    EmptyActionLayers,
}

/// Параметры одного gait (walk / run / crouch-walk)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct GaitParams {
    pub max_velocity: f32,
    pub acceleration: f32,
}

impl GaitParams {
    pub const fn new(max_velocity: f32, acceleration: f32) -> Self {
        Self {
            max_velocity,
            acceleration,
        }
    }
}

/// Множители громкости шагов по gait
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct StepSoundFactors {
    pub crouch: f32,
    pub walk: f32,
    pub run: f32,
}

impl Default for StepSoundFactors {
    fn default() -> Self {
        Self {
            crouch: 0.5,
            walk: 1.0,
            run: 2.0,
        }
    }
}

/// Тюнинг персонажа (общий для игрока и AI)
///
/// Component: каждый персонаж несёт свою копию (разные gait у разных врагов).
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct CharacterConfig {
    pub walk: GaitParams,
    pub run: GaitParams,
    pub crouch: GaitParams,
    pub step_sounds: StepSoundFactors,
    /// Интервал navigation cadence (секунды)
    pub path_finding_interval: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            walk: GaitParams::new(3.0, 1.0),
            run: GaitParams::new(7.0, 2.0),
            crouch: GaitParams::new(2.0, 1.0),
            step_sounds: StepSoundFactors::default(),
            path_finding_interval: 0.25,
        }
    }
}

impl CharacterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, gait) in [
            ("walk", &self.walk),
            ("run", &self.run),
            ("crouch", &self.crouch),
        ] {
            ensure_positive(field, gait.max_velocity)?;
            ensure_positive(field, gait.acceleration)?;
        }
        ensure_positive("path_finding_interval", self.path_finding_interval)
    }
}

/// Тюнинг first-person контроллера игрока
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct PlayerControllerConfig {
    pub min_vertical_angle: f32,
    pub max_vertical_angle: f32,
    pub spine_min_vertical_angle: f32,
    pub spine_max_vertical_angle: f32,
    pub spine_crouch_min_vertical_angle: f32,
    pub spine_crouch_max_vertical_angle: f32,
    pub camera_sensitivity: f32,
    /// Высота камеры над origin тела (метры)
    pub eye_height: f32,
    /// Битовая маска actionable слоёв (rapier `Group` bits)
    pub action_layers: u32,
    pub action_distance: f32,
    pub action_check_interval: f32,
}

impl Default for PlayerControllerConfig {
    fn default() -> Self {
        Self {
            min_vertical_angle: -75.0,
            max_vertical_angle: 75.0,
            spine_min_vertical_angle: -50.0,
            spine_max_vertical_angle: 50.0,
            spine_crouch_min_vertical_angle: -50.0,
            spine_crouch_max_vertical_angle: 20.0,
            camera_sensitivity: 2.0,
            eye_height: 1.6,
            action_layers: crate::collision_layers::ACTIONABLE_LAYERS,
            action_distance: 10.0,
            action_check_interval: 0.3,
        }
    }
}

impl PlayerControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_range(
            "vertical_angle",
            self.min_vertical_angle,
            self.max_vertical_angle,
        )?;
        ensure_range(
            "spine_vertical_angle",
            self.spine_min_vertical_angle,
            self.spine_max_vertical_angle,
        )?;
        ensure_range(
            "spine_crouch_vertical_angle",
            self.spine_crouch_min_vertical_angle,
            self.spine_crouch_max_vertical_angle,
        )?;
        ensure_positive("camera_sensitivity", self.camera_sensitivity)?;
        ensure_positive("action_distance", self.action_distance)?;
        ensure_positive("action_check_interval", self.action_check_interval)?;
        if self.action_layers == 0 {
            return Err(ConfigError::EmptyActionLayers);
        }
        Ok(())
    }
}

/// Тюнинг AI охранника
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct GuardConfig {
    /// Радиус слуха при intensity = 1.0 (метры)
    pub hearing_range: f32,
    /// Investigate завершается ближе этого радиуса к источнику (метры)
    pub arrive_radius: f32,
    /// Сколько секунд без нового sight mark до потери цели
    pub chase_memory: f32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            hearing_range: 8.0,
            arrive_radius: 1.5,
            chase_memory: 4.0,
        }
    }
}

impl GuardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("hearing_range", self.hearing_range)?;
        ensure_positive("arrive_radius", self.arrive_radius)?;
        ensure_positive("chase_memory", self.chase_memory)
    }
}

/// Полная конфигурация симуляции
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct SimulationConfig {
    pub character: CharacterConfig,
    pub guard: GuardConfig,
    pub player: PlayerControllerConfig,
}

impl SimulationConfig {
    /// Парсит JSON (отсутствующие поля → defaults) и валидирует
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.character.validate()?;
        self.guard.validate()?;
        self.player.validate()
    }
}

fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn ensure_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { field, min, max })
    }
}

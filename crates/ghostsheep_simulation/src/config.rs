//! Конфигурация симуляции (TOML → SimulationConfig resource)
//!
//! Все поля опциональны в файле (`#[serde(default)]`), отсутствующие берутся из Default.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::components::ArenaBounds;
use crate::logger::LogLevel;
use crate::scoring::BalancePolicy;
use crate::steering::SteeringParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid delay range `{name}`: min {min} > max {max} (or negative)")]
    InvalidRange { name: &'static str, min: f32, max: f32 },

    #[error("`{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("`{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("collectible bounds are inverted or not finite")]
    InvalidBounds,
}

/// NaN/inf проходят сравнения молча, поэтому проверяются отдельно
fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

/// Диапазон случайной задержки (секунды симуляции), границы включительно
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_secs: f32,
    pub max_secs: f32,
}

impl DelayRange {
    pub const fn new(min_secs: f32, max_secs: f32) -> Self {
        Self { min_secs, max_secs }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        finite(name, self.min_secs as f64)?;
        finite(name, self.max_secs as f64)?;
        if self.min_secs < 0.0 || self.min_secs > self.max_secs {
            return Err(ConfigError::InvalidRange {
                name,
                min: self.min_secs,
                max: self.max_secs,
            });
        }
        Ok(())
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

/// Параметры collectibles (респавн + арена)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleConfig {
    pub respawn: DelayRange,
    pub bounds: ArenaBounds,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Частота FixedUpdate (Hz)
    pub tick_hz: f64,
    /// Seed для DeterministicRng
    pub seed: u64,
    pub log_level: LogLevel,
    /// Интервал между сменой sheep ↔ ghost
    pub mode_switch: DelayRange,
    /// Дефолтные steering параметры для новых агентов
    pub steering: SteeringParams,
    pub collectibles: CollectibleConfig,
    /// Политика списания очков ниже нуля
    pub ledger: BalancePolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            seed: 42,
            log_level: LogLevel::Info,
            mode_switch: DelayRange::default(),
            steering: SteeringParams::default(),
            collectibles: CollectibleConfig::default(),
            ledger: BalancePolicy::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("tick_hz", self.tick_hz)?;
        finite("steering.max_accel", self.steering.max_accel as f64)?;
        finite("steering.engagement_radius", self.steering.engagement_radius as f64)?;

        if !(self.tick_hz > 0.0) {
            return Err(ConfigError::NonPositive { name: "tick_hz", value: self.tick_hz });
        }
        if !(self.steering.max_accel > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "steering.max_accel",
                value: self.steering.max_accel as f64,
            });
        }
        if self.steering.engagement_radius < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "steering.engagement_radius",
                value: self.steering.engagement_radius as f64,
            });
        }
        self.mode_switch.validate("mode_switch")?;
        self.collectibles.respawn.validate("collectibles.respawn")?;
        if !self.collectibles.bounds.is_valid() {
            return Err(ConfigError::InvalidBounds);
        }
        Ok(())
    }

    /// Длина одного тика в секундах
    pub fn tick_secs(&self) -> f64 {
        1.0 / self.tick_hz
    }
}

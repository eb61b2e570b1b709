//! LayingDown configuration resource

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::components::LayingDown;

pub const DEFAULT_DOWNED_SPEED_MULTIPLIER: f32 = 0.15;
pub const DEFAULT_COOLDOWN_SECS: f32 = 2.5;

/// Настройки для новых `LayingDown` компонентов
///
/// LayingDownPlugin использует `init_resource`, так что host может вставить
/// свой конфиг до плагина (например загруженный из JSON).
/// Применяется к компоненту в тик его добавления (`apply_laying_down_config`).
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayingDownConfig {
    /// Множитель скорости лёжа (0.15 = 15% от обычной скорости)
    pub downed_speed_multiplier: f32,
    /// Cooldown между успешными toggle (секунды)
    pub cooldown_secs: f32,
}

impl Default for LayingDownConfig {
    fn default() -> Self {
        Self {
            downed_speed_multiplier: DEFAULT_DOWNED_SPEED_MULTIPLIER,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
        }
    }
}

impl LayingDownConfig {
    /// Cooldown как Duration (невалидные значения → ноль, см. `validate`)
    pub fn cooldown(&self) -> Duration {
        Duration::try_from_secs_f32(self.cooldown_secs).unwrap_or(Duration::ZERO)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let multiplier = self.downed_speed_multiplier;
        if !multiplier.is_finite() || !(0.0..=1.0).contains(&multiplier) {
            return Err(ConfigError::InvalidSpeedMultiplier(multiplier));
        }

        if !self.cooldown_secs.is_finite() || self.cooldown_secs < 0.0 {
            return Err(ConfigError::InvalidCooldown(self.cooldown_secs));
        }

        Ok(())
    }
}

/// Система: новый LayingDown получает множитель и cooldown из конфига
///
/// `next_toggle_attempt` не трогаем. Per-entity тюнинг — после добавления.
pub fn apply_laying_down_config(
    config: Res<LayingDownConfig>,
    mut added: Query<&mut LayingDown, Added<LayingDown>>,
) {
    for mut laying_down in added.iter_mut() {
        laying_down.downed_speed_multiplier = config.downed_speed_multiplier;
        laying_down.cooldown = config.cooldown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LayingDownConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cooldown(), Duration::from_millis(2500));
    }

    #[test]
    fn test_multiplier_out_of_range() {
        let config = LayingDownConfig {
            downed_speed_multiplier: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeedMultiplier(1.5)));

        let config = LayingDownConfig {
            downed_speed_multiplier: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeedMultiplier(_))));
    }

    #[test]
    fn test_negative_cooldown() {
        let config = LayingDownConfig {
            cooldown_secs: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidCooldown(-1.0)));
        assert_eq!(config.cooldown(), Duration::ZERO);
    }

    #[test]
    fn test_config_from_json_with_defaults() {
        let config: LayingDownConfig =
            serde_json::from_str(r#"{ "cooldown_secs": 1.0 }"#).unwrap();

        assert_eq!(config.cooldown(), Duration::from_secs(1));
        assert_eq!(config.downed_speed_multiplier, DEFAULT_DOWNED_SPEED_MULTIPLIER);
        assert!(config.validate().is_ok());
    }
}

//! Rejection / config errors

use std::time::Duration;

use thiserror::Error;

/// Почему toggle отклонён (не ошибка симуляции — обычный отказ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToggleRejection {
    #[error("toggle on cooldown for another {remaining:?}")]
    Cooldown { remaining: Duration },

    #[error("cannot lie down without a surface")]
    NoSurface,

    #[error("standing state refused the transition")]
    Refused,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("downed speed multiplier must be within [0, 1], got {0}")]
    InvalidSpeedMultiplier(f32),

    #[error("cooldown must be a non-negative number of seconds, got {0}")]
    InvalidCooldown(f32),
}

//! LayingDown компонент: cooldown переключения позы и замедление лёжа

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::laying_down::LayingDownConfig;

/// Per-entity настройки toggle позы
///
/// Инвариант: `next_toggle_attempt` только растёт и только при успешном toggle.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct LayingDown {
    /// Множитель скорости (forward и backward) пока entity лежит
    pub downed_speed_multiplier: f32,

    /// Минимальный интервал между успешными toggle
    pub cooldown: Duration,

    /// Время симуляции, начиная с которого toggle снова разрешён
    pub next_toggle_attempt: Duration,
}

impl Default for LayingDown {
    fn default() -> Self {
        Self::from_config(&LayingDownConfig::default())
    }
}

impl LayingDown {
    pub fn from_config(config: &LayingDownConfig) -> Self {
        Self {
            downed_speed_multiplier: config.downed_speed_multiplier,
            cooldown: config.cooldown(),
            next_toggle_attempt: Duration::ZERO,
        }
    }

    /// Cooldown истёк (граница включительно: `next == now` разрешено)
    pub fn cooldown_ready(&self, now: Duration) -> bool {
        self.next_toggle_attempt <= now
    }

    /// Сколько осталось до конца cooldown (ноль если готов)
    pub fn cooldown_remaining(&self, now: Duration) -> Duration {
        self.next_toggle_attempt.saturating_sub(now)
    }

    /// Запустить cooldown после успешного toggle
    pub fn start_cooldown(&mut self, now: Duration) {
        self.next_toggle_attempt = self.next_toggle_attempt.max(now + self.cooldown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laying_down_default() {
        let laying_down = LayingDown::default();
        assert_eq!(laying_down.downed_speed_multiplier, 0.15);
        assert_eq!(laying_down.cooldown, Duration::from_millis(2500));
        assert_eq!(laying_down.next_toggle_attempt, Duration::ZERO);
        assert!(laying_down.cooldown_ready(Duration::ZERO));
    }

    #[test]
    fn test_cooldown_boundary_is_inclusive() {
        let mut laying_down = LayingDown::default();
        laying_down.start_cooldown(Duration::from_secs(1));

        let next = Duration::from_millis(3500);
        assert_eq!(laying_down.next_toggle_attempt, next);
        assert!(!laying_down.cooldown_ready(next - Duration::from_millis(1)));
        assert!(laying_down.cooldown_ready(next));
    }

    #[test]
    fn test_cooldown_remaining() {
        let mut laying_down = LayingDown::default();
        laying_down.start_cooldown(Duration::ZERO);

        assert_eq!(
            laying_down.cooldown_remaining(Duration::from_secs(1)),
            Duration::from_millis(1500)
        );
        assert_eq!(laying_down.cooldown_remaining(Duration::from_secs(10)), Duration::ZERO);
    }

    #[test]
    fn test_start_cooldown_never_moves_backwards() {
        let mut laying_down = LayingDown::default();
        laying_down.start_cooldown(Duration::from_secs(10));
        let next = laying_down.next_toggle_attempt;

        laying_down.start_cooldown(Duration::from_secs(1));
        assert_eq!(laying_down.next_toggle_attempt, next);
    }
}

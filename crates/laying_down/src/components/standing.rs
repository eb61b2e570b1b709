//! Standing компоненты: поза (стоит / лежит) и внешние блокировки позы

use bevy::prelude::*;

/// Поза entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Posture {
    Standing,
    Down,
}

impl Posture {
    /// Противоположная поза (цель toggle)
    pub fn toggled(self) -> Self {
        match self {
            Posture::Standing => Posture::Down,
            Posture::Down => Posture::Standing,
        }
    }
}

/// Состояние позы (capability: стоит или лежит)
///
/// Мутируется только через `StandingStates` (system param),
/// который отправляет `Stood` / `Downed` события.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct StandingState {
    pub standing: bool,
}

impl Default for StandingState {
    fn default() -> Self {
        Self::standing()
    }
}

impl StandingState {
    pub fn standing() -> Self {
        Self { standing: true }
    }

    pub fn down() -> Self {
        Self { standing: false }
    }

    pub fn is_standing(&self) -> bool {
        self.standing
    }

    pub fn is_down(&self) -> bool {
        !self.standing
    }

    pub fn posture(&self) -> Posture {
        if self.standing {
            Posture::Standing
        } else {
            Posture::Down
        }
    }
}

/// Внешнее ограничение позы (наручники, стяжки, оглушение)
///
/// Capability отказывает в не-forced переходах, которые заблокированы.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PostureLock {
    /// Запрещает вставать (если не force)
    pub blocks_stand: bool,
    /// Запрещает ложиться
    pub blocks_down: bool,
}

impl PostureLock {
    /// Restraint: лежащий не может встать сам
    pub fn restrained() -> Self {
        Self {
            blocks_stand: true,
            blocks_down: false,
        }
    }
}

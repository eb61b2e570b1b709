//! Movement компоненты: базовая скорость и модификаторы скорости

use bevy::prelude::*;

/// Пара множителей скорости (forward, backward)
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct SpeedModifiers {
    pub forward: f32,
    pub backward: f32,
}

impl Default for SpeedModifiers {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl SpeedModifiers {
    pub const IDENTITY: Self = Self {
        forward: 1.0,
        backward: 1.0,
    };

    pub fn scale(&mut self, forward: f32, backward: f32) {
        self.forward *= forward;
        self.backward *= backward;
    }
}

/// Скорость движения актора с агрегированными модификаторами
///
/// Модификаторы пересчитываются пайплайном (`movement::systems`):
/// 1. Collect — `RefreshMovementSpeedModifiers` открывает проход (`pending = IDENTITY`)
/// 2. Contribute — системы-контрибьюторы вызывают `modify_speed`
/// 3. Apply — `pending` становится текущими модификаторами
///
/// Каждый проход стартует с IDENTITY, поэтому пересчёт идемпотентен.
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct MovementSpeedModifier {
    /// Базовая скорость вперёд (м/с)
    pub base_forward_speed: f32,
    /// Базовая скорость назад (м/с)
    pub base_backward_speed: f32,

    /// Текущие модификаторы (результат последнего прохода)
    pub modifiers: SpeedModifiers,

    /// Аккумулятор текущего прохода (None если пересчёт не запрошен)
    pending: Option<SpeedModifiers>,
}

impl Default for MovementSpeedModifier {
    fn default() -> Self {
        Self::new(2.5, 4.5)
    }
}

impl MovementSpeedModifier {
    pub fn new(base_forward_speed: f32, base_backward_speed: f32) -> Self {
        Self {
            base_forward_speed,
            base_backward_speed,
            modifiers: SpeedModifiers::IDENTITY,
            pending: None,
        }
    }

    pub fn forward_speed(&self) -> f32 {
        self.base_forward_speed * self.modifiers.forward
    }

    pub fn backward_speed(&self) -> f32 {
        self.base_backward_speed * self.modifiers.backward
    }

    /// Идёт ли сейчас проход пересчёта
    pub fn is_refreshing(&self) -> bool {
        self.pending.is_some()
    }

    /// Открыть проход пересчёта (повторный вызов в том же проходе — no-op)
    pub fn begin_refresh(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(SpeedModifiers::IDENTITY);
        }
    }

    /// Вклад контрибьютора в текущий проход
    pub fn modify_speed(&mut self, forward: f32, backward: f32) {
        if let Some(pending) = self.pending.as_mut() {
            pending.scale(forward, backward);
        }
    }

    /// Закрыть проход: аккумулятор → текущие модификаторы
    pub fn finish_refresh(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.modifiers = pending;
        }
    }
}

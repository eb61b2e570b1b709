//! Movement events

use bevy::prelude::*;

/// Event: запрос пересчёта модификаторов скорости entity
///
/// Генерируется:
/// - Реакциями на смену позы (Stood / Downed)
/// - Любой системой, чей вклад в скорость изменился
///
/// Обрабатывается:
/// - collect_speed_refresh_requests (открывает проход пересчёта)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshMovementSpeedModifiers {
    pub entity: Entity,
}

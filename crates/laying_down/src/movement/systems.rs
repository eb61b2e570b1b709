//! Speed modifier pipeline systems.
//!
//! Порядок (chain в LayingDownPlugin):
//! 1. collect_speed_refresh_requests — RefreshMovementSpeedModifiers → begin_refresh
//! 2. контрибьюторы — modify_speed (например contribute_laying_down_speed)
//! 3. apply_speed_modifiers — finish_refresh

use bevy::prelude::*;

use crate::components::MovementSpeedModifier;
use super::events::RefreshMovementSpeedModifiers;

/// Система: открыть проход пересчёта для каждого запрошенного entity
///
/// Entity без MovementSpeedModifier пропускаются (нечего пересчитывать).
pub fn collect_speed_refresh_requests(
    mut requests: EventReader<RefreshMovementSpeedModifiers>,
    mut speeds: Query<&mut MovementSpeedModifier>,
) {
    for request in requests.read() {
        if let Ok(mut speed) = speeds.get_mut(request.entity) {
            speed.begin_refresh();
        }
    }
}

/// Система: закрыть открытые проходы (аккумулятор → текущие модификаторы)
pub fn apply_speed_modifiers(mut speeds: Query<&mut MovementSpeedModifier>) {
    for mut speed in speeds.iter_mut() {
        if speed.is_refreshing() {
            speed.finish_refresh();
        }
    }
}

//! Speed modifier contributor: замедление пока entity лежит.

use bevy::prelude::*;

use crate::components::{LayingDown, MovementSpeedModifier, StandingState};
use crate::movement::RefreshMovementSpeedModifiers;
use crate::standing::{Downed, Stood};

/// Система: Stood / Downed → запрос пересчёта скорости
///
/// Плюс новые entity (LayingDown или MovementSpeedModifier только что добавлены):
/// заспавненный лёжа должен сразу получить замедление.
/// Чистое делегирование — локальное состояние не меняется.
pub fn refresh_speed_on_posture_change(
    mut stood: EventReader<Stood>,
    mut downed: EventReader<Downed>,
    added: Query<
        Entity,
        (
            With<LayingDown>,
            Or<(Added<LayingDown>, Added<MovementSpeedModifier>)>,
        ),
    >,
    laying_down: Query<(), With<LayingDown>>,
    mut refresh: EventWriter<RefreshMovementSpeedModifiers>,
) {
    let changed = stood
        .read()
        .map(|event| event.entity)
        .chain(downed.read().map(|event| event.entity))
        .chain(added.iter());

    for entity in changed {
        if laying_down.contains(entity) {
            refresh.write(RefreshMovementSpeedModifiers { entity });
        }
    }
}

/// Система: вклад LayingDown в проход пересчёта скорости
///
/// Стоит (или нет StandingState) → без вклада.
/// Лежит → forward и backward × `downed_speed_multiplier`.
pub fn contribute_laying_down_speed(
    mut query: Query<(&LayingDown, Option<&StandingState>, &mut MovementSpeedModifier)>,
) {
    for (laying_down, standing, mut speed) in query.iter_mut() {
        if !speed.is_refreshing() {
            continue;
        }

        if standing.is_none_or(StandingState::is_standing) {
            continue;
        }

        let multiplier = laying_down.downed_speed_multiplier;
        speed.modify_speed(multiplier, multiplier);
    }
}

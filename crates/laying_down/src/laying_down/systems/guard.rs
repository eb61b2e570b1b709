//! Attachment guard: лежащий entity без поверхности встаёт.

use bevy::prelude::*;

use crate::components::{LayingDown, SpatialParent};
use crate::spatial::ParentChanged;
use crate::standing::StandingStates;

/// Система: ParentChanged → поднять entity, если он лежит не на поверхности
///
/// Пропускаем если: нет StandingState, уже стоит, или всё ещё на grid.
/// Корректирующий переход: без popup, cooldown не трогаем, результат stand игнорируем.
pub fn stand_when_detached(
    mut parent_changes: EventReader<ParentChanged>,
    actors: Query<Option<&SpatialParent>, With<LayingDown>>,
    mut standing: StandingStates,
) {
    for change in parent_changes.read() {
        let Ok(spatial) = actors.get(change.entity) else {
            continue;
        };

        if standing.is_down(change.entity) != Some(true) {
            continue;
        }

        if spatial.is_some_and(SpatialParent::on_surface) {
            continue;
        }

        let stood = standing.stand(change.entity, false);
        crate::logger::log(&format!(
            "{:?} left its surface while down (parent {:?} → {:?}), stand: {}",
            change.entity, change.old_parent, change.new_parent, stood
        ));
    }
}

//! Spatial domain — смена пространственного родителя
//!
//! Host (transform слой) мутирует `SpatialParent::set_parent`,
//! track_spatial_parent_changes превращает изменение в `ParentChanged`.

use bevy::prelude::*;

use crate::components::SpatialParent;

/// Event: у entity сменился пространственный родитель
///
/// Примеры: подняли в руки, положили в контейнер, телепортировали, отцепили от grid.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentChanged {
    pub entity: Entity,
    pub old_parent: Option<Entity>,
    pub new_parent: Option<Entity>,
}

/// Система: Changed<SpatialParent> → ParentChanged
///
/// Срабатывает и на добавление компонента (родитель появился "из ниоткуда"),
/// и на удаление (`new_parent: None`, старый родитель уже неизвестен).
pub fn track_spatial_parent_changes(
    changed: Query<(Entity, &SpatialParent), Changed<SpatialParent>>,
    mut removed: RemovedComponents<SpatialParent>,
    mut parent_changes: EventWriter<ParentChanged>,
) {
    for (entity, spatial) in changed.iter() {
        parent_changes.write(ParentChanged {
            entity,
            old_parent: spatial.previous_parent(),
            new_parent: spatial.parent,
        });
    }

    for entity in removed.read() {
        parent_changes.write(ParentChanged {
            entity,
            old_parent: None,
            new_parent: None,
        });
    }
}

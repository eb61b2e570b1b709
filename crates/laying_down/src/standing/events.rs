//! Standing events

use bevy::prelude::*;

/// Event: entity встал (Down → Standing)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stood {
    pub entity: Entity,
}

/// Event: entity лёг (Standing → Down)
///
/// Флаги передаются host слоям (audio, hands):
/// - `play_sound`: проиграть звук падения
/// - `drop_held_items`: выронить предметы из рук
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Downed {
    pub entity: Entity,
    pub play_sound: bool,
    pub drop_held_items: bool,
}

//! Player input: состояние клавиш → команды
//!
//! Host транспорт присылает `KeyStateEvent` (клавиша уже сопоставлена с
//! `KeyFunction` через биндинги клиента). dispatch_key_functions выдаёт
//! ровно одну команду на фронт отпущено → нажато.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::laying_down::ToggleStandingCommand;
use crate::session::{SessionId, Sessions};

/// Игровая функция, к которой привязана клавиша
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyFunction {
    ToggleStanding,
}

/// Event: состояние клавиши от клиента сессии
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStateEvent {
    pub session: SessionId,
    pub function: KeyFunction,
    pub pressed: bool,
}

/// Resource: последнее известное состояние (session, function)
#[derive(Resource, Debug, Default)]
pub struct InputEdgeTracker {
    pressed: HashMap<(SessionId, KeyFunction), bool>,
}

impl InputEdgeTracker {
    /// Записать новое состояние. `true` если это фронт отпущено → нажато.
    pub fn record(&mut self, session: SessionId, function: KeyFunction, pressed: bool) -> bool {
        let was_pressed = self.pressed.insert((session, function), pressed).unwrap_or(false);
        pressed && !was_pressed
    }

    /// Оставить клавиши только сессий, для которых `keep` вернул true
    pub fn retain_sessions(&mut self, mut keep: impl FnMut(SessionId) -> bool) {
        self.pressed.retain(|(owner, _), _| keep(*owner));
    }

    pub fn tracked_keys(&self) -> usize {
        self.pressed.len()
    }
}

/// Система: Sessions изменились → забыть клавиши отцепленных сессий
///
/// Сессия без entity всё равно не может ничего переключить.
pub fn forget_detached_sessions(sessions: Res<Sessions>, mut tracker: ResMut<InputEdgeTracker>) {
    if !sessions.is_changed() {
        return;
    }

    tracker.retain_sessions(|session| sessions.attached_entity(session).is_some());
}

/// Система: KeyStateEvent → команды (по фронту нажатия)
pub fn dispatch_key_functions(
    mut key_events: EventReader<KeyStateEvent>,
    mut tracker: ResMut<InputEdgeTracker>,
    mut toggle_commands: EventWriter<ToggleStandingCommand>,
) {
    for event in key_events.read() {
        if !tracker.record(event.session, event.function, event.pressed) {
            continue;
        }

        match event.function {
            KeyFunction::ToggleStanding => {
                toggle_commands.write(ToggleStandingCommand {
                    session: Some(event.session),
                });
            }
        }
    }
}

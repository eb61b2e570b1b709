//! LayingDown events
//!
//! - `ToggleStandingCommand` — команда игрока (input → controller)
//! - `PopupEvent` — уведомление игрокам (controller → host UI/транспорт)

use bevy::prelude::*;

use crate::components::Posture;
use crate::session::SessionId;

/// Команда: переключить позу entity, прикреплённого к сессии
///
/// `session: None` — команда без отправителя (консоль сервера и т.п.), игнорируется.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleStandingCommand {
    pub session: Option<SessionId>,
}

/// Кому показывать popup (фильтрацию видимости делает host)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupRecipients {
    /// Только этому entity
    Only(Entity),
    /// Всем наблюдателям кроме этого entity
    AllExcept(Entity),
}

/// Event: локализуемое уведомление над entity
///
/// `message` — ключ локализации, `subject` — параметр `entity` в строке.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PopupEvent {
    pub message: String,
    pub subject: Entity,
    pub recipients: PopupRecipients,
}

/// Ветка результата toggle (часть ключа popup)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleBranch {
    StandSuccess,
    StandFail,
    LaySuccess,
    LayFail,
}

impl ToggleBranch {
    pub fn new(target: Posture, success: bool) -> Self {
        match (target, success) {
            (Posture::Standing, true) => Self::StandSuccess,
            (Posture::Standing, false) => Self::StandFail,
            (Posture::Down, true) => Self::LaySuccess,
            (Posture::Down, false) => Self::LayFail,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StandSuccess => "stand-success",
            Self::StandFail => "stand-fail",
            Self::LaySuccess => "lay-success",
            Self::LayFail => "lay-fail",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::StandSuccess | Self::LaySuccess)
    }

    /// Popup для самого актора
    pub fn self_popup(&self, entity: Entity) -> PopupEvent {
        PopupEvent {
            message: format!("laying-comp-{}-self", self.as_str()),
            subject: entity,
            recipients: PopupRecipients::Only(entity),
        }
    }

    /// Popup для окружающих
    pub fn other_popup(&self, entity: Entity) -> PopupEvent {
        PopupEvent {
            message: format!("laying-comp-{}-other", self.as_str()),
            subject: entity,
            recipients: PopupRecipients::AllExcept(entity),
        }
    }
}

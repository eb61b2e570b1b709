//! Player sessions: сессия → прикреплённый entity
//!
//! Сессия (подключённый игрок) может быть без entity (наблюдатель, лобби).

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Stable ID сессии игрока (выдаётся host транспортом)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u32);

/// Resource: какие entity прикреплены к каким сессиям
#[derive(Resource, Debug, Default)]
pub struct Sessions {
    attached: HashMap<SessionId, Entity>,
}

impl Sessions {
    /// Прикрепить сессию к entity. Возвращает предыдущий entity (если был).
    pub fn attach(&mut self, session: SessionId, entity: Entity) -> Option<Entity> {
        self.attached.insert(session, entity)
    }

    pub fn detach(&mut self, session: SessionId) -> Option<Entity> {
        self.attached.remove(&session)
    }

    pub fn attached_entity(&self, session: SessionId) -> Option<Entity> {
        self.attached.get(&session).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_and_detach() {
        let mut sessions = Sessions::default();
        let session = SessionId(1);
        let entity = Entity::from_raw(3);

        assert_eq!(sessions.attached_entity(session), None);
        assert_eq!(sessions.attach(session, entity), None);
        assert_eq!(sessions.attached_entity(session), Some(entity));

        assert_eq!(sessions.detach(session), Some(entity));
        assert_eq!(sessions.attached_entity(session), None);
    }

    #[test]
    fn test_reattach_returns_previous() {
        let mut sessions = Sessions::default();
        let session = SessionId(1);

        sessions.attach(session, Entity::from_raw(3));
        assert_eq!(sessions.attach(session, Entity::from_raw(4)), Some(Entity::from_raw(3)));
    }
}

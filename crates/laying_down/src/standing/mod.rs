//! Standing domain — capability позы (стоит / лежит)
//!
//! Содержит:
//! - Stood / Downed (события смены позы)
//! - StandingStates (system param: is_down / stand / down)
//!
//! Все изменения `StandingState` идут через `StandingStates`, чтобы реакции
//! (пересчёт скорости и т.д.) всегда получали событие.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::{Posture, PostureLock, StandingState};

pub mod events;

pub use events::*;

/// Capability позы для систем
///
/// Возвращаемые `bool` — успех операции. Отказ (нет состояния, блокировка) не ошибка.
#[derive(SystemParam)]
pub struct StandingStates<'w, 's> {
    states: Query<'w, 's, (&'static mut StandingState, Option<&'static PostureLock>)>,
    stood: EventWriter<'w, Stood>,
    downed: EventWriter<'w, Downed>,
}

impl StandingStates<'_, '_> {
    /// `None` если у entity нет `StandingState` (или entity не существует)
    pub fn is_down(&self, entity: Entity) -> Option<bool> {
        self.states.get(entity).ok().map(|(state, _)| state.is_down())
    }

    pub fn posture(&self, entity: Entity) -> Option<Posture> {
        self.states.get(entity).ok().map(|(state, _)| state.posture())
    }

    /// Встать. `force` игнорирует `PostureLock::blocks_stand`.
    pub fn stand(&mut self, entity: Entity, force: bool) -> bool {
        let Ok((mut state, lock)) = self.states.get_mut(entity) else {
            return false;
        };

        if state.is_standing() {
            return true;
        }

        if !force && lock.is_some_and(|lock| lock.blocks_stand) {
            return false;
        }

        state.standing = true;
        self.stood.write(Stood { entity });
        true
    }

    /// Лечь
    pub fn down(&mut self, entity: Entity, play_sound: bool, drop_held_items: bool) -> bool {
        let Ok((mut state, lock)) = self.states.get_mut(entity) else {
            return false;
        };

        if state.is_down() {
            return true;
        }

        if lock.is_some_and(|lock| lock.blocks_down) {
            return false;
        }

        state.standing = false;
        self.downed.write(Downed {
            entity,
            play_sound,
            drop_held_items,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Results(Vec<bool>);

    #[derive(Resource)]
    struct Target(Entity);

    fn stand_target(mut standing: StandingStates, target: Res<Target>, mut results: ResMut<Results>) {
        results.0.push(standing.stand(target.0, false));
    }

    fn force_stand_target(mut standing: StandingStates, target: Res<Target>, mut results: ResMut<Results>) {
        results.0.push(standing.stand(target.0, true));
    }

    fn down_target(mut standing: StandingStates, target: Res<Target>, mut results: ResMut<Results>) {
        results.0.push(standing.down(target.0, true, false));
    }

    fn setup(state: StandingState, lock: Option<PostureLock>) -> (App, Entity) {
        let mut app = App::new();
        app.add_event::<Stood>()
            .add_event::<Downed>()
            .init_resource::<Results>();

        let mut entity = app.world_mut().spawn(state);
        if let Some(lock) = lock {
            entity.insert(lock);
        }
        let entity = entity.id();
        app.insert_resource(Target(entity));

        (app, entity)
    }

    fn event_count<E: Event>(app: &App) -> usize {
        app.world().resource::<Events<E>>().len()
    }

    #[test]
    fn test_stand_from_down_writes_stood() {
        let (mut app, entity) = setup(StandingState::down(), None);
        app.add_systems(Update, stand_target);
        app.update();

        assert_eq!(app.world().resource::<Results>().0, vec![true]);
        assert!(app.world().get::<StandingState>(entity).unwrap().is_standing());
        assert_eq!(event_count::<Stood>(&app), 1);
    }

    #[test]
    fn test_stand_when_already_standing_is_noop_success() {
        let (mut app, _) = setup(StandingState::standing(), None);
        app.add_systems(Update, stand_target);
        app.update();

        assert_eq!(app.world().resource::<Results>().0, vec![true]);
        assert_eq!(event_count::<Stood>(&app), 0);
    }

    #[test]
    fn test_restrained_refuses_stand_unless_forced() {
        let (mut app, entity) = setup(StandingState::down(), Some(PostureLock::restrained()));
        app.add_systems(Update, (stand_target, force_stand_target).chain());
        app.update();

        assert_eq!(app.world().resource::<Results>().0, vec![false, true]);
        assert!(app.world().get::<StandingState>(entity).unwrap().is_standing());
        assert_eq!(event_count::<Stood>(&app), 1);
    }

    #[test]
    fn test_down_writes_downed_with_flags() {
        let (mut app, entity) = setup(StandingState::standing(), None);
        app.add_systems(Update, down_target);
        app.update();

        assert!(app.world().get::<StandingState>(entity).unwrap().is_down());
        let events = app.world().resource::<Events<Downed>>();
        let downed: Vec<_> = events.iter_current_update_events().copied().collect();
        assert_eq!(
            downed,
            vec![Downed { entity, play_sound: true, drop_held_items: false }]
        );
    }

    #[test]
    fn test_down_blocked_by_lock() {
        let lock = PostureLock { blocks_stand: false, blocks_down: true };
        let (mut app, entity) = setup(StandingState::standing(), Some(lock));
        app.add_systems(Update, down_target);
        app.update();

        assert_eq!(app.world().resource::<Results>().0, vec![false]);
        assert!(app.world().get::<StandingState>(entity).unwrap().is_standing());
    }

    #[test]
    fn test_missing_state_fails() {
        let mut app = App::new();
        app.add_event::<Stood>()
            .add_event::<Downed>()
            .init_resource::<Results>();
        let entity = app.world_mut().spawn_empty().id();
        app.insert_resource(Target(entity));
        app.add_systems(Update, (stand_target, down_target).chain());
        app.update();

        assert_eq!(app.world().resource::<Results>().0, vec![false, false]);
    }
}

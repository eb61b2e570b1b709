//! Test helpers: headless App с LayingDownPlugin и ручным временем.

use std::time::Duration;

use bevy::prelude::*;

use crate::components::{LayingDown, MovementSpeedModifier, SpatialParent, StandingState};
use crate::laying_down::{LayingDownPlugin, PopupEvent, ToggleStandingCommand};
use crate::session::{SessionId, Sessions};

/// Все popup, записанные за время теста (в порядке отправки)
#[derive(Resource, Default)]
pub struct PopupLog(pub Vec<PopupEvent>);

fn record_popups(mut popups: EventReader<PopupEvent>, mut log: ResMut<PopupLog>) {
    log.0.extend(popups.read().cloned());
}

/// App без TimePlugin: `Time` двигается только через `advance`
pub fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .add_plugins(LayingDownPlugin)
        .init_resource::<PopupLog>()
        .add_systems(PostUpdate, record_popups);
    app
}

pub fn advance(app: &mut App, delta: Duration) {
    app.world_mut().resource_mut::<Time>().advance_by(delta);
}

pub fn spawn_grid(app: &mut App) -> Entity {
    app.world_mut().spawn_empty().id()
}

/// Актор на grid, прикреплённый к сессии
pub fn spawn_actor(app: &mut App, session: SessionId, state: StandingState, grid: Entity) -> Entity {
    let entity = app
        .world_mut()
        .spawn((
            state,
            LayingDown::default(),
            SpatialParent::on_grid(grid),
            MovementSpeedModifier::new(4.0, 3.0),
        ))
        .id();
    app.world_mut().resource_mut::<Sessions>().attach(session, entity);
    entity
}

/// Отправить toggle от сессии и прогнать один тик
pub fn toggle(app: &mut App, session: SessionId) {
    app.world_mut().send_event(ToggleStandingCommand {
        session: Some(session),
    });
    app.update();
}

pub fn take_popups(app: &mut App) -> Vec<PopupEvent> {
    std::mem::take(&mut app.world_mut().resource_mut::<PopupLog>().0)
}

pub fn is_down(app: &App, entity: Entity) -> bool {
    app.world().get::<StandingState>(entity).is_some_and(StandingState::is_down)
}

pub fn laying_down(app: &App, entity: Entity) -> &LayingDown {
    app.world().get::<LayingDown>(entity).expect("entity has LayingDown")
}

pub fn speed(app: &App, entity: Entity) -> &MovementSpeedModifier {
    app.world()
        .get::<MovementSpeedModifier>(entity)
        .expect("entity has MovementSpeedModifier")
}

//! Headless симуляция позы
//!
//! Запускает Bevy App без рендера: игроки случайно жмут toggle,
//! иногда их поднимают с grid и кладут обратно.

use bevy::prelude::*;
use rand::Rng;

use laying_down::{
    create_headless_app, DeterministicRng, KeyFunction, KeyStateEvent, LayingDown, MovementSpeedModifier,
    SessionId, Sessions, SpatialParent, StandingState,
};

const PLAYER_COUNT: u32 = 8;
const TICKS: usize = 1000;

fn main() {
    let seed = 42;
    println!("Starting headless posture simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);

    let grid = app.world_mut().spawn_empty().id();
    let holder = app.world_mut().spawn_empty().id();

    let mut actors = Vec::new();
    for index in 0..PLAYER_COUNT {
        let session = SessionId(index);
        let entity = app
            .world_mut()
            .spawn((
                StandingState::standing(),
                LayingDown::default(),
                SpatialParent::on_grid(grid),
                MovementSpeedModifier::default(),
            ))
            .id();
        app.world_mut().resource_mut::<Sessions>().attach(session, entity);
        actors.push((session, entity));
    }

    for tick in 0..TICKS {
        drive_players(&mut app, &actors, grid, holder);
        app.update();

        if tick % 100 == 0 {
            let down = actors
                .iter()
                .filter(|(_, entity)| {
                    app.world()
                        .get::<StandingState>(*entity)
                        .is_some_and(StandingState::is_down)
                })
                .count();
            println!("Tick {}: {}/{} players down", tick, down, actors.len());
        }
    }

    println!("Simulation complete!");
}

/// Случайный input: нажатия/отпускания toggle и переносы с grid на руки
fn drive_players(app: &mut App, actors: &[(SessionId, Entity)], grid: Entity, holder: Entity) {
    let mut key_events = Vec::new();
    let mut moves = Vec::new();

    {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        for &(session, entity) in actors {
            if rng.rng.gen_bool(0.05) {
                key_events.push(KeyStateEvent {
                    session,
                    function: KeyFunction::ToggleStanding,
                    pressed: rng.rng.gen_bool(0.5),
                });
            }

            if rng.rng.gen_bool(0.01) {
                moves.push((entity, rng.rng.gen_bool(0.5)));
            }
        }
    }

    for event in key_events {
        app.world_mut().send_event(event);
    }

    for (entity, picked_up) in moves {
        if let Some(mut spatial) = app.world_mut().get_mut::<SpatialParent>(entity) {
            if picked_up {
                spatial.set_parent(Some(holder), None);
            } else {
                spatial.set_parent(Some(grid), Some(grid));
            }
        }
    }
}

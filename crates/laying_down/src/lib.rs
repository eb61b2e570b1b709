//! Laying Down Simulation Core
//!
//! ECS-симуляция позы (стоять ↔ лежать) на Bevy 0.16.
//!
//! Подсистемы:
//! - standing: capability позы (StandingStates, Stood/Downed)
//! - laying_down: toggle по команде игрока, замедление лёжа, коррекция при потере поверхности
//! - movement: пайплайн модификаторов скорости
//! - spatial: смена пространственного родителя (ParentChanged)
//! - session / input: сессии игроков и фронты нажатий

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod input;
pub mod laying_down;
pub mod logger;
pub mod movement;
pub mod session;
pub mod spatial;
pub mod standing;

#[cfg(test)]
pub(crate) mod testing;

// Re-export базовых типов для удобства
pub use components::*;
pub use input::{KeyFunction, KeyStateEvent};
pub use laying_down::{
    LayingDownConfig, LayingDownPlugin, PopupEvent, PopupRecipients, ToggleBranch, ToggleRejection,
    ToggleStandingCommand,
};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use movement::RefreshMovementSpeedModifiers;
pub use session::{SessionId, Sessions};
pub use spatial::ParentChanged;
pub use standing::{Downed, StandingStates, Stood};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(LayingDownPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(SimulationPlugin);

    app
}

/// Snapshot компонента T по всем entity (для сравнения детерминизма)
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

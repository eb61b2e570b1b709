//! Laying down — toggle позы игроком (стоять ↔ лежать)
//!
//! # Architecture
//!
//! **Toggle flow:**
//! - KeyStateEvent → dispatch_key_functions → ToggleStandingCommand
//! - handle_toggle_commands: cooldown → поверхность → StandingStates
//! - Stood / Downed / новый LayingDown → refresh_speed_on_posture_change → RefreshMovementSpeedModifiers
//! - collect → contribute_laying_down_speed → apply (MovementSpeedModifier)
//!
//! **Attachment guard:**
//! - SpatialParent изменился или удалён → ParentChanged → stand_when_detached
//!
//! Всё в одном `.chain()` — один `app.update()` = один тик, порядок детерминирован.

use bevy::prelude::*;

pub mod config;
pub mod error;
pub mod events;
pub mod systems;

// Re-exports
pub use config::*;
pub use error::*;
pub use events::*;
pub use systems::*;

use crate::input::{dispatch_key_functions, forget_detached_sessions, InputEdgeTracker, KeyStateEvent};
use crate::movement::{apply_speed_modifiers, collect_speed_refresh_requests, RefreshMovementSpeedModifiers};
use crate::session::Sessions;
use crate::spatial::{track_spatial_parent_changes, ParentChanged};
use crate::standing::{Downed, Stood};

/// LayingDown Plugin
///
/// Регистрирует события, ресурсы и системы в Update.
///
/// Порядок выполнения:
/// 1. apply_laying_down_config — новые LayingDown получают значения из конфига
/// 2. track_spatial_parent_changes — Changed/Removed<SpatialParent> → ParentChanged
/// 3. forget_detached_sessions — чистка InputEdgeTracker
/// 4. dispatch_key_functions — фронт нажатия → ToggleStandingCommand
/// 5. handle_toggle_commands — попытка toggle + popups
/// 6. stand_when_detached — лежащий без поверхности встаёт
/// 7. refresh_speed_on_posture_change — Stood/Downed/новые entity → запрос пересчёта
/// 8. collect_speed_refresh_requests — открыть проходы
/// 9. contribute_laying_down_speed — вклад замедления
/// 10. apply_speed_modifiers — закрыть проходы
///
/// Другие контрибьюторы скорости встают между 8 и 10:
/// `.after(collect_speed_refresh_requests).before(apply_speed_modifiers)`.
pub struct LayingDownPlugin;

impl Plugin for LayingDownPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayingDownConfig>()
            .init_resource::<Sessions>()
            .init_resource::<InputEdgeTracker>();

        let invalid = app
            .world()
            .resource::<LayingDownConfig>()
            .validate()
            .err();
        if let Some(err) = invalid {
            crate::logger::log_error(&format!("Invalid LayingDownConfig ({err}), using defaults"));
            app.insert_resource(LayingDownConfig::default());
        }

        // Регистрация событий
        app.add_event::<KeyStateEvent>()
            .add_event::<ToggleStandingCommand>()
            .add_event::<PopupEvent>()
            .add_event::<Stood>()
            .add_event::<Downed>()
            .add_event::<ParentChanged>()
            .add_event::<RefreshMovementSpeedModifiers>();

        app.add_systems(
            Update,
            (
                // Фаза 1: новые entity, входящие уведомления и команды
                apply_laying_down_config,
                track_spatial_parent_changes,
                forget_detached_sessions,
                dispatch_key_functions,

                // Фаза 2: смена позы (игрок, затем коррекция)
                handle_toggle_commands,
                stand_when_detached,

                // Фаза 3: пересчёт скорости
                refresh_speed_on_posture_change,
                collect_speed_refresh_requests,
                contribute_laying_down_speed,
                apply_speed_modifiers,
            )
                .chain(), // Последовательное выполнение
        );
    }
}

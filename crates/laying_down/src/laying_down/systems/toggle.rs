//! Posture toggle controller.

use std::time::Duration;

use bevy::prelude::*;

use crate::components::{LayingDown, Posture, SpatialParent};
use crate::laying_down::error::ToggleRejection;
use crate::laying_down::events::{PopupEvent, ToggleBranch, ToggleStandingCommand};
use crate::session::Sessions;
use crate::standing::StandingStates;

/// Попытка перевести entity в `target` позу
///
/// Гейты проверяются по порядку и коротко замыкаются:
/// cooldown → (только для Down) поверхность → capability.
/// Capability не вызывается если предыдущий гейт не прошёл.
pub fn try_toggle(
    standing: &mut StandingStates,
    entity: Entity,
    target: Posture,
    laying_down: &LayingDown,
    on_surface: bool,
    now: Duration,
) -> Result<(), ToggleRejection> {
    if !laying_down.cooldown_ready(now) {
        return Err(ToggleRejection::Cooldown {
            remaining: laying_down.cooldown_remaining(now),
        });
    }

    let accepted = match target {
        Posture::Standing => standing.stand(entity, false),
        Posture::Down => {
            if !on_surface {
                return Err(ToggleRejection::NoSurface);
            }
            standing.down(entity, true, false)
        }
    };

    if accepted {
        Ok(())
    } else {
        Err(ToggleRejection::Refused)
    }
}

/// Система: обработка ToggleStandingCommand
///
/// 1. Сессия → entity (невалидный актор = тихий no-op)
/// 2. try_toggle
/// 3. Успех: popup окружающим, затем cooldown
/// 4. Всегда: popup самому актору (после popup окружающим)
pub fn handle_toggle_commands(
    mut toggle_commands: EventReader<ToggleStandingCommand>,
    sessions: Res<Sessions>,
    time: Res<Time>,
    mut actors: Query<(&mut LayingDown, Option<&SpatialParent>)>,
    mut standing: StandingStates,
    mut popups: EventWriter<PopupEvent>,
) {
    let now = time.elapsed();

    for command in toggle_commands.read() {
        let Some(entity) = command
            .session
            .and_then(|session| sessions.attached_entity(session))
        else {
            continue;
        };

        let Some(current) = standing.posture(entity) else {
            continue;
        };

        let Ok((mut laying_down, spatial)) = actors.get_mut(entity) else {
            continue;
        };

        let target = current.toggled();
        let on_surface = spatial.is_some_and(SpatialParent::on_surface);

        let result = try_toggle(&mut standing, entity, target, &laying_down, on_surface, now);
        let branch = ToggleBranch::new(target, result.is_ok());

        if branch.is_success() {
            popups.write(branch.other_popup(entity));
            laying_down.start_cooldown(now);
        }

        match result {
            Ok(()) => {
                crate::logger::log_info(&format!(
                    "{:?} toggled posture → {:?} (next toggle at {:?})",
                    entity, target, laying_down.next_toggle_attempt
                ));
            }
            Err(rejection) => {
                crate::logger::log(&format!(
                    "{:?} posture toggle → {:?} rejected: {}",
                    entity, target, rejection
                ));
            }
        }

        popups.write(branch.self_popup(entity));
    }
}

//! Movement domain — пайплайн модификаторов скорости
//!
//! Содержит:
//! - RefreshMovementSpeedModifiers (event-запрос пересчёта)
//! - collect_speed_refresh_requests / apply_speed_modifiers (границы прохода)
//!
//! Контрибьюторы (например laying_down::contribute_laying_down_speed) работают
//! между collect и apply и вызывают `MovementSpeedModifier::modify_speed`.

pub mod events;
pub mod systems;

// Re-export all events and systems
pub use events::*;
pub use systems::*;

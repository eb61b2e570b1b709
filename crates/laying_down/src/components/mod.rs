//! ECS Components для posture симуляции
//!
//! Организация по доменам:
//! - standing: поза (StandingState, Posture) и внешние блокировки (PostureLock)
//! - laying_down: cooldown toggle и замедление лёжа (LayingDown)
//! - spatial: пространственный родитель и поверхность (SpatialParent)
//! - movement: скорость и модификаторы скорости (MovementSpeedModifier)

pub mod standing;
pub mod laying_down;
pub mod spatial;
pub mod movement;

// Re-exports для удобного импорта
pub use standing::*;
pub use laying_down::*;
pub use spatial::*;
pub use movement::*;

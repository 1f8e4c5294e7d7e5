//! Scheduling: fixed/frame фазы и periodic cadence
//!
//! # Архитектура
//!
//! **FixedUpdate** (fixed timestep) → player input, AI решения, locomotion
//! **Update** (frame) → look, action scan + evaluation, navigation cadence,
//! footsteps, perception
//!
//! Оба schedule работают на single-threaded executor: вся симуляция
//! мутируется одним логическим потоком, locking не нужен.
//!
//! # Periodic задачи
//!
//! Navigation cadence и action scan: это `Cadence` внутри компонента
//! entity-владельца. Despawn entity = отмена задачи; компонент уникален
//! на entity → не больше одного живого экземпляра каждого loop.

use bevy::ecs::schedule::SystemSet;

pub mod cadence;

pub use cadence::Cadence;

/// Фазы FixedUpdate (порядок = порядок объявления)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FixedPhase {
    /// Player input + AI решения → MovementCommand / PostureCommand
    Decide,
    /// MovementCommand → velocity / NavAgent / AnimatorParams
    Locomotion,
    /// Headless интеграция velocity → Transform
    Integrate,
}

/// Фазы Update (порядок = порядок объявления)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FramePhase {
    /// Look, navigation cadence
    Steer,
    /// Action scan cadence + per-frame action evaluation
    Actions,
    /// Footsteps → sounds → ears → perception hooks
    Perception,
}

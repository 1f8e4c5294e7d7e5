//! Guard AI
//!
//! Минимальный perception-driven FSM охранника:
//! Idle → (heard) Investigating → (sighted) Chasing → (forget) Idle
//!
//! Архитектура:
//! - perception bridge мутирует `GuardBrain` (on_heard / on_sighted)
//! - `guard_think` (FixedUpdate) двигает таймеры/arrival и переводит state
//!   в PursuitTarget + MovementCommand
//! - дальше работает обычный locomotion + navigation cadence

pub mod brain;
pub mod systems;


pub use brain::*;
pub use systems::*;

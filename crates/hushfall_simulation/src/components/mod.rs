//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - character: базовый персонаж (Character, Locomotion, PhysicsBody, PursuitTarget)
//! - movement: команды и навигация (MovementCommand, PostureCommand, NavAgent, NavigationCadence)
//! - animation: animator sink (AnimatorParams)
//! - audio: звуковые emitter'ы (SoundEmitter, FootstepEmitters)
//! - perception: сенсоры (Eyes, Ears)
//! - player: player-only состояние (Player, Vitality, Lantern, LookRig, PrimaryItems)
//! - action: интерактивные зоны (ActionZone, ActiveAction, ActionScan, PrimaryItem)

pub mod action;
pub mod animation;
pub mod audio;
pub mod character;
pub mod movement;
pub mod perception;
pub mod player;

// Re-exports для удобного импорта
pub use action::*;
pub use animation::*;
pub use audio::*;
pub use character::*;
pub use movement::*;
pub use perception::*;
pub use player::*;

//! First-person player controller
//!
//! - look: pitch/spine clamp + yaw (Update)
//! - actions: scan cadence + per-frame evaluation, HUD hints (Update)
//! - movement: fixed-step gait/posture/lantern (FixedUpdate)
//!
//! Схваченный или мёртвый игрок не получает look/evaluation/movement input.

pub mod actions;
pub mod hud;
pub mod look;
pub mod movement;


pub use actions::*;
pub use hud::Hud;
pub use look::*;
pub use movement::*;

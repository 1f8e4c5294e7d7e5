//! Animator sink: параметры, которые engine animator читает каждый frame

use bevy::prelude::*;

/// Параметры animator (pure sink, симуляция их не читает для решений)
///
/// - `direction_x` / `direction_y`: blend оси (strafe / forward)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimatorParams {
    pub is_moving: bool,
    pub is_running: bool,
    pub is_crouching: bool,
    pub direction_x: f32,
    pub direction_y: f32,
}

impl AnimatorParams {
    pub fn set_blend(&mut self, x: f32, y: f32) {
        self.direction_x = x;
        self.direction_y = y;
    }
}

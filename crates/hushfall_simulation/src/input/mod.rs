//! Player input state
//!
//! Хост (engine bridge / тесты) каждый frame пишет значения осей в
//! `InputState`. Симуляция только читает.
//!
//! ```text
//! Engine Input (keyboard/mouse/gamepad)
//!     ↓
//! InputState (ECS resource)
//!     ↓
//! player look / movement / action systems
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Именованные оси ввода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum InputAxis {
    CameraX,
    CameraY,
    Horizontal,
    Vertical,
    Run,
    Crouch,
    Lantern,
    Action,
}

impl InputAxis {
    pub const ALL: [InputAxis; 8] = [
        InputAxis::CameraX,
        InputAxis::CameraY,
        InputAxis::Horizontal,
        InputAxis::Vertical,
        InputAxis::Run,
        InputAxis::Crouch,
        InputAxis::Lantern,
        InputAxis::Action,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Значения осей на текущий frame
///
/// - `axis()`: continuous значение (-1..1 для движения, delta для мыши)
/// - `raw()`: пороговое значение (-1, 0 или 1) (кнопки)
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputState {
    values: [f32; 8],
}

impl InputState {
    pub fn axis(&self, axis: InputAxis) -> f32 {
        self.values[axis.index()]
    }

    pub fn raw(&self, axis: InputAxis) -> f32 {
        let value = self.axis(axis);
        if value > 0.0 {
            1.0
        } else if value < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    pub fn is_pressed(&self, axis: InputAxis) -> bool {
        self.raw(axis) != 0.0
    }

    pub fn set(&mut self, axis: InputAxis, value: f32) {
        self.values[axis.index()] = value;
    }

    /// Builder-style для тестов и скриптованных сессий
    pub fn with(mut self, axis: InputAxis, value: f32) -> Self {
        self.set(axis, value);
        self
    }

    pub fn clear(&mut self) {
        self.values = [0.0; 8];
    }
}

//! First-person look: pitch камеры + spine, yaw тела
//!
//! Углы в градусах, положительный vertical = взгляд вниз.
//! Head и spine clamp'ятся независимо: spine копирует head и режется
//! своим диапазоном (у crouch верхняя граница уже).

use bevy::prelude::*;

use crate::components::{Locomotion, LookRig, Player, Vitality};
use crate::config::PlayerControllerConfig;
use crate::input::{InputAxis, InputState};

/// Поза камеры в world space (для action raycast)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl CameraPose {
    pub fn of(body: &Transform, rig: &LookRig, config: &PlayerControllerConfig) -> Self {
        let rotation = body.rotation * rig.head_rotation();
        Self {
            position: body.translation + Vec3::Y * config.eye_height,
            forward: (rotation * Vec3::NEG_Z).normalize_or_zero(),
        }
    }
}

impl LookRig {
    /// Применить вертикальный input (уже умноженный на sensitivity)
    pub fn apply_pitch(&mut self, input_y: f32, config: &PlayerControllerConfig, is_crouching: bool) {
        self.vertical_angle = (self.vertical_angle - input_y)
            .clamp(config.min_vertical_angle, config.max_vertical_angle);

        let (spine_min, spine_max) = if is_crouching {
            (
                config.spine_crouch_min_vertical_angle,
                config.spine_crouch_max_vertical_angle,
            )
        } else {
            (config.spine_min_vertical_angle, config.spine_max_vertical_angle)
        };
        self.spine_angle = self.vertical_angle.clamp(spine_min, spine_max);
    }
}

/// Система: look update (Update, только для дееспособного игрока)
pub fn player_look(
    input: Res<InputState>,
    mut players: Query<
        (
            &mut Transform,
            &mut LookRig,
            &Locomotion,
            &Vitality,
            &PlayerControllerConfig,
        ),
        With<Player>,
    >,
) {
    let camera_x = input.axis(InputAxis::CameraX);
    let camera_y = input.axis(InputAxis::CameraY);

    for (mut transform, mut rig, locomotion, vitality, config) in players.iter_mut() {
        if vitality.is_incapacitated() {
            continue;
        }

        rig.apply_pitch(
            camera_y * config.camera_sensitivity,
            config,
            locomotion.is_crouching,
        );

        // Yaw без clamp; положительный X = поворот вправо
        let yaw = camera_x * config.camera_sensitivity;
        if yaw != 0.0 {
            transform.rotate_y(-yaw.to_radians());
        }
    }
}

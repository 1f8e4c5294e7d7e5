//! Player fixed-step input → MovementCommand / PostureCommand / lantern

use bevy::prelude::*;

use crate::components::{
    Lantern, Locomotion, MovementCommand, Player, PostureCommand, Vitality,
};
use crate::input::{InputAxis, InputState};

/// Решение gait по осям движения (run > crouch-walk > walk)
pub fn choose_movement(input: &InputState) -> MovementCommand {
    let x = input.axis(InputAxis::Horizontal);
    let y = input.axis(InputAxis::Vertical);
    if x == 0.0 && y == 0.0 {
        return MovementCommand::Stay;
    }

    if input.is_pressed(InputAxis::Run) {
        MovementCommand::Run
    } else if input.is_pressed(InputAxis::Crouch) {
        MovementCommand::WalkCrouch
    } else {
        MovementCommand::Walk
    }
}

/// Поза решается независимо от gait (Run + Crouch → бег в приседе)
pub fn choose_posture(input: &InputState) -> PostureCommand {
    if input.is_pressed(InputAxis::Crouch) {
        PostureCommand::Crouch
    } else {
        PostureCommand::Stand
    }
}

/// Система: player fixed input (FixedUpdate)
///
/// Схваченный/мёртвый игрок: Stand + Stay, input игнорируется.
pub fn player_fixed_input(
    input: Res<InputState>,
    mut players: Query<
        (
            Entity,
            &Vitality,
            &mut Locomotion,
            &mut Lantern,
            &mut MovementCommand,
            &mut PostureCommand,
        ),
        With<Player>,
    >,
) {
    for (entity, vitality, mut locomotion, mut lantern, mut movement, mut posture) in
        players.iter_mut()
    {
        if vitality.is_incapacitated() {
            *posture = PostureCommand::Stand;
            *movement = MovementCommand::Stay;
            // Edge детектор следит за кнопкой и без управления
            lantern.trigger_held = input.is_pressed(InputAxis::Lantern);
            continue;
        }

        let command = choose_movement(&input);
        if command != MovementCommand::Stay {
            locomotion.set_direction(Vec3::new(
                input.axis(InputAxis::Horizontal),
                0.0,
                input.axis(InputAxis::Vertical),
            ));
        }
        *movement = command;
        *posture = choose_posture(&input);

        // Одно переключение на нажатие
        let pressed = input.is_pressed(InputAxis::Lantern);
        if pressed && !lantern.trigger_held {
            lantern.toggle();
            crate::log(&format!(
                "🏮 Player {:?}: lantern {}",
                entity,
                if lantern.is_lit { "on" } else { "off" }
            ));
        }
        lantern.trigger_held = pressed;
    }
}

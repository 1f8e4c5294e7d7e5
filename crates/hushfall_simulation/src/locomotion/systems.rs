//! Locomotion systems (FixedUpdate).

use bevy::ecs::entity::Entities;
use bevy::prelude::*;

use super::CharacterRig;
use crate::components::{
    AnimatorParams, Character, Locomotion, MovementCommand, NavAgent, PhysicsBody,
    PostureCommand, PursuitTarget,
};
use crate::config::CharacterConfig;

/// Система: MovementCommand / PostureCommand → locomotion
///
/// Команды забираются (take) один раз за tick. Порядок: сначала gait,
/// потом posture: Run + Crouch в одном tick дают run И crouch одновременно.
pub fn drive_locomotion(
    mut characters: Query<(
        Entity,
        &Character,
        &Transform,
        &CharacterConfig,
        &PursuitTarget,
        &mut Locomotion,
        &mut PhysicsBody,
        &mut NavAgent,
        &mut AnimatorParams,
        &mut MovementCommand,
        &mut PostureCommand,
    )>,
    entities: &Entities,
) {
    for (
        entity,
        character,
        transform,
        tuning,
        target,
        mut locomotion,
        mut body,
        mut agent,
        mut animator,
        mut movement,
        mut posture,
    ) in characters.iter_mut()
    {
        let movement = movement.take();
        let posture = posture.take();
        if movement == MovementCommand::None && posture == PostureCommand::None {
            continue;
        }

        let mut rig = CharacterRig {
            entity,
            kind: character.kind,
            transform,
            tuning,
            target: target.live(entities),
            locomotion: &mut *locomotion,
            body: &mut *body,
            agent: &mut *agent,
            animator: &mut *animator,
        };

        match movement {
            MovementCommand::None => {}
            MovementCommand::Stay => rig.stay(),
            MovementCommand::Walk => rig.walk(),
            MovementCommand::Run => rig.run(),
            MovementCommand::WalkCrouch => rig.walk_crouch(),
            MovementCommand::Move(command) => rig.move_with(command),
        }

        match posture {
            PostureCommand::None => {}
            PostureCommand::Crouch => rig.crouch(),
            PostureCommand::Stand => rig.stand(),
        }
    }
}

/// Система: интеграция velocity → Transform (headless режим)
///
/// В engine это делает physics body; headless симуляция двигает Transform
/// сама: free locomotion по velocity, agent locomotion по прямой к
/// destination со скоростью агента (stand-in для engine pathfinding).
pub fn integrate_velocity(
    mut characters: Query<(&PhysicsBody, &PursuitTarget, &NavAgent, &mut Transform), With<Character>>,
    entities: &Entities,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (body, target, agent, mut transform) in characters.iter_mut() {
        if target.live(entities).is_none() {
            transform.translation += body.velocity * delta;
            continue;
        }

        if agent.is_stopped {
            continue;
        }
        let Some(destination) = agent.destination else {
            continue;
        };

        let to_destination = Vec3::new(
            destination.x - transform.translation.x,
            0.0,
            destination.z - transform.translation.z,
        );
        let step = agent.speed * delta;
        if to_destination.length() <= step {
            transform.translation.x = destination.x;
            transform.translation.z = destination.z;
        } else {
            transform.translation += to_destination.normalize() * step;
        }
    }
}

//! Guard AI systems (FixedUpdate)

use bevy::prelude::*;

use super::{GuardBrain, GuardState};
use crate::components::{Character, MovementCommand, PursuitTarget};
use crate::config::GuardConfig;

/// Система: guard FSM tick → PursuitTarget + MovementCommand
///
/// - Investigating: Idle при arrival (XZ дистанция ≤ arrive_radius)
/// - Chasing: Idle когда forget_timer истёк
/// - target despawned → Idle
pub fn guard_think(
    mut guards: Query<
        (
            Entity,
            &Transform,
            &GuardConfig,
            &mut GuardBrain,
            &mut PursuitTarget,
            &mut MovementCommand,
        ),
        With<Character>,
    >,
    targets: Query<&Transform>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (entity, transform, config, mut brain, mut pursuit, mut command) in guards.iter_mut() {
        let next = match brain.state.clone() {
            GuardState::Idle => GuardState::Idle,

            GuardState::Investigating { target, position } => match targets.get(target) {
                Ok(target_transform) => {
                    let offset = target_transform.translation - transform.translation;
                    let flat = Vec3::new(offset.x, 0.0, offset.z);
                    if flat.length() <= config.arrive_radius {
                        GuardState::Idle
                    } else {
                        GuardState::Investigating { target, position }
                    }
                }
                Err(_) => GuardState::Idle,
            },

            GuardState::Chasing {
                target,
                forget_timer,
            } => {
                let forget_timer = forget_timer - delta;
                if forget_timer <= 0.0 || targets.get(target).is_err() {
                    GuardState::Idle
                } else {
                    GuardState::Chasing {
                        target,
                        forget_timer,
                    }
                }
            }
        };
        brain.transition(entity, next);

        pursuit.set(brain.state.target());
        *command = match brain.state {
            GuardState::Idle => MovementCommand::Stay,
            GuardState::Investigating { .. } => MovementCommand::Walk,
            GuardState::Chasing { .. } => MovementCommand::Run,
        };
    }
}

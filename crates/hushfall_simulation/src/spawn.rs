//! Spawn helpers + проверка собранных персонажей
//!
//! Персонаж = owner entity + два footstep emitter entity (левая/правая нога).
//! Owner резервируется первым, чтобы emitter'ы знали владельца.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Collider;
use thiserror::Error;

use crate::ai::GuardBrain;
use crate::collision_layers::{actionable_groups, actor_groups};
use crate::components::{
    ActionGate, ActionScan, ActionZone, Character, Ears, FootstepEmitters, NavigationCadence,
    Player, PrimaryItem, SoundEmitter,
};
use crate::config::SimulationConfig;

/// Смещение стоп от центра тела (метры)
const FOOT_OFFSET: f32 = 0.12;

/// Ошибка сборки мира (construction-time)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("character {character:?} has no footstep emitters")]
    MissingFootstepEmitters { character: Entity },

    #[error("character {character:?}: footstep emitter {emitter:?} does not exist")]
    MissingFootstepEmitter { character: Entity, emitter: Entity },

    #[error("footstep emitter {emitter:?} belongs to {owner:?}, not to {character:?}")]
    ForeignFootstepEmitter {
        character: Entity,
        emitter: Entity,
        owner: Entity,
    },
}

/// Spawn helper: базовый персонаж с footstep emitter'ами и navigation cadence
pub fn spawn_character(
    commands: &mut Commands,
    character: Character,
    position: Vec3,
    config: &SimulationConfig,
) -> Entity {
    let owner = commands.spawn_empty().id();
    let left = commands
        .spawn(SoundEmitter {
            owner,
            offset: Vec3::new(-FOOT_OFFSET, 0.0, 0.0),
        })
        .id();
    let right = commands
        .spawn(SoundEmitter {
            owner,
            offset: Vec3::new(FOOT_OFFSET, 0.0, 0.0),
        })
        .id();

    commands.entity(owner).insert((
        character,
        Transform::from_translation(position),
        config.character.clone(),
        FootstepEmitters { left, right },
        NavigationCadence::new(config.character.path_finding_interval, position),
        // Rapier: капсула актёра (raycast игрока её не видит, другой слой)
        Collider::capsule_y(0.5, 0.4),
        actor_groups(),
    ));
    owner
}

pub fn spawn_player(commands: &mut Commands, position: Vec3, config: &SimulationConfig) -> Entity {
    let player = spawn_character(commands, Character::player(), position, config);
    commands.entity(player).insert((
        Player,
        config.player.clone(),
        ActionScan::new(config.player.action_check_interval),
    ));
    crate::log_info(&format!("🧍 Spawned player {:?} at {:?}", player, position));
    player
}

pub fn spawn_guard(commands: &mut Commands, position: Vec3, config: &SimulationConfig) -> Entity {
    let guard = spawn_character(commands, Character::guard(), position, config);
    commands.entity(guard).insert((
        GuardBrain::default(),
        config.guard.clone(),
        Ears {
            range: config.guard.hearing_range,
        },
    ));
    crate::log_info(&format!("🛡️ Spawned guard {:?} at {:?}", guard, position));
    guard
}

/// Spawn helper: подбираемый primary item (ActionZone + collider на actionable слое)
pub fn spawn_primary_item(
    commands: &mut Commands,
    name: &str,
    position: Vec3,
    reach: f32,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            PrimaryItem {
                name: name.to_string(),
            },
            ActionZone::new(format!("Pick up {}", name), "Hands full", reach)
                .with_gate(ActionGate::InventorySpace),
            Collider::ball(0.25),
            actionable_groups(),
        ))
        .id()
}

/// Проверка: у каждого персонажа есть оба footstep emitter'а и они его
pub fn verify_character_rigs(world: &mut World) -> Result<(), SetupError> {
    let mut characters = world.query_filtered::<(Entity, Option<&FootstepEmitters>), With<Character>>();
    let mut emitters = world.query::<&SoundEmitter>();

    for (character, footsteps) in characters.iter(world) {
        let Some(footsteps) = footsteps else {
            return Err(SetupError::MissingFootstepEmitters { character });
        };

        for emitter in [footsteps.left, footsteps.right] {
            let Ok(sound) = emitters.get(world, emitter) else {
                return Err(SetupError::MissingFootstepEmitter { character, emitter });
            };
            if sound.owner != character {
                return Err(SetupError::ForeignFootstepEmitter {
                    character,
                    emitter,
                    owner: sound.owner,
                });
            }
        }
    }
    Ok(())
}

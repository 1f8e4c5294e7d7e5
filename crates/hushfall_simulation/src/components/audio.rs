//! Звуковые emitter'ы (engine микширует, симуляция только emit'ит)

use bevy::prelude::*;

/// Sound emitter entity (например, левая нога персонажа)
///
/// Позиция = позиция owner + `offset`, повёрнутый по ориентации owner.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SoundEmitter {
    pub owner: Entity,
    pub offset: Vec3,
}

impl SoundEmitter {
    pub fn world_position(&self, owner_transform: &Transform) -> Vec3 {
        owner_transform.translation + owner_transform.rotation * self.offset
    }
}

/// Два footstep emitter'а персонажа
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FootstepEmitters {
    pub left: Entity,
    pub right: Entity,
}

//! Collision Layers Constants
//!
//! Rapier `Group` битовые маски: centralised constants для всего проекта.
//!
//! ## Архитектура:
//! - **Membership:** на каком слое находится collider
//! - **Filter:** с какими слоями collider взаимодействует
//!
//! ## Layers:
//! - GROUP_1: Reserved
//! - GROUP_2: Actors (игрок, охранники)
//! - GROUP_3: Environment (стены, препятствия)
//! - GROUP_4: Actionables (ActionZone: предметы, двери, рычаги)

use bevy_rapier3d::prelude::{CollisionGroups, Group};

/// Layer: Actors
pub const COLLISION_LAYER_ACTORS: u32 = 0b10; // GROUP_2

/// Layer: Environment
pub const COLLISION_LAYER_ENVIRONMENT: u32 = 0b100; // GROUP_3

/// Layer: Actionables (ActionZone colliders)
pub const COLLISION_LAYER_ACTIONABLES: u32 = 0b1000; // GROUP_4

/// Mask по умолчанию для action raycast игрока
pub const ACTIONABLE_LAYERS: u32 = COLLISION_LAYER_ACTIONABLES;

/// Collision groups для ActionZone collider
pub fn actionable_groups() -> CollisionGroups {
    CollisionGroups::new(
        Group::from_bits_truncate(COLLISION_LAYER_ACTIONABLES),
        Group::from_bits_truncate(COLLISION_LAYER_ACTORS),
    )
}

/// Collision groups для актёров (коллайдят с актёрами + окружением)
pub fn actor_groups() -> CollisionGroups {
    CollisionGroups::new(
        Group::from_bits_truncate(COLLISION_LAYER_ACTORS),
        Group::from_bits_truncate(COLLISION_LAYER_ACTORS | COLLISION_LAYER_ENVIRONMENT),
    )
}

/// Проверка: попадает ли collider в маску raycast
pub fn in_layer_mask(groups: &CollisionGroups, mask: u32) -> bool {
    groups
        .memberships
        .intersects(Group::from_bits_truncate(mask))
}

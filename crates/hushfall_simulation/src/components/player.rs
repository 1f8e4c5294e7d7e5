//! Player-only компоненты: marker, vitality, lantern, look rig, inventory
//!
//! Акторы С `Player` получают команды от player input systems,
//! акторы БЕЗ него управляются AI.

use bevy::prelude::*;

use crate::components::{ActionScan, ActiveAction, Eyes};
use crate::config::PlayerControllerConfig;

/// Marker component для player-controlled entity
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    PlayerControllerConfig,
    Vitality,
    Lantern,
    LookRig,
    PrimaryItems,
    Eyes,
    ActiveAction,
    ActionScan
)]
pub struct Player;

/// Gating: схваченный или мёртвый игрок не управляется input'ом
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Vitality {
    pub is_grabbed: bool,
    pub is_dead: bool,
}

impl Vitality {
    pub fn is_incapacitated(&self) -> bool {
        self.is_grabbed || self.is_dead
    }
}

/// Фонарь игрока
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Lantern {
    pub is_lit: bool,
    /// Кнопка была нажата на прошлом fixed tick (edge detection)
    pub trigger_held: bool,
}

impl Lantern {
    pub fn toggle(&mut self) {
        self.is_lit = !self.is_lit;
    }
}

/// Two-bone look rig: голова/камера получает полный range, spine урезанный
///
/// Углы в градусах, положительный = взгляд вниз.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct LookRig {
    pub vertical_angle: f32,
    pub spine_angle: f32,
}

impl LookRig {
    /// Rotation камеры относительно тела (pitch вокруг локальной X)
    pub fn head_rotation(&self) -> Quat {
        Quat::from_rotation_x(-self.vertical_angle.to_radians())
    }
}

/// Подобранные primary items
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct PrimaryItems {
    pub items: Vec<Entity>,
    pub capacity: usize,
}

impl Default for PrimaryItems {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            capacity: 4,
        }
    }
}

impl PrimaryItems {
    pub fn has_space(&self) -> bool {
        self.items.len() < self.capacity
    }

    pub fn contains(&self, item: Entity) -> bool {
        self.items.contains(&item)
    }

    /// Добавить item; `false` если места нет или item уже есть
    pub fn add(&mut self, item: Entity) -> bool {
        if !self.has_space() || self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }
}

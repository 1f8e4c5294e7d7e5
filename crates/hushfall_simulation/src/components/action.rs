//! Action компоненты: интерактивные зоны, latched active action, scan cadence

use bevy::prelude::*;

use crate::input::InputAxis;
use crate::schedules::Cadence;

/// Capability gate зоны: может ли актор сейчас её активировать
#[derive(Debug, Clone, PartialEq, Default, Reflect)]
pub enum ActionGate {
    #[default]
    Always,
    /// Нужно свободное место в PrimaryItems
    InventorySpace,
    /// Нужен подобранный PrimaryItem с таким именем (ключ для двери и т.п.)
    RequiresPrimaryItem(String),
}

/// Интерактивная зона (world interactable)
///
/// Collider + CollisionGroups на той же entity делают её видимой для
/// action raycast игрока.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ActionZone {
    /// Hint когда активация доступна
    pub hint: String,
    /// Hint когда gate не пройден
    pub blocked_hint: String,
    /// Радиус активации от центра зоны до камеры (метры)
    pub distance: f32,
    /// Ось ввода, которая активирует зону
    pub axis: InputAxis,
    pub gate: ActionGate,
}

impl ActionZone {
    pub fn new(hint: impl Into<String>, blocked_hint: impl Into<String>, distance: f32) -> Self {
        Self {
            hint: hint.into(),
            blocked_hint: blocked_hint.into(),
            distance,
            axis: InputAxis::Action,
            gate: ActionGate::Always,
        }
    }

    pub fn with_gate(mut self, gate: ActionGate) -> Self {
        self.gate = gate;
        self
    }

    /// Вторичный proximity gate (строгое `<`, как у raycast distance)
    pub fn is_within_reach(&self, zone_center: Vec3, camera_position: Vec3) -> bool {
        (camera_position - zone_center).length_squared() < self.distance * self.distance
    }
}

/// Primary item (подбирается игроком через ActionZone на той же entity)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct PrimaryItem {
    pub name: String,
}

/// Marker: entity выключена из мира (подобранный item)
///
/// Action scan и evaluation игнорируют такие зоны.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Inactive;

/// Latched active action игрока (weak reference)
///
/// Живёт до следующего scan tick. Сброс не влияет на зону.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActiveAction(pub Option<Entity>);

/// Action scan cadence игрока
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ActionScan {
    pub cadence: Cadence,
}

impl ActionScan {
    pub fn new(interval: f32) -> Self {
        Self {
            cadence: Cadence::new(interval),
        }
    }
}

impl Default for ActionScan {
    fn default() -> Self {
        Self::new(0.3)
    }
}

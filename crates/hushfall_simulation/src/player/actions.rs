//! Action scan loop + per-frame action evaluation
//!
//! Scan (cadence 0.3с): ray из камеры → ближайший collider в action layers →
//! ActionZone в радиусе → latch. Промах → latch сброшен, hint очищен.
//!
//! Evaluation (каждый frame): latched зона → gate → hint / blocked hint,
//! ось зоны нажата → `ActionActivated`.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, CollisionGroups};

use super::{CameraPose, Hud};
use crate::collision_layers::in_layer_mask;
use crate::components::{
    ActionGate, ActionScan, ActionZone, ActiveAction, Eyes, Inactive, LookRig, Player,
    PrimaryItem, PrimaryItems, Vitality,
};
use crate::config::PlayerControllerConfig;
use crate::input::InputState;

/// Игрок активировал зону (обрабатывают item / door / ... системы)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionActivated {
    pub zone: Entity,
    pub actor: Entity,
}

/// Ближайшее попадание ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionRayHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Ray против всех активных collider'ов в маске; ближайший hit
///
/// Collider без ActionZone тоже может быть ближайшим (стена перед рычагом).
pub fn cast_action_ray<'a>(
    pose: CameraPose,
    max_distance: f32,
    layer_mask: u32,
    colliders: impl IntoIterator<Item = (Entity, &'a Transform, &'a Collider, &'a CollisionGroups)>,
) -> Option<ActionRayHit> {
    if pose.forward == Vec3::ZERO {
        return None;
    }

    let mut nearest: Option<ActionRayHit> = None;
    for (entity, transform, collider, groups) in colliders {
        if !in_layer_mask(groups, layer_mask) {
            continue;
        }
        let Some(distance) = collider.cast_ray(
            transform.translation,
            transform.rotation,
            pose.position,
            pose.forward,
            max_distance,
            true,
        ) else {
            continue;
        };

        if nearest.is_none_or(|best| distance < best.distance) {
            nearest = Some(ActionRayHit { entity, distance });
        }
    }
    nearest
}

/// Может ли игрок сейчас активировать зону
pub fn gate_allows(gate: &ActionGate, items: &PrimaryItems, names: &Query<&PrimaryItem>) -> bool {
    match gate {
        ActionGate::Always => true,
        ActionGate::InventorySpace => items.has_space(),
        ActionGate::RequiresPrimaryItem(required) => items.items.iter().any(|item| {
            names
                .get(*item)
                .map(|owned| owned.name == *required)
                .unwrap_or(false)
        }),
    }
}

/// Система: action scan cadence (Update)
///
/// Работает независимо от vitality, но только пока `Eyes::has_actions`.
pub fn scan_actions(
    time: Res<Time>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &LookRig,
            &PlayerControllerConfig,
            &Eyes,
            &mut ActionScan,
            &mut ActiveAction,
        ),
        With<Player>,
    >,
    colliders: Query<(Entity, &Transform, &Collider, &CollisionGroups), Without<Inactive>>,
    zones: Query<(&Transform, &ActionZone), Without<Inactive>>,
    mut hud: ResMut<Hud>,
) {
    let delta = time.delta_secs();

    for (player, transform, rig, config, eyes, mut scan, mut active) in players.iter_mut() {
        if !scan.cadence.tick(delta) || !eyes.has_actions {
            continue;
        }

        let pose = CameraPose::of(transform, rig, config);
        let hit = cast_action_ray(
            pose,
            config.action_distance,
            config.action_layers,
            colliders.iter(),
        );

        let accepted = hit.and_then(|hit| {
            let (zone_transform, zone) = zones.get(hit.entity).ok()?;
            zone.is_within_reach(zone_transform.translation, pose.position)
                .then_some(hit.entity)
        });

        match accepted {
            Some(zone) => {
                if active.0 != Some(zone) {
                    crate::log(&format!("🎯 Player {:?}: action zone {:?} in reach", player, zone));
                }
                active.0 = Some(zone);
            }
            None => {
                if let Some(previous) = active.0 {
                    crate::log(&format!("🎯 Player {:?}: lost action zone {:?}", player, previous));
                }
                hud.clear_hint();
                active.0 = None;
            }
        }
    }
}

/// Система: per-frame action evaluation (Update, только дееспособный игрок)
pub fn evaluate_active_action(
    input: Res<InputState>,
    mut players: Query<(Entity, &Vitality, &PrimaryItems, &mut ActiveAction), With<Player>>,
    zones: Query<&ActionZone, Without<Inactive>>,
    names: Query<&PrimaryItem>,
    mut hud: ResMut<Hud>,
    mut activations: EventWriter<ActionActivated>,
) {
    for (player, vitality, items, mut active) in players.iter_mut() {
        if vitality.is_incapacitated() {
            continue;
        }
        let Some(zone_entity) = active.0 else {
            continue;
        };

        // Зона исчезла или выключена → latch больше не валиден
        let Ok(zone) = zones.get(zone_entity) else {
            active.0 = None;
            hud.clear_hint();
            continue;
        };

        if gate_allows(&zone.gate, items, &names) {
            hud.set_hint(&zone.hint);
            if input.is_pressed(zone.axis) {
                activations.write(ActionActivated {
                    zone: zone_entity,
                    actor: player,
                });
            }
        } else {
            hud.set_hint(&zone.blocked_hint);
        }
    }
}

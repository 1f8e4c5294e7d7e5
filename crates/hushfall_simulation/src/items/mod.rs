//! Primary items (подбираемые предметы: ключи, записки, ...)
//!
//! Activation зоны с `PrimaryItem` → item уходит в `PrimaryItems` актора,
//! entity помечается `Inactive` (пропадает из scan/evaluation).

use bevy::prelude::*;

use crate::components::{Inactive, PrimaryItem, PrimaryItems};
use crate::player::ActionActivated;

/// Игрок подобрал item
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ItemPickedUp {
    pub item: Entity,
    pub actor: Entity,
    pub name: String,
}

/// Система: ActionActivated → pickup
///
/// Single-shot: повторная activation того же item (в этом же frame или
/// позже) ничего не делает.
pub fn pickup_primary_items(
    mut commands: Commands,
    mut activations: EventReader<ActionActivated>,
    items: Query<&PrimaryItem, Without<Inactive>>,
    mut actors: Query<&mut PrimaryItems>,
    mut picked: EventWriter<ItemPickedUp>,
) {
    for activation in activations.read() {
        let Ok(item) = items.get(activation.zone) else {
            continue;
        };
        let Ok(mut inventory) = actors.get_mut(activation.actor) else {
            continue;
        };
        // Нет места или уже подобран в этом frame
        if !inventory.add(activation.zone) {
            continue;
        }

        commands.entity(activation.zone).insert(Inactive);
        picked.write(ItemPickedUp {
            item: activation.zone,
            actor: activation.actor,
            name: item.name.clone(),
        });
        crate::log_info(&format!(
            "🔑 {:?} picked up '{}' ({:?}), {}/{} slots",
            activation.actor,
            item.name,
            activation.zone,
            inventory.items.len(),
            inventory.capacity
        ));
    }
}

//! Perception bridge
//!
//! - hearing: `SoundEmitted` → уши в радиусе `range * intensity` → `Heard`
//! - sight: `Sighted` присылает engine (vision cone), симуляция не считает
//! - dispatch: `match` по `CharacterKind` (игрок / охранник)

use bevy::prelude::*;

use crate::ai::GuardBrain;
use crate::components::{Character, CharacterKind, Ears, SoundEmitter};
use crate::config::GuardConfig;
use crate::footsteps::SoundEmitted;

/// Что было воспринято: источник, где, насколько громко/заметно
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct PerceptionMark {
    pub source: Entity,
    pub position: Vec3,
    pub intensity: f32,
}

/// Perception событие для конкретного наблюдателя
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PerceptionEvent {
    Heard { observer: Entity, mark: PerceptionMark },
    Sighted { observer: Entity, mark: PerceptionMark },
}

impl PerceptionEvent {
    pub fn observer(&self) -> Entity {
        match self {
            PerceptionEvent::Heard { observer, .. } | PerceptionEvent::Sighted { observer, .. } => {
                *observer
            }
        }
    }
}

/// Система: hearing bridge (SoundEmitted → Heard)
pub fn hear_sounds(
    mut sounds: EventReader<SoundEmitted>,
    emitters: Query<&SoundEmitter>,
    transforms: Query<&Transform>,
    listeners: Query<(Entity, &Transform, &Ears)>,
    mut perception: EventWriter<PerceptionEvent>,
) {
    for sound in sounds.read() {
        let Ok(owner_transform) = transforms.get(sound.owner) else {
            continue;
        };
        let position = match emitters.get(sound.emitter) {
            Ok(emitter) => emitter.world_position(owner_transform),
            Err(_) => owner_transform.translation,
        };

        for (listener, transform, ears) in listeners.iter() {
            // Свои шаги не слышим
            if listener == sound.owner {
                continue;
            }
            if !ears.can_hear(transform.translation.distance(position), sound.intensity) {
                continue;
            }

            perception.write(PerceptionEvent::Heard {
                observer: listener,
                mark: PerceptionMark {
                    source: sound.owner,
                    position,
                    intensity: sound.intensity,
                },
            });
        }
    }
}

/// Система: per-kind perception hooks
pub fn dispatch_perception(
    mut events: EventReader<PerceptionEvent>,
    mut observers: Query<(&Character, Option<&mut GuardBrain>, Option<&GuardConfig>)>,
) {
    for event in events.read() {
        let observer = event.observer();
        let Ok((character, brain, config)) = observers.get_mut(observer) else {
            continue;
        };

        match character.kind {
            // Игрок реагирует через engine (звук/UI), в симуляции только лог
            CharacterKind::Player => {
                crate::log(&format!("👂 Player {:?}: {:?}", observer, event));
            }
            CharacterKind::Guard => {
                let Some(mut brain) = brain else {
                    continue;
                };
                let chase_memory = config
                    .map(|c| c.chase_memory)
                    .unwrap_or_else(|| GuardConfig::default().chase_memory);

                match *event {
                    PerceptionEvent::Heard { mark, .. } => brain.on_heard(observer, mark),
                    PerceptionEvent::Sighted { mark, .. } => {
                        brain.on_sighted(observer, mark, chase_memory)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::GuardState;
    use bevy::ecs::system::RunSystemOnce;

    fn setup() -> World {
        let mut world = World::new();
        world.init_resource::<Events<SoundEmitted>>();
        world.init_resource::<Events<PerceptionEvent>>();
        world
    }

    fn sound(emitter: Entity, owner: Entity, intensity: f32) -> SoundEmitted {
        SoundEmitted {
            emitter,
            owner,
            reference: "step".into(),
            looped: false,
            spatial: false,
            intensity,
        }
    }

    fn heard(world: &mut World) -> Vec<PerceptionEvent> {
        world
            .run_system_once(hear_sounds)
            .expect("hearing system should run");
        world.resource_mut::<Events<SoundEmitted>>().clear();
        world
            .resource_mut::<Events<PerceptionEvent>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_quiet_step_heard_only_nearby() {
        let mut world = setup();
        let walker = world.spawn((Transform::default(), Ears::default())).id();
        let foot = world
            .spawn(SoundEmitter {
                owner: walker,
                offset: Vec3::new(-0.1, 0.0, 0.0),
            })
            .id();
        let near = world
            .spawn((Transform::from_xyz(3.0, 0.0, 0.0), Ears { range: 8.0 }))
            .id();
        let _far = world
            .spawn((Transform::from_xyz(6.0, 0.0, 0.0), Ears { range: 8.0 }))
            .id();

        world.send_event(sound(foot, walker, 0.5));
        let events = heard(&mut world);

        // walker не слышит сам себя, far вне 4м
        assert_eq!(events.len(), 1);
        match events[0] {
            PerceptionEvent::Heard { observer, mark } => {
                assert_eq!(observer, near);
                assert_eq!(mark.source, walker);
                assert_eq!(mark.position, Vec3::new(-0.1, 0.0, 0.0));
                assert_eq!(mark.intensity, 0.5);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_running_step_carries_further() {
        let mut world = setup();
        let runner = world.spawn(Transform::default()).id();
        let foot = world
            .spawn(SoundEmitter {
                owner: runner,
                offset: Vec3::ZERO,
            })
            .id();
        let guard = world
            .spawn((Transform::from_xyz(0.0, 0.0, 15.0), Ears { range: 8.0 }))
            .id();

        world.send_event(sound(foot, runner, 1.0));
        assert!(heard(&mut world).is_empty());

        world.send_event(sound(foot, runner, 2.0));
        let events = heard(&mut world);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].observer(), guard);
    }

    #[test]
    fn test_dispatch_routes_by_kind() {
        let mut world = setup();
        let player = world.spawn(Character::player()).id();
        let guard = world
            .spawn((Character::guard(), GuardBrain::default(), GuardConfig::default()))
            .id();
        let mark = PerceptionMark {
            source: player,
            position: Vec3::ONE,
            intensity: 1.0,
        };

        world.send_event(PerceptionEvent::Heard {
            observer: player,
            mark,
        });
        world.send_event(PerceptionEvent::Heard {
            observer: guard,
            mark,
        });
        world
            .run_system_once(dispatch_perception)
            .expect("dispatch should run");

        assert_eq!(
            world.get::<GuardBrain>(guard).map(|b| b.state.clone()),
            Some(GuardState::Investigating {
                target: player,
                position: Vec3::ONE
            })
        );
    }
}

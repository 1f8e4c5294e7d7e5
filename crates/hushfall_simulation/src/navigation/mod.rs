//! Navigation cadence loop
//!
//! Каждые `interval` секунд (первый wake на первом tick) персонаж с
//! pursuit target переиздаёт destination для NavAgent, если target
//! сдвинулся, и выводит steering direction из собственного смещения.
//!
//! Pathfinding делает engine: симуляция пишет `NavAgent::destination` и
//! отправляет `PathRequested`.

use bevy::ecs::entity::Entities;
use bevy::prelude::*;

use crate::components::{Locomotion, NavAgent, NavigationCadence, PursuitTarget};

/// Запрос пути для engine navigation agent
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PathRequested {
    pub entity: Entity,
    pub destination: Vec3,
}

/// Результат одного navigation wake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationUpdate {
    pub destination: Vec3,
    /// Смещение персонажа с прошлой выдачи (y = 0, не нормализован)
    pub direction: Vec3,
}

impl NavigationCadence {
    /// Один wake: решить, нужно ли переиздать destination
    ///
    /// `None` если target нет или он стоит на месте (exact compare).
    /// При выдаче обновляет last_destination / last_position / delta_direction.
    pub fn refresh(&mut self, position: Vec3, target_position: Option<Vec3>) -> Option<NavigationUpdate> {
        let destination = target_position?;
        if self.last_destination == Some(destination) {
            return None;
        }

        self.last_destination = Some(destination);
        let mut delta = position - self.last_position;
        delta.y = 0.0;
        self.delta_direction = delta;
        self.last_position = position;

        Some(NavigationUpdate {
            destination,
            direction: delta,
        })
    }
}

/// Система: navigation cadence (Update)
///
/// Cadence живёт в компоненте владельца: despawn = loop остановлен.
pub fn navigation_cadence(
    mut movers: Query<(
        Entity,
        &Transform,
        &PursuitTarget,
        &mut NavigationCadence,
        &mut NavAgent,
        &mut Locomotion,
    )>,
    targets: Query<&Transform>,
    entities: &Entities,
    time: Res<Time>,
    mut path_requests: EventWriter<PathRequested>,
) {
    let delta = time.delta_secs();

    for (entity, transform, target, mut navigation, mut agent, mut locomotion) in movers.iter_mut() {
        if !navigation.cadence.tick(delta) {
            continue;
        }

        // Despawned target = нет target
        let target_position = target
            .live(entities)
            .and_then(|t| targets.get(t).ok())
            .map(|t| t.translation);

        let Some(update) = navigation.refresh(transform.translation, target_position) else {
            continue;
        };

        agent.set_destination(update.destination);
        locomotion.set_direction(update.direction);
        path_requests.write(PathRequested {
            entity,
            destination: update.destination,
        });

        crate::log(&format!(
            "🧭 {:?}: path → {:?} (direction {:?})",
            entity, update.destination, locomotion.direction
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn test_refresh_without_target_is_noop() {
        let mut navigation = NavigationCadence::new(0.25, Vec3::ZERO);
        assert_eq!(navigation.refresh(Vec3::X, None), None);
        assert_eq!(navigation.last_destination, None);
        assert_eq!(navigation.last_position, Vec3::ZERO);
    }

    #[test]
    fn test_refresh_issues_only_when_target_moved() {
        let mut navigation = NavigationCadence::new(0.25, Vec3::ZERO);
        let target = Vec3::new(5.0, 0.0, 5.0);

        let first = navigation.refresh(Vec3::new(1.0, 2.0, 0.0), Some(target));
        assert_eq!(
            first,
            Some(NavigationUpdate {
                destination: target,
                direction: Vec3::new(1.0, 0.0, 0.0),
            })
        );

        // Target стоит → ничего, sample не обновляется
        assert_eq!(navigation.refresh(Vec3::new(2.0, 0.0, 0.0), Some(target)), None);
        assert_eq!(navigation.last_position, Vec3::new(1.0, 2.0, 0.0));

        // Target сдвинулся → новый destination, delta от последнего sample
        let moved = navigation.refresh(Vec3::new(3.0, 0.0, 1.0), Some(Vec3::new(6.0, 0.0, 5.0)));
        assert_eq!(moved.map(|u| u.direction), Some(Vec3::new(2.0, 0.0, 1.0)));
    }

    #[test]
    fn test_target_at_origin_is_issued() {
        let mut navigation = NavigationCadence::new(0.25, Vec3::ZERO);
        assert!(navigation.refresh(Vec3::ZERO, Some(Vec3::ZERO)).is_some());
    }

    fn setup_world(interval: f32) -> (World, Entity, Entity) {
        let mut world = World::new();
        world.init_resource::<Time>();
        world.init_resource::<Events<PathRequested>>();

        let target = world.spawn(Transform::from_xyz(4.0, 0.0, -4.0)).id();
        let mover = world
            .spawn((
                Transform::default(),
                PursuitTarget(Some(target)),
                NavigationCadence::new(interval, Vec3::ZERO),
                NavAgent::default(),
                Locomotion::default(),
            ))
            .id();
        (world, mover, target)
    }

    fn advance(world: &mut World, seconds: f32) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
        world
            .run_system_once(navigation_cadence)
            .expect("navigation system should run");
    }

    fn drain_requests(world: &mut World) -> Vec<PathRequested> {
        world
            .resource_mut::<Events<PathRequested>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_stationary_target_issues_at_most_one_destination() {
        let (mut world, mover, _target) = setup_world(0.25);

        // Первый wake на первом tick, второй через interval
        advance(&mut world, 0.016);
        advance(&mut world, 0.3);

        let requests = drain_requests(&mut world);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].entity, mover);
        assert_eq!(
            world.get::<NavAgent>(mover).map(|a| a.destination),
            Some(Some(Vec3::new(4.0, 0.0, -4.0)))
        );
    }

    #[test]
    fn test_moving_target_reissued_on_next_wake_only() {
        let (mut world, mover, target) = setup_world(0.25);

        advance(&mut world, 0.016);
        assert_eq!(drain_requests(&mut world).len(), 1);

        if let Some(mut transform) = world.get_mut::<Transform>(target) {
            transform.translation = Vec3::new(8.0, 0.0, 0.0);
        }
        if let Some(mut transform) = world.get_mut::<Transform>(mover) {
            transform.translation = Vec3::new(0.0, 1.0, -3.0);
        }

        // Ещё не wake
        advance(&mut world, 0.1);
        assert!(drain_requests(&mut world).is_empty());

        advance(&mut world, 0.2);
        let requests = drain_requests(&mut world);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].destination, Vec3::new(8.0, 0.0, 0.0));

        // Direction = нормализованное смещение без y
        let direction = world.get::<Locomotion>(mover).map(|l| l.direction);
        assert_eq!(direction, Some(Vec3::NEG_Z));
    }

    #[test]
    fn test_despawned_target_is_treated_as_none() {
        let (mut world, mover, target) = setup_world(0.25);
        world.despawn(target);

        advance(&mut world, 0.016);

        assert!(drain_requests(&mut world).is_empty());
        assert_eq!(world.get::<NavAgent>(mover).and_then(|a| a.destination), None);
    }
}

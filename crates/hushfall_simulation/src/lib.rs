//! Hushfall Simulation Core
//!
//! Headless ECS-симуляция stealth/horror геймплея на Bevy 0.16:
//! locomotion персонажей, navigation cadence, footstep → sound → hearing,
//! first-person контроллер игрока с action raycast, подбор предметов,
//! простой AI охранника.
//!
//! Engine (рендер, анимация, pathfinding, аудио, UI) остаётся внешним слоем.
//! Симуляция пишет sink-компоненты/события и читает input/perception.

use bevy::ecs::schedule::ExecutorKind;
use bevy::prelude::*;

pub mod ai;
pub mod collision_layers;
pub mod components;
pub mod config;
pub mod driver;
pub mod footsteps;
pub mod input;
pub mod items;
pub mod locomotion;
pub mod logger;
pub mod navigation;
pub mod perception;
pub mod player;
pub mod schedules;
pub mod spawn;

pub use ai::{GuardBrain, GuardState};
pub use components::*;
pub use config::{
    CharacterConfig, ConfigError, GaitParams, GuardConfig, PlayerControllerConfig,
    SimulationConfig, StepSoundFactors,
};
pub use driver::{SimulationDriver, FIXED_DT};
pub use footsteps::{FootstepEvent, SoundEmitted};
pub use input::{InputAxis, InputState};
pub use items::ItemPickedUp;
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, log_with_level, set_log_level,
    set_logger, set_logger_if_needed, LogLevel, LogPrinter,
};
pub use navigation::PathRequested;
pub use perception::{PerceptionEvent, PerceptionMark};
pub use player::{ActionActivated, Hud};
pub use schedules::{Cadence, FixedPhase, FramePhase};
pub use spawn::{spawn_guard, spawn_player, spawn_primary_item, SetupError};

/// Главный plugin симуляции (все геймплейные подсистемы)
///
/// FixedUpdate: Decide → Locomotion → Integrate
/// Update: Steer → Actions → Perception
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PathRequested>()
            .add_event::<FootstepEvent>()
            .add_event::<SoundEmitted>()
            .add_event::<PerceptionEvent>()
            .add_event::<ActionActivated>()
            .add_event::<ItemPickedUp>()
            .init_resource::<InputState>()
            .init_resource::<Hud>()
            .init_resource::<SimulationConfig>();

        // Single-threaded: симуляцию мутирует один логический поток
        app.edit_schedule(FixedUpdate, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        })
        .edit_schedule(Update, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        });

        app.configure_sets(
            FixedUpdate,
            (
                FixedPhase::Decide,
                FixedPhase::Locomotion,
                FixedPhase::Integrate,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (FramePhase::Steer, FramePhase::Actions, FramePhase::Perception).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                (player::player_fixed_input, ai::guard_think)
                    .chain()
                    .in_set(FixedPhase::Decide),
                locomotion::drive_locomotion.in_set(FixedPhase::Locomotion),
            ),
        )
        .add_systems(
            Update,
            (
                (player::player_look, navigation::navigation_cadence)
                    .chain()
                    .in_set(FramePhase::Steer),
                (
                    player::scan_actions,
                    player::evaluate_active_action,
                    items::pickup_primary_items,
                )
                    .chain()
                    .in_set(FramePhase::Actions),
                (
                    footsteps::emit_footsteps,
                    perception::hear_sounds,
                    perception::dispatch_perception,
                )
                    .chain()
                    .in_set(FramePhase::Perception),
            ),
        );
    }
}

/// Headless интеграция движения (вместо engine physics body / nav agent)
///
/// Хост с настоящей физикой этот plugin не добавляет.
pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            locomotion::integrate_velocity.in_set(FixedPhase::Integrate),
        );
    }
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

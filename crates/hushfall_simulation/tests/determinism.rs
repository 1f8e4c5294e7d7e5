//! Тесты детерминизма
//!
//! Один и тот же input script → идентичные snapshot'ы мира

use bevy::prelude::*;
use hushfall_simulation::{
    spawn_guard, spawn_player, spawn_primary_item, world_snapshot, FootstepEvent, GuardBrain,
    InputAxis, InputState, Locomotion, NavAgent, PhysicsBody, PrimaryItems, SimulationConfig,
    SimulationDriver,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAME_COUNT: usize = 600;

/// Скриптованный input: вперёд, поворот, присед, бег, action
fn scripted_input(frame: usize) -> InputState {
    match frame {
        0..=119 => InputState::default().with(InputAxis::Vertical, 1.0),
        120..=179 => InputState::default()
            .with(InputAxis::CameraX, 1.5)
            .with(InputAxis::CameraY, -0.5)
            .with(InputAxis::Crouch, 1.0),
        180..=299 => InputState::default()
            .with(InputAxis::Vertical, 1.0)
            .with(InputAxis::Horizontal, -0.4)
            .with(InputAxis::Run, 1.0),
        300..=329 => InputState::default().with(InputAxis::Action, 1.0),
        _ => InputState::default()
            .with(InputAxis::Vertical, -1.0)
            .with(InputAxis::Lantern, 1.0),
    }
}

fn run_simulation(frame_count: usize) -> Vec<Vec<u8>> {
    let mut driver = SimulationDriver::new(SimulationConfig::default()).expect("valid config");
    let player = driver.spawn(|commands, config| {
        let player = spawn_player(commands, Vec3::ZERO, config);
        spawn_guard(commands, Vec3::new(3.0, 0.0, -12.0), config);
        spawn_guard(commands, Vec3::new(-6.0, 0.0, -4.0), config);
        spawn_primary_item(commands, "cellar key", Vec3::new(0.0, 1.6, -4.0), 2.0);
        player
    });
    driver.init().expect("rigs are complete");

    for frame in 0..frame_count {
        driver.set_input(scripted_input(frame));
        if frame % 15 == 0 {
            let label = if frame % 30 == 0 { "LeftFootRun" } else { "RightFootWalk" };
            driver.send_event(FootstepEvent::new(player, label, "step_wood"));
        }
        driver.advance(FRAME_DT);
    }

    let world = driver.world_mut();
    vec![
        world_snapshot::<Transform>(world),
        world_snapshot::<PhysicsBody>(world),
        world_snapshot::<Locomotion>(world),
        world_snapshot::<NavAgent>(world),
        world_snapshot::<GuardBrain>(world),
        world_snapshot::<PrimaryItems>(world),
    ]
}

#[test]
fn test_determinism_same_script() {
    let snapshot1 = run_simulation(FRAME_COUNT);
    let snapshot2 = run_simulation(FRAME_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Одинаковый input script дал разные результаты!"
    );
}

#[test]
fn test_determinism_multiple_runs() {
    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(FRAME_COUNT / 2)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_script_actually_moves_the_world() {
    let start = run_simulation(0);
    let end = run_simulation(FRAME_COUNT);
    assert_ne!(start[0], end[0], "Transform snapshot не изменился");
}

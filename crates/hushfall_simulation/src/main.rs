//! Headless прогон: игрок подкрадывается к ключу, охранник слышит шаги
//!
//! Запуск: `hushfall_simulation [config.json]`

use std::process::ExitCode;

use bevy::prelude::*;
use hushfall_simulation::{
    log_error, log_info, spawn_guard, spawn_player, spawn_primary_item, FootstepEvent, GuardBrain,
    InputAxis, InputState, PrimaryItems, SimulationConfig, SimulationDriver,
};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> ExitCode {
    hushfall_simulation::init_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match SimulationConfig::from_json_str(&json) {
                Ok(config) => config,
                Err(error) => {
                    log_error(&format!("❌ {}: {}", path, error));
                    return ExitCode::FAILURE;
                }
            },
            Err(error) => {
                log_error(&format!("❌ cannot read {}: {}", path, error));
                return ExitCode::FAILURE;
            }
        },
        None => SimulationConfig::default(),
    };

    let mut driver = match SimulationDriver::new(config) {
        Ok(driver) => driver,
        Err(error) => {
            log_error(&format!("❌ {}", error));
            return ExitCode::FAILURE;
        }
    };

    let (player, guard) = driver.spawn(|commands, config| {
        let player = spawn_player(commands, Vec3::ZERO, config);
        let guard = spawn_guard(commands, Vec3::new(4.0, 0.0, -6.0), config);
        spawn_primary_item(commands, "cellar key", Vec3::new(0.0, 1.6, -5.0), 2.0);
        (player, guard)
    });

    if let Err(error) = driver.init() {
        log_error(&format!("❌ {}", error));
        return ExitCode::FAILURE;
    }

    // 1. Крадёмся вперёд (2с)
    run_phase(
        &mut driver,
        player,
        InputState::default()
            .with(InputAxis::Vertical, 1.0)
            .with(InputAxis::Crouch, 1.0),
        120,
    );
    // 2. Пытаемся подобрать ключ
    run_phase(
        &mut driver,
        player,
        InputState::default().with(InputAxis::Action, 1.0),
        30,
    );
    // 3. Убегаем назад
    run_phase(
        &mut driver,
        player,
        InputState::default()
            .with(InputAxis::Vertical, -1.0)
            .with(InputAxis::Run, 1.0),
        120,
    );

    let items = driver
        .world()
        .get::<PrimaryItems>(player)
        .map(|items| items.items.len())
        .unwrap_or_default();
    let guard_state = driver
        .world()
        .get::<GuardBrain>(guard)
        .map(|brain| format!("{:?}", brain.state))
        .unwrap_or_default();
    log_info(&format!(
        "✅ Session done: {} item(s) carried, guard {}",
        items, guard_state
    ));

    ExitCode::SUCCESS
}

/// Прогоняет `frames` кадров с фиксированным input'ом
///
/// Animation engine нет, поэтому шаги эмулируются: метка по текущему gait
/// каждые 20 кадров.
fn run_phase(driver: &mut SimulationDriver, player: Entity, input: InputState, frames: usize) {
    driver.set_input(input);
    for frame in 0..frames {
        if frame % 20 == 0 {
            if let Some(label) = footstep_label(driver, player, frame / 20) {
                driver.send_event(FootstepEvent::new(player, label, "step_wood"));
            }
        }
        driver.advance(FRAME_DT);

        if let Some(hint) = driver.hud_hint() {
            if frame == 0 {
                log_info(&format!("💬 HUD: {}", hint));
            }
        }
    }
}

fn footstep_label(driver: &SimulationDriver, player: Entity, step: usize) -> Option<&'static str> {
    use hushfall_simulation::{Gait, Locomotion};

    let locomotion = driver.world().get::<Locomotion>(player)?;
    let left = step % 2 == 0;
    let label = match (locomotion.gait, left) {
        (Gait::Idle, _) => return None,
        (Gait::WalkCrouch, true) => "LeftFootCrouch",
        (Gait::WalkCrouch, false) => "RightFootCrouch",
        (Gait::Walk, true) => "LeftFootWalk",
        (Gait::Walk, false) => "RightFootWalk",
        (Gait::Run, true) => "LeftFootRun",
        (Gait::Run, false) => "RightFootRun",
    };
    Some(label)
}

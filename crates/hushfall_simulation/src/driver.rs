//! SimulationDriver: явный lifecycle вместо engine callbacks
//!
//! ```text
//! new(config)  → validate + App (plugins, resources)
//! spawn(..)    → персонажи / предметы
//! init()       → finish plugins + verify rigs
//! fixed_tick() → FixedUpdate (input decisions, locomotion, integration)
//! tick()       → Update (look, navigation, actions, perception)
//! ```
//!
//! Глобального scheduler'а нет: время двигает только хост. `Time` (generic)
//! перед каждым schedule получает delta этого шага, так что fixed и frame
//! системы видят свой dt.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::{ConfigError, SimulationConfig};
use crate::input::InputState;
use crate::player::Hud;
use crate::spawn::{verify_character_rigs, SetupError};
use crate::{HeadlessPhysicsPlugin, SimulationPlugin};

/// Fixed timestep (50Hz)
pub const FIXED_DT: f32 = 1.0 / 50.0;

pub struct SimulationDriver {
    app: App,
    config: SimulationConfig,
    initialized: bool,
    /// Недоигранное fixed время для `advance()`
    accumulator: f32,
}

impl SimulationDriver {
    /// Создаёт headless симуляцию (с HeadlessPhysicsPlugin)
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        crate::init_logger();

        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .insert_resource(config.clone())
            .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin));

        Ok(Self {
            app,
            config,
            initialized: false,
            accumulator: 0.0,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::new(SimulationConfig::from_json_str(json)?)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Spawn через Commands (команды применяются сразу)
    pub fn spawn<R>(&mut self, spawn: impl FnOnce(&mut Commands, &SimulationConfig) -> R) -> R {
        let config = &self.config;
        let world = self.app.world_mut();
        let result = {
            let mut commands = world.commands();
            spawn(&mut commands, config)
        };
        world.flush();
        result
    }

    /// Завершает сборку App и проверяет персонажей
    ///
    /// Повторный вызов только перепроверяет rigs (после новых spawn'ов).
    pub fn init(&mut self) -> Result<(), SetupError> {
        if !self.initialized {
            self.app.finish();
            self.app.cleanup();
            self.initialized = true;
        }
        verify_character_rigs(self.app.world_mut())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Один fixed step (FixedUpdate)
    pub fn fixed_tick(&mut self, dt: f32) {
        self.advance_time(dt);
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    /// Один frame (First → Update); First обновляет event буферы
    pub fn tick(&mut self, dt: f32) {
        self.advance_time(dt);
        let world = self.app.world_mut();
        world.run_schedule(First);
        world.run_schedule(Update);
    }

    /// Frame длиной `dt`: сначала накопившиеся fixed steps, потом frame
    pub fn advance(&mut self, dt: f32) {
        self.accumulator += dt.max(0.0);
        while self.accumulator >= FIXED_DT {
            self.fixed_tick(FIXED_DT);
            self.accumulator -= FIXED_DT;
        }
        self.tick(dt);
    }

    pub fn set_input(&mut self, input: InputState) {
        self.app.world_mut().insert_resource(input);
    }

    pub fn send_event<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Забрать все накопленные события типа `E` (engine sink side)
    pub fn drain_events<E: Event>(&mut self) -> Vec<E> {
        self.app
            .world_mut()
            .get_resource_mut::<Events<E>>()
            .map(|mut events| events.drain().collect())
            .unwrap_or_default()
    }

    pub fn hud_hint(&self) -> Option<&str> {
        self.app.world().get_resource::<Hud>().and_then(|hud| hud.hint())
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    fn advance_time(&mut self, dt: f32) {
        // Отрицательный / NaN dt → нулевой шаг
        let delta = Duration::try_from_secs_f32(dt).unwrap_or_default();
        self.app.world_mut().resource_mut::<Time>().advance_by(delta);
    }
}

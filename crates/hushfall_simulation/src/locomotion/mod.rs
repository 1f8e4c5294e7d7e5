//! Locomotion state machine
//!
//! Состояния: Idle/Stay, Walk, Run, WalkCrouch + независимый crouch флаг
//! (Crouch/Stand). Переходы командуются снаружи каждый tick (player input
//! или AI), таймеров нет.
//!
//! Два режима движения, ровно один активен за tick:
//! - **free locomotion** (нет pursuit target): velocity пишется напрямую
//! - **agent locomotion** (есть target): скорость отдаётся NavAgent,
//!   direction используется только для animation blend

pub mod systems;


pub use systems::{drive_locomotion, integrate_velocity};

use bevy::prelude::*;

use crate::components::{
    AnimatorParams, CharacterKind, Gait, Locomotion, LocomotionCommand, NavAgent, PhysicsBody,
};
use crate::config::{CharacterConfig, GaitParams};

/// Заёмный вид на компоненты одного персонажа
///
/// Собирается системой из query item'а; вся locomotion логика живёт здесь
/// и тестируется без App.
pub struct CharacterRig<'a> {
    pub entity: Entity,
    pub kind: CharacterKind,
    pub transform: &'a Transform,
    pub tuning: &'a CharacterConfig,
    /// Живой pursuit target (despawned target = `None`)
    pub target: Option<Entity>,
    pub locomotion: &'a mut Locomotion,
    pub body: &'a mut PhysicsBody,
    pub agent: &'a mut NavAgent,
    pub animator: &'a mut AnimatorParams,
}

impl CharacterRig<'_> {
    /// Move: один шаг ускорения (free) или конфигурация агента (target)
    pub fn move_with(&mut self, command: LocomotionCommand) {
        self.animator.is_moving = true;
        self.animator.is_running = command.is_running;
        self.animator.is_crouching = command.is_crouching;
        self.locomotion.is_crouching = command.is_crouching;
        self.set_gait(if command.is_running {
            Gait::Run
        } else if command.is_crouching {
            Gait::WalkCrouch
        } else {
            Gait::Walk
        });

        let direction = self.locomotion.direction;
        let forward = *self.transform.forward();
        let right = *self.transform.right();

        if self.target.is_none() {
            self.animator.set_blend(direction.x, direction.z);

            // direction в локальном пространстве: z = вперёд, x = вправо
            let relative = (forward * direction.z + right * direction.x).normalize_or_zero();
            let max = command.max_velocity;
            let current = self.body.horizontal_velocity();

            let next = if current.length_squared() < max * max {
                (current + relative * command.acceleration).clamp_length_max(max)
            } else {
                relative * max
            };
            self.body.set_horizontal_velocity(next);
        } else {
            self.agent.is_stopped = false;
            self.agent.acceleration = command.max_velocity;
            self.agent.speed = command.max_velocity;

            // direction в world space → проекция на локальные оси для blend
            let relative =
                Vec3::new(right.dot(direction), 0.0, forward.dot(direction)).normalize_or_zero();
            self.animator.set_blend(relative.x, relative.z);
        }
    }

    pub fn stay(&mut self) {
        self.animator.set_blend(0.0, 0.0);
        self.animator.is_moving = false;
        self.animator.is_running = false;
        self.animator.is_crouching = false;
        self.locomotion.is_crouching = false;
        self.set_gait(Gait::Idle);
        self.rest();
    }

    pub fn walk(&mut self) {
        let GaitParams {
            max_velocity,
            acceleration,
        } = self.tuning.walk;
        self.move_with(LocomotionCommand {
            max_velocity,
            acceleration,
            is_running: false,
            is_crouching: false,
        });
    }

    pub fn run(&mut self) {
        let GaitParams {
            max_velocity,
            acceleration,
        } = self.tuning.run;
        self.move_with(LocomotionCommand {
            max_velocity,
            acceleration,
            is_running: true,
            is_crouching: false,
        });
    }

    pub fn walk_crouch(&mut self) {
        let GaitParams {
            max_velocity,
            acceleration,
        } = self.tuning.crouch;
        self.move_with(LocomotionCommand {
            max_velocity,
            acceleration,
            is_running: false,
            is_crouching: true,
        });
    }

    pub fn crouch(&mut self) {
        self.animator.is_crouching = true;
        self.locomotion.is_crouching = true;
    }

    pub fn stand(&mut self) {
        self.animator.is_crouching = false;
        self.locomotion.is_crouching = false;
    }

    /// Per-kind rest hook (вызывается из Stay)
    fn rest(&mut self) {
        match self.kind {
            // Игрок без input'а не скользит
            CharacterKind::Player => self.body.set_horizontal_velocity(Vec3::ZERO),
            CharacterKind::Guard => self.agent.is_stopped = true,
        }
    }

    fn set_gait(&mut self, gait: Gait) {
        if self.locomotion.gait != gait {
            crate::log(&format!(
                "🚶 {:?} ({:?}): gait {:?} → {:?}",
                self.entity, self.kind, self.locomotion.gait, gait
            ));
            self.locomotion.gait = gait;
        }
    }
}

//! Базовые компоненты персонажа: Character, Locomotion, PhysicsBody, PursuitTarget

use bevy::ecs::entity::Entities;
use bevy::prelude::*;

use crate::components::{AnimatorParams, MovementCommand, NavAgent, PostureCommand};
use crate::config::CharacterConfig;

/// Вектор короче этого считается нулевым (нет направления)
pub const DIRECTION_EPSILON: f32 = 1e-6;

/// Вид персонажа: tagged variant вместо виртуальных hooks
///
/// Per-kind поведение (rest hook, perception reactions) выбирается через
/// явный `match` по этому enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum CharacterKind {
    Player,
    Guard,
}

/// Персонаж (игрок, охранник): базовый компонент для всего что ходит
///
/// Автоматически добавляет locomotion/navigation/animator компоненты через
/// Required Components.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(
    Transform,
    CharacterConfig,
    Locomotion,
    PhysicsBody,
    PursuitTarget,
    NavAgent,
    AnimatorParams,
    MovementCommand,
    PostureCommand
)]
pub struct Character {
    pub kind: CharacterKind,
}

impl Character {
    pub fn player() -> Self {
        Self {
            kind: CharacterKind::Player,
        }
    }

    pub fn guard() -> Self {
        Self {
            kind: CharacterKind::Guard,
        }
    }
}

/// Текущий gait (для логов и внешнего наблюдения)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Gait {
    #[default]
    Idle,
    Walk,
    Run,
    WalkCrouch,
}

/// Locomotion state персонажа
///
/// Инвариант: `direction` либо нормализован, либо `Vec3::ZERO`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Locomotion {
    /// Steering направление (normalized или ZERO)
    pub direction: Vec3,
    /// Crouch флаг (ставится и Move, и Crouch/Stand)
    pub is_crouching: bool,
    pub gait: Gait,
}

impl Locomotion {
    /// Сохранить steering вектор (нулевой вход → нет движения)
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = if direction.length_squared() <= DIRECTION_EPSILON {
            Vec3::ZERO
        } else {
            direction.normalize()
        };
    }
}

/// Физическое тело (velocity пишется напрямую для free locomotion)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    pub velocity: Vec3,
}

impl PhysicsBody {
    pub fn horizontal_velocity(&self) -> Vec3 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z)
    }

    /// Заменить XZ velocity, сохранив Y (gravity: забота физики)
    pub fn set_horizontal_velocity(&mut self, horizontal: Vec3) {
        self.velocity.x = horizontal.x;
        self.velocity.z = horizontal.z;
    }
}

/// Pursuit target (non-owning)
///
/// `Some` → движение через NavAgent, `None` → free locomotion.
/// Сброс не влияет на lifecycle целевой entity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PursuitTarget(pub Option<Entity>);

impl PursuitTarget {
    pub fn set(&mut self, target: Option<Entity>) {
        if self.0 != target {
            self.0 = target;
        }
    }

    pub fn get(&self) -> Option<Entity> {
        self.0
    }

    /// Target, который ещё существует (despawned target = `None`)
    ///
    /// Все locomotion/navigation системы выбирают free/agent режим через него.
    pub fn live(&self, entities: &Entities) -> Option<Entity> {
        self.0.filter(|target| entities.contains(*target))
    }
}

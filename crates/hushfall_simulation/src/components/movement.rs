//! Movement компоненты: команды gait/posture, navigation agent, navigation cadence

use bevy::prelude::*;

use crate::schedules::Cadence;

/// Параметры одного вызова Move (transient, не хранится между tick'ами)
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct LocomotionCommand {
    pub max_velocity: f32,
    pub acceleration: f32,
    pub is_running: bool,
    pub is_crouching: bool,
}

/// Команда gait для персонажа
///
/// Архитектура:
/// - Player input / AI пишут MovementCommand (high-level intent)
/// - drive_locomotion забирает (take) команду ОДИН раз за fixed tick
/// - `None` = команды нет, locomotion не трогается
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub enum MovementCommand {
    #[default]
    None,
    /// Стоять: обнулить blend, сбросить run/crouch, per-kind rest hook
    Stay,
    Walk,
    Run,
    WalkCrouch,
    /// Произвольные параметры (кат-сцены, скриптовые движения)
    Move(LocomotionCommand),
}

impl MovementCommand {
    /// Забрать команду (остаётся `None`)
    pub fn take(&mut self) -> MovementCommand {
        std::mem::take(self)
    }
}

/// Команда позы: независима от gait
///
/// Crouch/Stand меняют только crouch флаг, velocity не трогают.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum PostureCommand {
    #[default]
    None,
    Crouch,
    Stand,
}

impl PostureCommand {
    pub fn take(&mut self) -> PostureCommand {
        std::mem::take(self)
    }
}

/// Navigation agent sink (pathfinding делает engine)
///
/// Симуляция только конфигурирует: destination / is_stopped / speed / acceleration.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    pub destination: Option<Vec3>,
    pub is_stopped: bool,
    pub speed: f32,
    pub acceleration: f32,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            is_stopped: true,
            speed: 0.0,
            acceleration: 0.0,
        }
    }
}

impl NavAgent {
    pub fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }
}

/// Navigation cadence state (periodic path refresh к pursuit target)
///
/// Мутируется ТОЛЬКО navigation cadence системой.
/// Инвариант: destination переиздаётся только если target сдвинулся.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct NavigationCadence {
    pub cadence: Cadence,
    /// Последний выданный destination (`None` = ещё не выдавали)
    pub last_destination: Option<Vec3>,
    /// Позиция персонажа при последней выдаче destination
    pub last_position: Vec3,
    /// Смещение с прошлой выдачи (y = 0)
    pub delta_direction: Vec3,
}

impl NavigationCadence {
    pub fn new(interval: f32, position: Vec3) -> Self {
        Self {
            cadence: Cadence::new(interval),
            last_destination: None,
            last_position: position,
            delta_direction: Vec3::ZERO,
        }
    }
}

impl Default for NavigationCadence {
    fn default() -> Self {
        Self::new(0.25, Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_consumed_once() {
        let mut command = MovementCommand::Run;
        assert_eq!(command.take(), MovementCommand::Run);
        assert_eq!(command.take(), MovementCommand::None);

        let mut posture = PostureCommand::Crouch;
        assert_eq!(posture.take(), PostureCommand::Crouch);
        assert_eq!(posture, PostureCommand::None);
    }

    #[test]
    fn test_nav_agent_starts_stopped() {
        let agent = NavAgent::default();
        assert!(agent.is_stopped);
        assert_eq!(agent.destination, None);
    }
}

//! Guard FSM state

use bevy::prelude::*;

use crate::perception::PerceptionMark;

/// Guard FSM состояния
#[derive(Debug, Clone, PartialEq, Default, Reflect)]
pub enum GuardState {
    /// Стоит на посту
    #[default]
    Idle,

    /// Услышал шум: идёт проверить (шагом)
    Investigating {
        target: Entity,
        /// Где услышали (для логов; движение идёт к живому target)
        position: Vec3,
    },

    /// Видит цель: бежит за ней
    Chasing {
        target: Entity,
        /// Секунды до потери цели без нового sight
        forget_timer: f32,
    },
}

impl GuardState {
    pub fn target(&self) -> Option<Entity> {
        match self {
            GuardState::Idle => None,
            GuardState::Investigating { target, .. } | GuardState::Chasing { target, .. } => {
                Some(*target)
            }
        }
    }
}

#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GuardBrain {
    pub state: GuardState,
}

impl GuardBrain {
    /// Hear hook: шум переводит в Investigating (погоня важнее)
    pub fn on_heard(&mut self, guard: Entity, mark: PerceptionMark) {
        if matches!(self.state, GuardState::Chasing { .. }) {
            return;
        }
        self.transition(
            guard,
            GuardState::Investigating {
                target: mark.source,
                position: mark.position,
            },
        );
    }

    /// Sight hook: видимая цель → Chasing, таймер сбрасывается
    pub fn on_sighted(&mut self, guard: Entity, mark: PerceptionMark, chase_memory: f32) {
        self.transition(
            guard,
            GuardState::Chasing {
                target: mark.source,
                forget_timer: chase_memory,
            },
        );
    }

    pub fn transition(&mut self, guard: Entity, next: GuardState) {
        let changed = std::mem::discriminant(&self.state) != std::mem::discriminant(&next)
            || self.state.target() != next.target();
        if changed {
            crate::log(&format!(
                "🛡️ Guard {:?}: {:?} → {:?}",
                guard, self.state, next
            ));
        }
        self.state = next;
    }
}

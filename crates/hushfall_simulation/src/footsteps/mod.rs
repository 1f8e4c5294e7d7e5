//! Footstep emitter bridge
//!
//! Animation engine шлёт `FootstepEvent` с текстовой меткой шага.
//! Метка → (нога, gait) → (emitter entity, множитель громкости) →
//! `SoundEmitted`. Неизвестные метки молча игнорируются.

use bevy::prelude::*;

use crate::components::FootstepEmitters;
use crate::config::{CharacterConfig, StepSoundFactors};

/// Animation event: персонаж поставил ногу
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FootstepEvent {
    pub entity: Entity,
    pub label: String,
    /// Ссылка на звуковой ассет (engine резолвит сам)
    pub sound_reference: String,
}

impl FootstepEvent {
    pub fn new(entity: Entity, label: impl Into<String>, sound_reference: impl Into<String>) -> Self {
        Self {
            entity,
            label: label.into(),
            sound_reference: sound_reference.into(),
        }
    }
}

/// Звук, выпущенный emitter'ом (engine микширует; AI слышит через hearing bridge)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SoundEmitted {
    pub emitter: Entity,
    pub owner: Entity,
    pub reference: String,
    pub looped: bool,
    pub spatial: bool,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foot {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepGait {
    Crouch,
    Walk,
    Run,
}

impl StepGait {
    pub fn factor(self, factors: &StepSoundFactors) -> f32 {
        match self {
            StepGait::Crouch => factors.crouch,
            StepGait::Walk => factors.walk,
            StepGait::Run => factors.run,
        }
    }
}

/// Известные метки шагов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootstepLabel {
    LeftFootCrouch,
    LeftFootWalk,
    LeftFootRun,
    RightFootCrouch,
    RightFootWalk,
    RightFootRun,
}

impl FootstepLabel {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "LeftFootCrouch" => Some(Self::LeftFootCrouch),
            "LeftFootWalk" => Some(Self::LeftFootWalk),
            "LeftFootRun" => Some(Self::LeftFootRun),
            "RightFootCrouch" => Some(Self::RightFootCrouch),
            "RightFootWalk" => Some(Self::RightFootWalk),
            "RightFootRun" => Some(Self::RightFootRun),
            _ => None,
        }
    }

    pub fn route(self) -> (Foot, StepGait) {
        match self {
            Self::LeftFootCrouch => (Foot::Left, StepGait::Crouch),
            Self::LeftFootWalk => (Foot::Left, StepGait::Walk),
            Self::LeftFootRun => (Foot::Left, StepGait::Run),
            Self::RightFootCrouch => (Foot::Right, StepGait::Crouch),
            Self::RightFootWalk => (Foot::Right, StepGait::Walk),
            Self::RightFootRun => (Foot::Right, StepGait::Run),
        }
    }
}

impl FootstepEmitters {
    pub fn for_foot(&self, foot: Foot) -> Entity {
        match foot {
            Foot::Left => self.left,
            Foot::Right => self.right,
        }
    }
}

/// Система: FootstepEvent → SoundEmitted
pub fn emit_footsteps(
    mut footsteps: EventReader<FootstepEvent>,
    characters: Query<(&FootstepEmitters, &CharacterConfig)>,
    mut sounds: EventWriter<SoundEmitted>,
) {
    for step in footsteps.read() {
        let Some(label) = FootstepLabel::parse(&step.label) else {
            continue;
        };
        let Ok((emitters, config)) = characters.get(step.entity) else {
            continue;
        };

        let (foot, gait) = label.route();
        sounds.write(SoundEmitted {
            emitter: emitters.for_foot(foot),
            owner: step.entity,
            reference: step.sound_reference.clone(),
            looped: false,
            spatial: false,
            intensity: gait.factor(&config.step_sounds),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn setup() -> (World, Entity, FootstepEmitters) {
        let mut world = World::new();
        world.init_resource::<Events<FootstepEvent>>();
        world.init_resource::<Events<SoundEmitted>>();

        let left = world.spawn_empty().id();
        let right = world.spawn_empty().id();
        let emitters = FootstepEmitters { left, right };
        let character = world.spawn((emitters, CharacterConfig::default())).id();
        (world, character, emitters)
    }

    fn run(world: &mut World, steps: Vec<FootstepEvent>) -> Vec<SoundEmitted> {
        for step in steps {
            world.send_event(step);
        }
        world
            .run_system_once(emit_footsteps)
            .expect("footstep system should run");
        // Каждый run_system_once читает буфер с нуля: обработанные шаги убираем
        world.resource_mut::<Events<FootstepEvent>>().clear();
        world
            .resource_mut::<Events<SoundEmitted>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_six_labels_route_to_foot_and_factor() {
        let (mut world, character, emitters) = setup();
        let cases = [
            ("LeftFootCrouch", emitters.left, 0.5),
            ("LeftFootWalk", emitters.left, 1.0),
            ("LeftFootRun", emitters.left, 2.0),
            ("RightFootCrouch", emitters.right, 0.5),
            ("RightFootWalk", emitters.right, 1.0),
            ("RightFootRun", emitters.right, 2.0),
        ];

        for (label, emitter, intensity) in cases {
            let sounds = run(&mut world, vec![FootstepEvent::new(character, label, "step_gravel")]);
            assert_eq!(
                sounds,
                vec![SoundEmitted {
                    emitter,
                    owner: character,
                    reference: "step_gravel".into(),
                    looped: false,
                    spatial: false,
                    intensity,
                }],
                "label {}",
                label
            );
        }
    }

    #[test]
    fn test_unknown_label_emits_nothing() {
        let (mut world, character, _) = setup();
        let sounds = run(
            &mut world,
            vec![
                FootstepEvent::new(character, "LeftFootJump", "step"),
                FootstepEvent::new(character, "leftfootwalk", "step"),
                FootstepEvent::new(character, "", "step"),
            ],
        );
        assert!(sounds.is_empty());
    }

    #[test]
    fn test_factors_come_from_character_tuning() {
        let (mut world, character, _) = setup();
        if let Some(mut config) = world.get_mut::<CharacterConfig>(character) {
            config.step_sounds.run = 3.5;
        }
        let sounds = run(&mut world, vec![FootstepEvent::new(character, "RightFootRun", "step")]);
        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].intensity, 3.5);
    }
}

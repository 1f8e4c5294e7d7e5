//! Perception сенсоры (read-only capability queries)

use bevy::prelude::*;

/// Глаза персонажа
///
/// `has_actions`: может ли владелец сейчас взаимодействовать с миром
/// (action scan игрока работает только при `true`).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Eyes {
    pub has_actions: bool,
}

impl Default for Eyes {
    fn default() -> Self {
        Self { has_actions: true }
    }
}

/// Уши персонажа
///
/// Звук с intensity `i` слышен на дистанции `range * i`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Ears {
    pub range: f32,
}

impl Default for Ears {
    fn default() -> Self {
        Self { range: 8.0 }
    }
}

impl Ears {
    pub fn can_hear(&self, distance: f32, intensity: f32) -> bool {
        distance <= self.range * intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hearing_scales_with_intensity() {
        let ears = Ears { range: 8.0 };
        assert!(ears.can_hear(4.0, 0.5)); // crouch шаг: 4м
        assert!(!ears.can_hear(4.1, 0.5));
        assert!(ears.can_hear(16.0, 2.0)); // бег: 16м
        assert!(!ears.can_hear(0.1, 0.0));
    }
}

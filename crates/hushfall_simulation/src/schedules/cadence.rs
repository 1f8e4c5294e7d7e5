//! Cadence: repeating countdown для periodic задач
//!
//! Один wake → одна единица работы → перезапуск через `interval`.
//! Первый wake происходит на первом tick.

use bevy::prelude::Reflect;

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Cadence {
    interval: f32,
    remaining: f32,
}

impl Cadence {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            remaining: 0.0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Продвинуть countdown на `delta` секунд.
    ///
    /// Возвращает `true` если задача должна проснуться в этом tick.
    /// Не больше одного wake за tick, остаток не накапливается.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.remaining -= delta;
        if self.remaining > 0.0 {
            return false;
        }
        self.remaining = self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_wakes_immediately() {
        let mut cadence = Cadence::new(0.25);
        assert!(cadence.tick(0.016));
    }

    #[test]
    fn test_wakes_once_per_interval() {
        let mut cadence = Cadence::new(0.25);
        assert!(cadence.tick(0.1)); // t=0.1, первый wake

        assert!(!cadence.tick(0.1)); // 0.15 осталось
        assert!(!cadence.tick(0.1)); // 0.05 осталось
        assert!(cadence.tick(0.1)); // истёк → wake, перезапуск
        assert!(!cadence.tick(0.1));
    }

    #[test]
    fn test_huge_delta_wakes_only_once() {
        let mut cadence = Cadence::new(0.3);
        assert!(cadence.tick(0.0));

        assert!(cadence.tick(10.0));
        assert!(!cadence.tick(0.1));
    }
}

//! HUD hint sink (engine UI рисует текст, симуляция только пишет)

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub hint: Option<String>,
}

impl Hud {
    pub fn set_hint(&mut self, hint: &str) {
        if self.hint.as_deref() != Some(hint) {
            self.hint = Some(hint.to_string());
        }
    }

    pub fn clear_hint(&mut self) {
        self.hint = None;
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

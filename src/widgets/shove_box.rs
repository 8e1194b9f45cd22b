use serde::{Deserialize, Serialize};

/// Starting position, step and limit for a [`ShoveBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoveSettings {
    pub start: u16,
    pub step: u16,
    pub limit: u16,
}

impl Default for ShoveSettings {
    fn default() -> Self {
        Self {
            start: 10,
            step: 4,
            limit: 100,
        }
    }
}

/// A box that moves right each time it is shoved, up to a limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoveBox {
    position: u16,
    settings: ShoveSettings,
}

impl ShoveBox {
    pub fn new(settings: ShoveSettings) -> Self {
        Self {
            position: settings.start.min(settings.limit),
            settings,
        }
    }

    pub fn position(&self) -> u16 {
        self.position
    }

    pub fn limit(&self) -> u16 {
        self.settings.limit
    }

    pub fn is_at_limit(&self) -> bool {
        self.position >= self.settings.limit
    }

    pub fn shove(&mut self) {
        self.position = self
            .position
            .saturating_add(self.settings.step)
            .min(self.settings.limit);
    }
}

impl Default for ShoveBox {
    fn default() -> Self {
        Self::new(ShoveSettings::default())
    }
}

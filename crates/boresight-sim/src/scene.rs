//! Mutable scene state: one observer, one target.

use std::collections::BTreeSet;

use boresight_core::config::SceneConfig;
use boresight_core::enums::{Control, EntityRole};
use boresight_core::types::{Orientation, Position3};

/// Everything a frame integrates or evaluates.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub observer: Position3,
    pub target: Position3,
    pub orientation: Orientation,
    /// Controls currently held down.
    pub held: BTreeSet<Control>,
}

impl Scene {
    /// Initial scene from a config, with no controls held.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            observer: config.observer,
            target: config.target,
            orientation: config.orientation,
            held: BTreeSet::new(),
        }
    }

    pub fn position_mut(&mut self, role: EntityRole) -> &mut Position3 {
        match role {
            EntityRole::Observer => &mut self.observer,
            EntityRole::Target => &mut self.target,
        }
    }

    pub fn set_held(&mut self, control: Control, held: bool) {
        if held {
            self.held.insert(control);
        } else {
            self.held.remove(&control);
        }
    }
}

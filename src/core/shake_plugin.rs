use bevy::prelude::*;

use crate::core::components::ShakeController;
use crate::systems::events::{shake_event_reader_system, ShakeEvent};
use crate::systems::shake_update::{update_shake_controllers, ShakeRng};

pub struct ShakePlugin {
    /// Seed for the shake RNG. Shakes are deterministic for a fixed seed and
    /// tick sequence.
    pub seed: u64,
}

impl Default for ShakePlugin {
    fn default() -> Self {
        ShakePlugin { seed: 132 }
    }
}

impl Plugin for ShakePlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(ShakeRng::new(self.seed))
            .add_event::<ShakeEvent>()
            .add_systems(
                Update,
                (shake_event_reader_system, update_shake_controllers).chain(),
            )
            .register_type::<ShakeController>();
    }
}

use bevy::prelude::*;

use crate::core::components::ShakeController;
use crate::core::shake_request::ShakeMode;

#[derive(Event)]
pub enum ShakeEvent {
    Start {
        duration: f32,
        strength: f32,
        frequency: f32,
        mode: ShakeMode,
    },
}

/// Routes `ShakeEvent`s to the scene's controller. With several controllers
/// present the first one in query order wins.
pub fn shake_event_reader_system(
    mut shake_reader: EventReader<ShakeEvent>,
    mut controllers: Query<&mut ShakeController>,
) {
    for shake_event in shake_reader.read() {
        let mut iter = controllers.iter_mut();

        let Some(mut controller) = iter.next() else {
            error!("No ShakeController found in the world. Dropping shake event.");
            continue;
        };

        if iter.next().is_some() {
            warn!("Multiple ShakeController instances found. Using the first one.");
        }

        match *shake_event {
            ShakeEvent::Start {
                duration,
                strength,
                frequency,
                mode,
            } => {
                controller.start_shake(duration, strength, frequency, mode);
            }
        }
    }
}

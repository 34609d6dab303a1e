use bevy::prelude::*;
use bevy_prng::WyRand;
use rand::SeedableRng;

use crate::core::components::ShakeController;
use crate::core::session::ShakeSession;

#[derive(Resource)]
pub struct ShakeRng(WyRand);

impl ShakeRng {

    pub fn new(seed: u64) -> Self {
        ShakeRng(WyRand::seed_from_u64(seed))
    }

    pub fn rng_mut(&mut self) -> &mut WyRand {
        &mut self.0
    }
}

/// Begins pending sessions and advances live ones by the frame delta,
/// writing the result onto each session's target transform.
pub fn update_shake_controllers(
    time: Res<Time>,
    mut shake_rng: ResMut<ShakeRng>,
    mut controllers: Query<(Entity, &mut ShakeController)>,
    mut transforms: Query<&mut Transform>,
) {
    let dt = time.delta_seconds();

    for (entity, mut controller) in controllers.iter_mut() {
        let controller = &mut *controller;

        // Pending requests start before ticking, so the baseline is the
        // transform value as of the start_shake call.
        if let Some(request) = controller.pending.take() {
            let target = controller.resolve_target(entity);
            match transforms.get_mut(target) {
                Ok(transform) => {
                    controller.session = Some(ShakeSession::new(request, target, &transform));
                }
                Err(_) => {
                    warn!(
                        "Shake target {:?} has no Transform. Ignoring shake request.",
                        target
                    );
                }
            }
        }

        let Some(session) = controller.session.as_mut() else {
            continue;
        };

        let Ok(mut transform) = transforms.get_mut(session.target_entity) else {
            // Target despawned mid-shake.
            controller.session = None;
            continue;
        };

        if session.tick(&mut transform, &controller.fade_out_curve, shake_rng.rng_mut(), dt) {
            controller.session = None;
        }
    }
}

use bevy::prelude::*;

use crate::core::envelope::FadeOutCurve;
use crate::core::session::ShakeSession;
use crate::core::shake_request::{ShakeMode, ShakeRequest};

/// Drives shake effects on its own entity or an assigned target.
///
/// Usage: fetch the controller in a system and call
/// `controller.start_shake(duration, strength, frequency, mode)`, or send a
/// `ShakeEvent` when no reference is at hand.
#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct ShakeController {
    /// Enable to shake a custom entity instead of the controller's own.
    pub use_custom_target: bool,
    /// The entity whose `Transform` receives the shake.
    pub custom_target: Option<Entity>,
    #[reflect(ignore)]
    pub fade_out_curve: FadeOutCurve,
    #[reflect(ignore)]
    pub(crate) pending: Option<ShakeRequest>,
    #[reflect(ignore)]
    pub(crate) session: Option<ShakeSession>,
}

impl Default for ShakeController {
    fn default() -> Self {
        ShakeController {
            use_custom_target: false,
            custom_target: None,
            fade_out_curve: FadeOutCurve::default(),
            pending: None,
            session: None,
        }
    }
}

impl ShakeController {
    pub fn new() -> Self {
        ShakeController::default()
    }

    pub fn with_target(target: Entity) -> Self {
        ShakeController {
            use_custom_target: true,
            custom_target: Some(target),
            ..Default::default()
        }
    }

    /// Triggers a shake effect, replacing any running one. The new shake's
    /// baseline is the target's transform value at this instant, wherever
    /// the previous shake left it.
    ///
    /// `duration` is in seconds, `strength` in degrees (rotation) or world
    /// units (position), `frequency` in target re-rolls per second. Both
    /// `duration` and `frequency` must be positive; a zero frequency divides
    /// by zero in the re-roll interval and is a caller error.
    pub fn start_shake(&mut self, duration: f32, strength: f32, frequency: f32, mode: ShakeMode) {
        self.session = None;
        self.pending = Some(ShakeRequest {
            duration,
            strength,
            frequency,
            mode,
        });
    }

    /// Aborts the running shake, leaving the transform wherever the last
    /// tick put it.
    pub fn stop_shake(&mut self) {
        self.pending = None;
        self.session = None;
    }

    pub fn is_shaking(&self) -> bool {
        self.pending.is_some() || self.session.is_some()
    }

    // The entity this controller perturbs, given its own entity id.
    pub(crate) fn resolve_target(&self, own_entity: Entity) -> Entity {
        if self.use_custom_target {
            match self.custom_target {
                Some(target) => target,
                None => {
                    warn!(
                        "ShakeController on {:?}: 'use_custom_target' is enabled but no target has been assigned. Falling back to own transform.",
                        own_entity
                    );
                    own_entity
                }
            }
        } else {
            own_entity
        }
    }
}

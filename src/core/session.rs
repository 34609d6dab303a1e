use bevy::prelude::*;
use rand::Rng;

use crate::core::envelope::FadeOutCurve;
use crate::core::shake_request::{ShakeMode, ShakeRequest};

/// Seconds spent easing back onto the captured baseline once the main loop ends.
pub const SETTLE_TIME: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakePhase {
    Active,
    Settling,
}

// Mode-tagged value state. Both arms run the same loop, differing only in
// how targets are sampled and how values are interpolated.
#[derive(Debug, Clone, Copy)]
pub enum ShakeState {
    Rotation {
        original: Quat,
        current: Quat,
        target: Quat,
    },
    Position {
        original: Vec3,
        current: Vec3,
        target: Vec3,
    },
}

/// State of one in-flight shake. At most one per controller; starting a new
/// shake drops the previous session without restoring its baseline.
#[derive(Debug, Clone)]
pub struct ShakeSession {
    pub request: ShakeRequest,
    pub target_entity: Entity,
    pub phase: ShakePhase,
    pub elapsed: f32,
    pub since_last_target: f32,
    pub settle_progress: f32,
    pub state: ShakeState,
}

impl ShakeSession {
    /// Captures the baseline from the target's current local transform.
    pub fn new(request: ShakeRequest, target_entity: Entity, transform: &Transform) -> Self {
        let state = match request.mode {
            ShakeMode::Rotation => ShakeState::Rotation {
                original: transform.rotation,
                current: transform.rotation,
                target: Quat::IDENTITY,
            },
            ShakeMode::Position => ShakeState::Position {
                original: transform.translation,
                current: transform.translation,
                target: transform.translation,
            },
        };

        ShakeSession {
            request,
            target_entity,
            phase: ShakePhase::Active,
            elapsed: 0.0,
            // Starts at a full interval so the first tick draws a target.
            since_last_target: 1.0 / request.frequency,
            settle_progress: 0.0,
            state,
        }
    }

    /// Advances the shake by `dt` seconds and writes the new value onto
    /// `transform`. Returns true once the transform has been restored to the
    /// baseline and the session is finished.
    pub fn tick(
        &mut self,
        transform: &mut Transform,
        curve: &FadeOutCurve,
        rng: &mut impl Rng,
        dt: f32,
    ) -> bool {
        match self.phase {
            ShakePhase::Active => {
                self.tick_active(transform, curve, rng, dt);
                false
            }
            ShakePhase::Settling => self.tick_settling(transform, dt),
        }
    }

    fn tick_active(
        &mut self,
        transform: &mut Transform,
        curve: &FadeOutCurve,
        rng: &mut impl Rng,
        dt: f32,
    ) {
        self.elapsed += dt;
        self.since_last_target += dt;

        let envelope = curve.evaluate(self.elapsed / self.request.duration);
        let interval = 1.0 / self.request.frequency;

        if self.since_last_target >= interval {
            self.reroll_target(envelope, rng);
            self.since_last_target = 0.0;
        }

        let s = (dt * self.request.frequency).min(1.0);
        match &mut self.state {
            ShakeState::Rotation { current, target, .. } => {
                *current = current.slerp(*target, s);
                transform.rotation = *current;
            }
            ShakeState::Position { current, target, .. } => {
                *current = current.lerp(*target, s);
                transform.translation = *current;
            }
        }

        if self.elapsed >= self.request.duration {
            self.phase = ShakePhase::Settling;
        }
    }

    fn reroll_target(&mut self, envelope: f32, rng: &mut impl Rng) {
        let amplitude = self.request.strength * envelope;

        match &mut self.state {
            ShakeState::Rotation { original, target, .. } => {
                let random_euler = Vec3::new(
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                ) * amplitude;

                *target = Quat::from_euler(
                    bevy::math::EulerRot::XYZ,
                    random_euler.x.to_radians(),
                    random_euler.y.to_radians(),
                    random_euler.z.to_radians(),
                ) * *original;
            }
            ShakeState::Position { original, target, .. } => {
                *target = *original + random_in_unit_sphere(rng) * amplitude;
            }
        }
    }

    fn tick_settling(&mut self, transform: &mut Transform, dt: f32) -> bool {
        self.settle_progress += dt / SETTLE_TIME;
        let s = self.settle_progress.min(1.0);

        // Interpolates against its own output each tick, so convergence
        // accelerates as the factor grows. Matches the shipped behavior.
        match &self.state {
            ShakeState::Rotation { original, .. } => {
                transform.rotation = transform.rotation.slerp(*original, s);
            }
            ShakeState::Position { original, .. } => {
                transform.translation = transform.translation.lerp(*original, s);
            }
        }

        if self.settle_progress >= 1.0 {
            // Exact reset, clears accumulated interpolation error.
            match &self.state {
                ShakeState::Rotation { original, .. } => transform.rotation = *original,
                ShakeState::Position { original, .. } => transform.translation = *original,
            }
            true
        } else {
            false
        }
    }
}

fn random_in_unit_sphere(rng: &mut impl Rng) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.gen_range(-1.0f32..=1.0),
            rng.gen_range(-1.0f32..=1.0),
            rng.gen_range(-1.0f32..=1.0),
        );
        if candidate.length_squared() <= 1.0 {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_prng::WyRand;
    use rand::SeedableRng;

    #[test]
    fn test_random_in_unit_sphere_stays_inside() {
        let mut rng = WyRand::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length() <= 1.0);
        }
    }

    #[test]
    fn test_first_tick_draws_a_target() {
        let transform = Transform::default();
        let request = ShakeRequest {
            duration: 1.0,
            strength: 2.0,
            frequency: 4.0,
            mode: ShakeMode::Position,
        };
        let mut session = ShakeSession::new(request, Entity::PLACEHOLDER, &transform);
        let mut rng = WyRand::seed_from_u64(99);
        let curve = FadeOutCurve::default();

        let mut transform = transform;
        session.tick(&mut transform, &curve, &mut rng, 1.0 / 60.0);

        assert_eq!(session.since_last_target, 0.0);
        let ShakeState::Position { original, target, .. } = session.state else {
            panic!("expected position state");
        };
        assert_ne!(target, original);
    }
}

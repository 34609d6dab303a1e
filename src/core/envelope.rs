/// Amplitude envelope evaluated over normalized shake progress.
///
/// Piecewise-linear between keyframes. The default curve fades from full
/// strength at progress 0.0 down to nothing at progress 1.0.
#[derive(Debug, Clone)]
pub struct FadeOutCurve {
    keys: Vec<(f32, f32)>,
}

impl FadeOutCurve {
    /// Keys must be sorted by time.
    ///
    /// # Panics
    /// Panics if `keys` is empty.
    pub fn from_keys(keys: Vec<(f32, f32)>) -> Self {
        assert!(!keys.is_empty(), "FadeOutCurve needs at least one key");
        debug_assert!(keys.windows(2).all(|w| w[0].0 <= w[1].0));
        FadeOutCurve { keys }
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let (first_time, first_value) = self.keys[0];
        let (last_time, last_value) = self.keys[self.keys.len() - 1];

        if t <= first_time {
            return first_value;
        }
        if t >= last_time {
            return last_value;
        }

        for window in self.keys.windows(2) {
            let (t0, v0) = window[0];
            let (t1, v1) = window[1];
            if t <= t1 {
                if t1 == t0 {
                    return v1;
                }
                let s = (t - t0) / (t1 - t0);
                return v0 + (v1 - v0) * s;
            }
        }

        last_value
    }
}

impl Default for FadeOutCurve {
    fn default() -> Self {
        FadeOutCurve::from_keys(vec![(0.0, 1.0), (1.0, 0.0)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let curve = FadeOutCurve::default();
        assert_eq!(curve.evaluate(0.0), 1.0);
        assert_eq!(curve.evaluate(1.0), 0.0);
    }

    #[test]
    fn test_default_monotonically_non_increasing() {
        let curve = FadeOutCurve::default();
        let mut previous = curve.evaluate(0.0);
        for i in 1..=100 {
            let value = curve.evaluate(i as f32 / 100.0);
            assert!(value <= previous);
            previous = value;
        }
    }

    #[test]
    fn test_clamps_outside_key_range() {
        let curve = FadeOutCurve::default();
        assert_eq!(curve.evaluate(-0.5), 1.0);
        assert_eq!(curve.evaluate(1.5), 0.0);
    }

    #[test]
    #[should_panic(expected = "at least one key")]
    fn test_empty_keys_rejected() {
        FadeOutCurve::from_keys(Vec::new());
    }

    #[test]
    fn test_single_key_is_constant() {
        let curve = FadeOutCurve::from_keys(vec![(0.0, 0.5)]);
        assert_eq!(curve.evaluate(0.0), 0.5);
        assert_eq!(curve.evaluate(1.0), 0.5);
    }

    #[test]
    fn test_multi_key_interpolation() {
        let curve = FadeOutCurve::from_keys(vec![(0.0, 1.0), (0.5, 0.8), (1.0, 0.0)]);
        assert!((curve.evaluate(0.25) - 0.9).abs() < 1e-6);
        assert!((curve.evaluate(0.75) - 0.4).abs() < 1e-6);
    }
}

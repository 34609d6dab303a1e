//! Screen shake effects for Bevy: rotation or position jitter with a
//! fade-out envelope and a smooth settle back onto the original transform.

pub mod core;
pub mod systems;

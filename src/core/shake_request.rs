use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakeMode {
    Rotation,
    Position,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ShakeRequest {
    pub duration: f32,   // how long the shake lasts in seconds
    pub strength: f32,   // degrees for rotation, world units for position
    pub frequency: f32,  // target re-rolls per second
    pub mode: ShakeMode,
}

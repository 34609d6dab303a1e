pub mod events;
pub mod shake_update;

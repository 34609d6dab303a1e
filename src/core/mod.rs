pub mod components;
pub mod envelope;
pub mod session;
pub mod shake_plugin;
pub mod shake_request;

pub mod hud;
pub mod input;
pub mod session;
pub mod targets;

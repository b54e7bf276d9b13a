pub mod android_jni;
pub mod classify;
pub mod config;
pub mod error;
pub mod guidance;
pub mod maneuver;
pub mod presenter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

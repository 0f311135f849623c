//! Notification domain module

mod application_name;
mod display_duration;
mod lifecycle;

pub use application_name::ApplicationName;
pub use display_duration::{DisplayDuration, TimeUnit, DEFAULT_DISPLAY_DURATION};
pub use lifecycle::LifecycleState;

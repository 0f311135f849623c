//! Notification capability contract

use url::Url;

use crate::domain::error::{NotificationError, UnsupportedCapability};
use crate::domain::notification::LifecycleState;
use crate::domain::platform::BackendKind;

/// Result of a capability call that a backend may not implement
pub type CapabilityResult<T> = Result<T, UnsupportedCapability>;

/// Port for a platform notification backend.
///
/// A handle is opened once, shows any number of notifications and is then
/// closed. All calls block until the backend is done.
pub trait Notification: Send {
    /// Complete any setup required to show notifications.
    ///
    /// # Errors
    /// `UnsupportedOperatingSystem` if the host does not match the backend,
    /// `Failure` if setup fails or the handle was already opened.
    fn open(&mut self) -> Result<(), NotificationError>;

    /// Display a notification.
    ///
    /// # Arguments
    /// * `title` - The notification title, passed through verbatim
    /// * `message` - The notification body, passed through verbatim
    fn show(&mut self, title: &str, message: &str) -> Result<(), NotificationError>;

    /// Release backend resources.
    fn close(&mut self) -> Result<(), NotificationError>;

    /// Make subsequent notifications sticky.
    fn sticky(&mut self) -> CapabilityResult<()>;

    fn set_sticky(&mut self, sticky: bool) -> CapabilityResult<()>;

    fn is_sticky(&self) -> bool;

    /// URL opened when the user clicks a notification.
    fn set_callback_url(&mut self, url: Url) -> CapabilityResult<()>;

    fn remove_callback(&mut self) -> CapabilityResult<()>;

    fn callback_url(&self) -> CapabilityResult<Option<&Url>>;

    /// Current lifecycle state
    fn state(&self) -> LifecycleState;

    /// Which backend this is
    fn kind(&self) -> BackendKind;
}

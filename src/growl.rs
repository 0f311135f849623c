//! Growl notification facade
//!
//! Picks the OS X or Windows backend once, at construction, and forwards
//! every call to it.

use tracing::{debug, warn};
use url::Url;

use crate::application::ports::{CapabilityResult, GntpConnector, Notification, ScriptEngineManager};
use crate::domain::config::NotificationSettings;
use crate::domain::error::NotificationError;
use crate::domain::notification::{ApplicationName, LifecycleState};
use crate::domain::platform::{BackendKind, HostOs};
use crate::infrastructure::osx::{OsxGrowlNotification, SystemScriptEngines};
use crate::infrastructure::windows::{TcpGntpConnector, WindowsGrowlNotification};

/// Host classification plus the collaborators each backend talks to
pub struct Platform {
    pub host: HostOs,
    pub script_engines: Box<dyn ScriptEngineManager>,
    pub gntp_connector: Box<dyn GntpConnector>,
}

impl Platform {
    /// The running host with osascript and a TCP GNTP relay
    pub fn system() -> Self {
        Self {
            host: HostOs::current(),
            script_engines: Box::new(SystemScriptEngines::new()),
            gntp_connector: Box::new(TcpGntpConnector::new()),
        }
    }
}

/// The backend chosen for this host
pub enum Backend {
    Osx(OsxGrowlNotification),
    Windows(WindowsGrowlNotification),
}

/// Growl notifications for the running platform.
///
/// ```no_run
/// use growl_notify::{ApplicationName, GrowlNotification, Notification};
///
/// let name = ApplicationName::new("Test Application")?;
/// let mut notification = GrowlNotification::new(name)?;
/// notification.open()?;
/// notification.show("Hello", "World")?;
/// notification.close()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct GrowlNotification {
    application_name: ApplicationName,
    backend: Backend,
}

impl GrowlNotification {
    /// Create a notifier for the running host with default settings.
    ///
    /// # Errors
    /// `UnsupportedOperatingSystem` on hosts other than OS X and Windows.
    pub fn new(application_name: ApplicationName) -> Result<Self, NotificationError> {
        Self::with_settings(application_name, &NotificationSettings::empty())
    }

    /// Create a notifier for the running host
    pub fn with_settings(
        application_name: ApplicationName,
        settings: &NotificationSettings,
    ) -> Result<Self, NotificationError> {
        Self::with_platform(application_name, settings, Platform::system())
    }

    /// Create a notifier for an explicit host and collaborators.
    /// Only the collaborator of the selected backend is kept.
    pub fn with_platform(
        application_name: ApplicationName,
        settings: &NotificationSettings,
        platform: Platform,
    ) -> Result<Self, NotificationError> {
        let Platform {
            host,
            script_engines,
            gntp_connector,
        } = platform;

        let backend = match host.backend_kind() {
            Some(BackendKind::Osx) => Backend::Osx(
                OsxGrowlNotification::with_collaborators(
                    application_name.clone(),
                    host,
                    script_engines,
                )
                .with_bundle_id(settings.notifier_bundle_id_or_default())
                .with_icon_application(settings.icon_application_or_default()),
            ),
            Some(BackendKind::Windows) => {
                let duration = settings.display_duration().map_err(|e| {
                    NotificationError::caused_by("Invalid notification settings", e)
                })?;
                Backend::Windows(
                    WindowsGrowlNotification::with_collaborators(
                        application_name.clone(),
                        host,
                        gntp_connector,
                    )
                    .with_relay(
                        settings.relay_host_or_default(),
                        settings.relay_port_or_default(),
                    )
                    .with_display_duration(duration),
                )
            }
            None => {
                return Err(NotificationError::unsupported_os(format!(
                    "Only Windows and Mac OS X operating systems are supported, not {}",
                    host
                )));
            }
        };

        let mut notification = Self {
            application_name,
            backend,
        };
        notification.apply_settings(settings)?;
        debug!(backend = %notification.backend_kind(), "Notification backend selected");
        Ok(notification)
    }

    fn apply_settings(&mut self, settings: &NotificationSettings) -> Result<(), NotificationError> {
        if settings.sticky_or_default() {
            if let Err(e) = self.sticky() {
                warn!(error = %e, "Ignoring sticky setting");
            }
        }

        let callback_url = settings
            .callback_url()
            .map_err(|e| NotificationError::caused_by("Invalid notification settings", e))?;
        if let Some(url) = callback_url {
            if let Err(e) = self.set_callback_url(url) {
                warn!(error = %e, "Ignoring callback URL setting");
            }
        }
        Ok(())
    }

    /// Name given at construction
    pub fn application_name(&self) -> &ApplicationName {
        &self.application_name
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend().kind()
    }

    /// The Windows backend, for its display duration setters
    pub fn windows_mut(&mut self) -> Option<&mut WindowsGrowlNotification> {
        match &mut self.backend {
            Backend::Windows(backend) => Some(backend),
            Backend::Osx(_) => None,
        }
    }

    /// The OS X backend, for its Growl probe
    pub fn osx(&self) -> Option<&OsxGrowlNotification> {
        match &self.backend {
            Backend::Osx(backend) => Some(backend),
            Backend::Windows(_) => None,
        }
    }

    fn backend(&self) -> &dyn Notification {
        match &self.backend {
            Backend::Osx(backend) => backend,
            Backend::Windows(backend) => backend,
        }
    }

    fn backend_mut(&mut self) -> &mut dyn Notification {
        match &mut self.backend {
            Backend::Osx(backend) => backend,
            Backend::Windows(backend) => backend,
        }
    }
}

impl Notification for GrowlNotification {
    fn open(&mut self) -> Result<(), NotificationError> {
        self.backend_mut().open()
    }

    fn show(&mut self, title: &str, message: &str) -> Result<(), NotificationError> {
        self.backend_mut().show(title, message)
    }

    fn close(&mut self) -> Result<(), NotificationError> {
        self.backend_mut().close()
    }

    fn sticky(&mut self) -> CapabilityResult<()> {
        self.backend_mut().sticky()
    }

    fn set_sticky(&mut self, sticky: bool) -> CapabilityResult<()> {
        self.backend_mut().set_sticky(sticky)
    }

    fn is_sticky(&self) -> bool {
        self.backend().is_sticky()
    }

    fn set_callback_url(&mut self, url: Url) -> CapabilityResult<()> {
        self.backend_mut().set_callback_url(url)
    }

    fn remove_callback(&mut self) -> CapabilityResult<()> {
        self.backend_mut().remove_callback()
    }

    fn callback_url(&self) -> CapabilityResult<Option<&Url>> {
        self.backend().callback_url()
    }

    fn state(&self) -> LifecycleState {
        self.backend().state()
    }

    fn kind(&self) -> BackendKind {
        self.backend().kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(host: HostOs) -> Platform {
        Platform {
            host,
            ..Platform::system()
        }
    }

    fn test_app() -> ApplicationName {
        ApplicationName::new("TestApp").unwrap()
    }

    #[test]
    fn selects_backend_by_host() {
        let osx = GrowlNotification::with_platform(
            test_app(),
            &NotificationSettings::empty(),
            platform(HostOs::MacOs),
        )
        .unwrap();
        assert_eq!(osx.backend_kind(), BackendKind::Osx);
        assert!(osx.osx().is_some());

        let mut windows = GrowlNotification::with_platform(
            test_app(),
            &NotificationSettings::empty(),
            platform(HostOs::Windows),
        )
        .unwrap();
        assert_eq!(windows.kind(), BackendKind::Windows);
        assert!(windows.windows_mut().is_some());
    }

    #[test]
    fn other_hosts_are_unsupported() {
        let err = GrowlNotification::with_platform(
            test_app(),
            &NotificationSettings::empty(),
            platform(HostOs::Other("linux".to_string())),
        )
        .err()
        .unwrap();
        assert!(err.is_unsupported_os());
        assert!(err.message().contains("linux"));
    }

    #[test]
    fn settings_apply_sticky_and_callback() {
        let settings = NotificationSettings {
            sticky: Some(true),
            callback_url: Some("https://example.com/".to_string()),
            ..Default::default()
        };
        let osx =
            GrowlNotification::with_platform(test_app(), &settings, platform(HostOs::MacOs))
                .unwrap();
        assert!(osx.is_sticky());
        assert_eq!(
            osx.callback_url().unwrap().map(Url::as_str),
            Some("https://example.com/")
        );

        // Windows ignores both instead of failing construction
        let windows =
            GrowlNotification::with_platform(test_app(), &settings, platform(HostOs::Windows))
                .unwrap();
        assert!(!windows.is_sticky());
    }

    #[test]
    fn invalid_settings_fail_construction() {
        let settings = NotificationSettings {
            callback_url: Some("not a url".to_string()),
            ..Default::default()
        };
        let err = GrowlNotification::with_platform(test_app(), &settings, platform(HostOs::MacOs))
            .err()
            .unwrap();
        assert_eq!(err.message(), "Invalid notification settings");
    }
}

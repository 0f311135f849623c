//! Growl for Windows notification adapter

use tracing::debug;
use url::Url;

use crate::application::ports::{
    ApplicationInfo, CapabilityResult, GntpClient, GntpConnector, GntpNotification, Notification,
};
use crate::domain::config::{DEFAULT_RELAY_HOST, DEFAULT_RELAY_PORT};
use crate::domain::error::{InvalidArgumentError, NotificationError, UnsupportedCapability};
use crate::domain::notification::{ApplicationName, DisplayDuration, LifecycleState, TimeUnit};
use crate::domain::platform::{BackendKind, HostOs};

use super::gntp::TcpGntpConnector;

/// Message for `show` without a registered client
pub const NO_CLIENT_MESSAGE: &str = "No GNTP client registered - has open() been called?";

/// Growl for Windows notifier speaking GNTP to a local relay.
///
/// Sticky notifications and callback URLs are not available here.
pub struct WindowsGrowlNotification {
    application_name: Option<ApplicationName>,
    host: HostOs,
    connector: Box<dyn GntpConnector>,
    client: Option<Box<dyn GntpClient>>,
    application_info: Option<ApplicationInfo>,
    relay_host: String,
    relay_port: u16,
    duration: DisplayDuration,
    state: LifecycleState,
}

impl WindowsGrowlNotification {
    /// Create an unregistered notifier for the current host
    pub fn new(application_name: ApplicationName) -> Self {
        Self::with_collaborators(
            application_name,
            HostOs::current(),
            Box::new(TcpGntpConnector::new()),
        )
    }

    /// Create with an explicit host and GNTP connector
    pub fn with_collaborators(
        application_name: ApplicationName,
        host: HostOs,
        connector: Box<dyn GntpConnector>,
    ) -> Self {
        Self {
            application_name: Some(application_name),
            host,
            connector,
            client: None,
            application_info: None,
            relay_host: DEFAULT_RELAY_HOST.to_string(),
            relay_port: DEFAULT_RELAY_PORT,
            duration: DisplayDuration::default(),
            state: LifecycleState::Unopened,
        }
    }

    /// Talk to a relay other than localhost:23053
    pub fn with_relay(mut self, host: impl Into<String>, port: u16) -> Self {
        self.relay_host = host.into();
        self.relay_port = port;
        self
    }

    pub fn with_display_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Set how long notifications stay on screen, in the current unit.
    ///
    /// # Errors
    /// Fails if `duration` is less than 1; nothing changes in that case.
    pub fn set_duration(&mut self, duration: i64) -> Result<(), InvalidArgumentError> {
        self.duration = self.duration.with_amount(duration)?;
        Ok(())
    }

    /// Set the unit applied to the duration.
    ///
    /// # Errors
    /// Fails if `unit` is absent; nothing changes in that case.
    pub fn set_time_unit(&mut self, unit: Option<TimeUnit>) -> Result<(), InvalidArgumentError> {
        self.duration = self.duration.with_unit(unit)?;
        Ok(())
    }

    pub fn display_duration(&self) -> DisplayDuration {
        self.duration
    }

    pub fn application_name(&self) -> Option<&ApplicationName> {
        self.application_name.as_ref()
    }

    fn unsupported(capability: &'static str) -> UnsupportedCapability {
        UnsupportedCapability {
            backend: BackendKind::Windows.name(),
            capability,
        }
    }
}

impl Notification for WindowsGrowlNotification {
    fn open(&mut self) -> Result<(), NotificationError> {
        if !self.host.is_windows() {
            return Err(NotificationError::unsupported_os(
                "Operating System is not Windows",
            ));
        }
        if !self.state.can_open() {
            return Err(NotificationError::failure(format!(
                "Notification is {} and cannot be opened",
                self.state
            )));
        }
        let Some(name) = self.application_name.as_ref() else {
            return Err(NotificationError::failure("No application name to register"));
        };

        let info = ApplicationInfo::new(name.as_str()).with_notification_type(name.as_str());
        let mut client = self
            .connector
            .connect(&info, &self.relay_host, self.relay_port)
            .map_err(|e| NotificationError::caused_by("Could not create GNTP client", e))?;
        client
            .register()
            .map_err(|e| NotificationError::caused_by("Could not register with Growl", e))?;

        debug!(application = %name, relay = %self.relay_host, port = self.relay_port, "Registered with Growl");
        self.client = Some(client);
        self.application_info = Some(info);
        self.state = LifecycleState::Open;
        Ok(())
    }

    fn show(&mut self, title: &str, message: &str) -> Result<(), NotificationError> {
        if !self.state.can_show() {
            return Err(NotificationError::failure(NO_CLIENT_MESSAGE));
        }
        let (Some(client), Some(info), Some(name)) = (
            self.client.as_mut(),
            self.application_info.as_ref(),
            self.application_name.as_ref(),
        ) else {
            return Err(NotificationError::failure(NO_CLIENT_MESSAGE));
        };

        let notification = GntpNotification::new(info, name.as_str(), title).text(message);
        debug!(%title, duration = %self.duration, "Sending Growl notification");
        client
            .notify(&notification, self.duration)
            .map_err(|e| NotificationError::caused_by("Could not send notification", e))
    }

    fn close(&mut self) -> Result<(), NotificationError> {
        if self.state == LifecycleState::Closed {
            return Err(NotificationError::failure("GNTP client is already shut down"));
        }

        self.application_name = None;
        self.application_info = None;
        self.state = LifecycleState::Closed;

        match self.client.take() {
            Some(mut client) => {
                debug!(duration = %self.duration, "Shutting down GNTP client");
                client
                    .shutdown(self.duration)
                    .map_err(|e| NotificationError::caused_by("Could not shut down GNTP client", e))
            }
            None => Ok(()),
        }
    }

    fn sticky(&mut self) -> CapabilityResult<()> {
        Ok(())
    }

    fn set_sticky(&mut self, _sticky: bool) -> CapabilityResult<()> {
        Err(Self::unsupported("sticky notifications"))
    }

    fn is_sticky(&self) -> bool {
        false
    }

    fn set_callback_url(&mut self, _url: Url) -> CapabilityResult<()> {
        Err(Self::unsupported("callback URL"))
    }

    fn remove_callback(&mut self) -> CapabilityResult<()> {
        Err(Self::unsupported("callback URL"))
    }

    fn callback_url(&self) -> CapabilityResult<Option<&Url>> {
        Err(Self::unsupported("callback URL"))
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Windows
    }
}

//! Growl notification adapter for OS X

use tracing::{debug, warn};
use url::Url;

use crate::application::ports::{
    CapabilityResult, Notification, ScriptEngineManager, ScriptEvaluator, APPLESCRIPT_ENGINE,
};
use crate::domain::config::{DEFAULT_ICON_APPLICATION, DEFAULT_NOTIFIER_BUNDLE_ID};
use crate::domain::error::NotificationError;
use crate::domain::notification::{ApplicationName, LifecycleState};
use crate::domain::platform::{BackendKind, HostOs};

use super::growl_script::{enabled_probe, NotifyScript};
use super::osascript::SystemScriptEngines;

/// Message for `show` without an engine, before `open` and after `close`
pub const NO_ENGINE_MESSAGE: &str = "No AppleScript engine available - has open() been called?";

/// Message for `show` when the notifier is not running
pub const NO_PROCESS_MESSAGE: &str = "No Growl process located";

/// Growl notifier driven through AppleScript.
///
/// The engine is acquired in `open`. Registration with Growl happens inside
/// every `show`, after probing that the Growl helper is running. The probe
/// and the notification are separate evaluations, so Growl can still exit
/// in between.
pub struct OsxGrowlNotification {
    application_name: Option<ApplicationName>,
    host: HostOs,
    engines: Box<dyn ScriptEngineManager>,
    engine: Option<Box<dyn ScriptEvaluator>>,
    state: LifecycleState,
    bundle_id: String,
    icon_application: String,
    sticky: bool,
    callback_url: Option<Url>,
}

impl OsxGrowlNotification {
    /// Create an unregistered notifier for the current host
    pub fn new(application_name: ApplicationName) -> Self {
        Self::with_collaborators(
            application_name,
            HostOs::current(),
            Box::new(SystemScriptEngines::new()),
        )
    }

    /// Create with an explicit host and scripting engine lookup
    pub fn with_collaborators(
        application_name: ApplicationName,
        host: HostOs,
        engines: Box<dyn ScriptEngineManager>,
    ) -> Self {
        Self {
            application_name: Some(application_name),
            host,
            engines,
            engine: None,
            state: LifecycleState::Unopened,
            bundle_id: DEFAULT_NOTIFIER_BUNDLE_ID.to_string(),
            icon_application: DEFAULT_ICON_APPLICATION.to_string(),
            sticky: false,
            callback_url: None,
        }
    }

    /// Probe for a different notifier bundle identifier
    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id = bundle_id.into();
        self
    }

    /// Register notifications with another application's icon
    pub fn with_icon_application(mut self, application: impl Into<String>) -> Self {
        self.icon_application = application.into();
        self
    }

    pub fn application_name(&self) -> Option<&ApplicationName> {
        self.application_name.as_ref()
    }

    /// Whether Growl is running on this machine.
    ///
    /// Any evaluation error, or a missing engine, reads as `false`.
    pub fn is_growl_enabled(&self) -> bool {
        let Some(engine) = self.engine.as_ref() else {
            return false;
        };

        match engine.evaluate(&enabled_probe(&self.bundle_id)) {
            Ok(value) => {
                debug!(?value, "Growl probe evaluated");
                value.is_positive_count()
            }
            Err(e) => {
                warn!(error = %e, "Growl probe failed, treating Growl as disabled");
                false
            }
        }
    }
}

impl Notification for OsxGrowlNotification {
    fn open(&mut self) -> Result<(), NotificationError> {
        if !self.host.is_mac_os() {
            return Err(NotificationError::unsupported_os(
                "Operating System is not Mac OSX",
            ));
        }
        if !self.state.can_open() {
            return Err(NotificationError::failure(format!(
                "Notification is {} and cannot be opened",
                self.state
            )));
        }

        let engine = self.engines.engine_by_name(APPLESCRIPT_ENGINE).ok_or_else(|| {
            NotificationError::failure("No AppleScript engine is provided by this host")
        })?;

        self.engine = Some(engine);
        self.state = LifecycleState::Open;
        debug!(application = ?self.application_name, "AppleScript engine acquired");
        Ok(())
    }

    fn show(&mut self, title: &str, message: &str) -> Result<(), NotificationError> {
        if !self.state.can_show() {
            return Err(NotificationError::failure(NO_ENGINE_MESSAGE));
        }
        let (Some(engine), Some(application_name)) =
            (self.engine.as_ref(), self.application_name.as_ref())
        else {
            return Err(NotificationError::failure(NO_ENGINE_MESSAGE));
        };

        if !self.is_growl_enabled() {
            return Err(NotificationError::failure(NO_PROCESS_MESSAGE));
        }

        let script = NotifyScript {
            application_name: application_name.as_str(),
            title,
            message,
            bundle_id: &self.bundle_id,
            icon_application: &self.icon_application,
            sticky: self.sticky,
            callback_url: self.callback_url.as_ref(),
        }
        .build();

        debug!(%title, "Posting Growl notification");
        engine
            .evaluate(&script)
            .map_err(|e| NotificationError::caused_by("Could not execute script", e))?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), NotificationError> {
        self.engine = None;
        self.application_name = None;
        self.state = LifecycleState::Closed;
        debug!("AppleScript engine released");
        Ok(())
    }

    fn sticky(&mut self) -> CapabilityResult<()> {
        self.set_sticky(true)
    }

    fn set_sticky(&mut self, sticky: bool) -> CapabilityResult<()> {
        self.sticky = sticky;
        Ok(())
    }

    fn is_sticky(&self) -> bool {
        self.sticky
    }

    fn set_callback_url(&mut self, url: Url) -> CapabilityResult<()> {
        self.callback_url = Some(url);
        Ok(())
    }

    fn remove_callback(&mut self) -> CapabilityResult<()> {
        self.callback_url = None;
        Ok(())
    }

    fn callback_url(&self) -> CapabilityResult<Option<&Url>> {
        Ok(self.callback_url.as_ref())
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Osx
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{ScriptError, ScriptValue};

    type Log = Arc<Mutex<Vec<String>>>;

    /// Replays queued results and records every evaluated program
    struct ScriptedEvaluator {
        results: Arc<Mutex<Vec<Result<ScriptValue, ScriptError>>>>,
        log: Log,
    }

    impl ScriptEvaluator for ScriptedEvaluator {
        fn evaluate(&self, script: &str) -> Result<ScriptValue, ScriptError> {
            self.log.lock().unwrap().push(script.to_string());
            let mut results = self.results.lock().unwrap();
            if results.is_empty() {
                Ok(ScriptValue::Nothing)
            } else {
                results.remove(0)
            }
        }
    }

    struct ScriptedEngines {
        results: Arc<Mutex<Vec<Result<ScriptValue, ScriptError>>>>,
        log: Log,
    }

    impl ScriptEngineManager for ScriptedEngines {
        fn engine_by_name(&self, name: &str) -> Option<Box<dyn ScriptEvaluator>> {
            (name == APPLESCRIPT_ENGINE).then(|| {
                Box::new(ScriptedEvaluator {
                    results: Arc::clone(&self.results),
                    log: Arc::clone(&self.log),
                }) as Box<dyn ScriptEvaluator>
            })
        }
    }

    fn notifier(results: Vec<Result<ScriptValue, ScriptError>>) -> (OsxGrowlNotification, Log) {
        let log: Log = Arc::default();
        let engines = ScriptedEngines {
            results: Arc::new(Mutex::new(results)),
            log: Arc::clone(&log),
        };
        let notifier = OsxGrowlNotification::with_collaborators(
            ApplicationName::new("TestApp").unwrap(),
            HostOs::MacOs,
            Box::new(engines),
        );
        (notifier, log)
    }

    #[test]
    fn open_rejects_other_hosts() {
        let (notifier, _) = notifier(vec![]);
        let mut notifier = OsxGrowlNotification {
            host: HostOs::Windows,
            ..notifier
        };
        let err = notifier.open().unwrap_err();
        assert!(err.is_unsupported_os());
        assert_eq!(notifier.state(), LifecycleState::Unopened);
    }

    #[test]
    fn open_twice_fails() {
        let (mut notifier, _) = notifier(vec![]);
        notifier.open().unwrap();
        let err = notifier.open().unwrap_err();
        assert!(!err.is_unsupported_os());
    }

    #[test]
    fn show_before_open_fails_without_evaluating() {
        let (mut notifier, log) = notifier(vec![]);
        let err = notifier.show("Hello", "World").unwrap_err();
        assert_eq!(err.message(), NO_ENGINE_MESSAGE);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn probe_error_reads_as_disabled() {
        let (mut notifier, log) = notifier(vec![Err(ScriptError::ScriptFailed(
            "boom".to_string(),
        ))]);
        notifier.open().unwrap();
        assert!(!notifier.is_growl_enabled());
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn probe_zero_reads_as_disabled() {
        let (mut notifier, _) = notifier(vec![Ok(ScriptValue::Integer(0))]);
        notifier.open().unwrap();
        let err = notifier.show("Hello", "World").unwrap_err();
        assert_eq!(err.message(), NO_PROCESS_MESSAGE);
    }

    #[test]
    fn show_evaluates_probe_then_notify() {
        let (mut notifier, log) = notifier(vec![Ok(ScriptValue::Integer(1)), Ok(ScriptValue::Nothing)]);
        notifier.open().unwrap();
        notifier.show("Hello", "World").unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 2);
        assert!(log[0].starts_with("tell application \"System Events\""));
        assert!(log[1].contains("application name \"TestApp\""));
        assert!(log[1].contains("description \"World\""));
    }

    #[test]
    fn notify_error_is_wrapped() {
        let (mut notifier, _) = notifier(vec![
            Ok(ScriptValue::Boolean(true)),
            Err(ScriptError::ScriptFailed("syntax error".to_string())),
        ]);
        notifier.open().unwrap();
        let err = notifier.show("Hello", "World").unwrap_err();
        assert_eq!(err.message(), "Could not execute script");
        let cause = std::error::Error::source(&err).unwrap();
        assert!(cause.to_string().contains("syntax error"));
    }

    #[test]
    fn custom_bundle_and_icon_reach_the_script() {
        let (notifier, log) = notifier(vec![Ok(ScriptValue::Integer(1))]);
        let mut notifier = notifier
            .with_bundle_id("com.example.Notifier")
            .with_icon_application("Finder");
        notifier.open().unwrap();
        notifier.show("Hello", "World").unwrap();

        let log = log.lock().unwrap();
        assert!(log[0].contains("\"com.example.Notifier\""));
        assert!(log[1].contains("icon of application \"Finder\""));
    }

    #[test]
    fn close_clears_engine_and_name() {
        let (mut notifier, _) = notifier(vec![]);
        notifier.open().unwrap();
        notifier.close().unwrap();
        assert!(notifier.application_name().is_none());
        assert_eq!(notifier.state(), LifecycleState::Closed);
        let err = notifier.show("Hello", "World").unwrap_err();
        assert_eq!(err.message(), NO_ENGINE_MESSAGE);
        assert!(notifier.open().is_err());
    }

    #[test]
    fn show_requires_open_state() {
        let (mut notifier, log) = notifier(vec![Ok(ScriptValue::Integer(1))]);
        notifier.open().unwrap();
        let mut notifier = OsxGrowlNotification {
            state: LifecycleState::Closed,
            ..notifier
        };
        let err = notifier.show("Hello", "World").unwrap_err();
        assert_eq!(err.message(), NO_ENGINE_MESSAGE);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn sticky_and_callback_are_supported() {
        let (mut notifier, _) = notifier(vec![]);
        assert!(!notifier.is_sticky());
        notifier.sticky().unwrap();
        assert!(notifier.is_sticky());
        notifier.set_sticky(false).unwrap();
        assert!(!notifier.is_sticky());

        let url = Url::parse("https://example.com").unwrap();
        notifier.set_callback_url(url.clone()).unwrap();
        assert_eq!(notifier.callback_url().unwrap(), Some(&url));
        notifier.remove_callback().unwrap();
        assert_eq!(notifier.callback_url().unwrap(), None);
    }
}

//! Notification settings domain module

mod settings;

pub use settings::{
    NotificationSettings, OsxSettings, WindowsSettings, DEFAULT_ICON_APPLICATION,
    DEFAULT_NOTIFIER_BUNDLE_ID, DEFAULT_RELAY_HOST, DEFAULT_RELAY_PORT,
};

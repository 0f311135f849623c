//! AppleScript programs that drive Growl

use url::Url;

use super::script::ScriptBuilder;

const SYSTEM_EVENTS: &str = "System Events";

/// Program returning whether a process with `bundle_id` is running
pub fn enabled_probe(bundle_id: &str) -> String {
    ScriptBuilder::new()
        .add("tell application ")
        .quote(SYSTEM_EVENTS)
        .new_line_with("return count of (every process whose bundle identifier is ")
        .quote(bundle_id)
        .add(") > 0")
        .new_line_with("end tell")
        .build()
}

/// Parameters of a register-and-notify program
#[derive(Debug, Clone)]
pub struct NotifyScript<'a> {
    pub application_name: &'a str,
    pub title: &'a str,
    pub message: &'a str,
    pub bundle_id: &'a str,
    pub icon_application: &'a str,
    pub sticky: bool,
    pub callback_url: Option<&'a Url>,
}

impl NotifyScript<'_> {
    /// Program that re-checks the notifier is running, registers the
    /// application with the title as its only notification type, then
    /// posts the notification.
    pub fn build(&self) -> String {
        let script = ScriptBuilder::new()
            .add("tell application ")
            .quote(SYSTEM_EVENTS)
            .new_line_with("set isRunning to (count of (every process whose bundle identifier is ")
            .quote(self.bundle_id)
            .add(")) > 0")
            .new_line_with("end tell")
            .new_line_with("if isRunning then")
            .new_line_with("tell application id ")
            .quote(self.bundle_id)
            .new_line_with("set the allNotificationsList to ")
            .cont()
            .new_line()
            .array(&[self.title])
            .new_line_with("set the enabledNotificationsList to ")
            .cont()
            .new_line()
            .array(&[self.title])
            .new_line_with("register as application ")
            .cont()
            .new_line()
            .quote(self.application_name)
            .add(" all notifications allNotificationsList ")
            .cont()
            .new_line_with("default notifications enabledNotificationsList ")
            .cont()
            .new_line_with("icon of application ")
            .quote(self.icon_application)
            .new_line_with("notify with name ")
            .quote(self.title)
            .add(" ")
            .cont()
            .new_line_with("title ")
            .quote(self.title)
            .add(" ")
            .cont()
            .new_line_with("description ")
            .quote(self.message)
            .add(" ")
            .cont()
            .new_line_with("application name ")
            .quote(self.application_name);

        let script = if self.sticky {
            script.add(" ").cont().new_line_with("sticky yes")
        } else {
            script
        };

        let script = match self.callback_url {
            Some(url) => script
                .add(" ")
                .cont()
                .new_line_with("callback URL ")
                .quote(url.as_str()),
            None => script,
        };

        script.new_line_with("end tell").new_line_with("end if").build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_world() -> NotifyScript<'static> {
        NotifyScript {
            application_name: "TestApp",
            title: "Hello",
            message: "World",
            bundle_id: "com.Growl.GrowlHelperApp",
            icon_application: "Script Editor",
            sticky: false,
            callback_url: None,
        }
    }

    #[test]
    fn probe_counts_notifier_processes() {
        assert_eq!(
            enabled_probe("com.Growl.GrowlHelperApp"),
            "tell application \"System Events\"\n\
             return count of (every process whose bundle identifier is \"com.Growl.GrowlHelperApp\") > 0\n\
             end tell"
        );
    }

    #[test]
    fn notify_script_layout() {
        let expected = "tell application \"System Events\"\n\
set isRunning to (count of (every process whose bundle identifier is \"com.Growl.GrowlHelperApp\")) > 0\n\
end tell\n\
if isRunning then\n\
tell application id \"com.Growl.GrowlHelperApp\"\n\
set the allNotificationsList to ¬\n\
{\"Hello\"}\n\
set the enabledNotificationsList to ¬\n\
{\"Hello\"}\n\
register as application ¬\n\
\"TestApp\" all notifications allNotificationsList ¬\n\
default notifications enabledNotificationsList ¬\n\
icon of application \"Script Editor\"\n\
notify with name \"Hello\" ¬\n\
title \"Hello\" ¬\n\
description \"World\" ¬\n\
application name \"TestApp\"\n\
end tell\n\
end if";
        assert_eq!(hello_world().build(), expected);
    }

    #[test]
    fn every_continuation_ends_a_line() {
        let script = NotifyScript {
            sticky: true,
            ..hello_world()
        }
        .build();
        for line in script.lines() {
            if let Some(pos) = line.find(super::super::script::CONTINUATION) {
                assert_eq!(pos + '¬'.len_utf8(), line.len(), "line: {}", line);
            }
        }
        assert!(!script.ends_with('¬'));
    }

    #[test]
    fn tell_blocks_are_balanced() {
        let script = hello_world().build();
        let opened = script
            .lines()
            .filter(|l| l.starts_with("tell application"))
            .count();
        let closed = script.lines().filter(|l| *l == "end tell").count();
        assert_eq!(opened, 2);
        assert_eq!(opened, closed);
        assert_eq!(script.matches('"').count() % 2, 0);
    }

    #[test]
    fn sticky_clause_only_when_set() {
        assert!(!hello_world().build().contains("sticky"));
        let script = NotifyScript {
            sticky: true,
            ..hello_world()
        }
        .build();
        assert!(script.contains("application name \"TestApp\" ¬\nsticky yes\nend tell"));
    }

    #[test]
    fn callback_clause_quotes_url() {
        let url = Url::parse("https://example.com/open").unwrap();
        let script = NotifyScript {
            callback_url: Some(&url),
            ..hello_world()
        }
        .build();
        assert!(script.contains("¬\ncallback URL \"https://example.com/open\"\nend tell"));
    }

    #[test]
    fn empty_title_and_message_pass_through() {
        let script = NotifyScript {
            title: "",
            message: "",
            ..hello_world()
        }
        .build();
        assert!(script.contains("{\"\"}"));
        assert!(script.contains("description \"\" ¬"));
    }
}

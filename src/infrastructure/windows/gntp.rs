//! GNTP/1.0 client over TCP
//!
//! Every request opens its own connection to the relay, writes one message
//! and reads the `-OK` / `-ERROR` response. The display duration travels as
//! the `X-Display-Duration` header (milliseconds) and never bounds the call.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration as StdDuration;

use tracing::debug;

use crate::application::ports::{
    ApplicationInfo, GntpClient, GntpConnector, GntpError, GntpNotification,
};
use crate::domain::notification::DisplayDuration;

const VERSION: &str = "GNTP/1.0";
const LINE_END: &str = "\r\n";
const MESSAGE_END: &[u8] = b"\r\n\r\n";
const DISPLAY_DURATION_HEADER: &str = "X-Display-Duration";

/// Read and write timeout for every relay connection
pub const IO_TIMEOUT: StdDuration = StdDuration::from_secs(10);

/// Largest response accepted from a relay
pub const MAX_RESPONSE_LEN: usize = 64 * 1024;

/// Builds TCP clients for a GNTP relay
#[derive(Debug, Default)]
pub struct TcpGntpConnector;

impl TcpGntpConnector {
    pub fn new() -> Self {
        Self
    }
}

impl GntpConnector for TcpGntpConnector {
    fn connect(
        &self,
        info: &ApplicationInfo,
        host: &str,
        port: u16,
    ) -> Result<Box<dyn GntpClient>, GntpError> {
        Ok(Box::new(TcpGntpClient::new(info.clone(), host, port)))
    }
}

/// GNTP client bound to one application and one relay
pub struct TcpGntpClient {
    info: ApplicationInfo,
    address: String,
    shut_down: bool,
}

impl TcpGntpClient {
    pub fn new(info: ApplicationInfo, host: &str, port: u16) -> Self {
        Self {
            info,
            address: format!("{}:{}", host, port),
            shut_down: false,
        }
    }

    /// Send one message and wait for the relay's answer
    fn send(&self, request: &str) -> Result<(), GntpError> {
        if self.shut_down {
            return Err(GntpError::ShutDown);
        }

        let mut stream =
            TcpStream::connect(&self.address).map_err(|e| GntpError::ConnectFailed {
                address: self.address.clone(),
                message: e.to_string(),
            })?;
        stream
            .set_read_timeout(Some(IO_TIMEOUT))
            .and_then(|_| stream.set_write_timeout(Some(IO_TIMEOUT)))
            .map_err(|e| GntpError::Io(e.to_string()))?;

        stream
            .write_all(request.as_bytes())
            .and_then(|_| stream.flush())
            .map_err(|e| GntpError::Io(e.to_string()))?;

        let response = read_message(&mut stream)?;
        debug!(address = %self.address, response = %response.lines().next().unwrap_or(""), "GNTP response");
        parse_response(&response)
    }
}

impl GntpClient for TcpGntpClient {
    fn register(&mut self) -> Result<(), GntpError> {
        self.send(&register_request(&self.info))
    }

    fn notify(
        &mut self,
        notification: &GntpNotification,
        duration: DisplayDuration,
    ) -> Result<(), GntpError> {
        self.send(&notify_request(notification, duration))
    }

    fn shutdown(&mut self, _duration: DisplayDuration) -> Result<(), GntpError> {
        if self.shut_down {
            return Err(GntpError::ShutDown);
        }
        self.shut_down = true;
        Ok(())
    }
}

/// Read until the blank line that ends a response, or until the relay
/// closes the connection
fn read_message(stream: &mut impl Read) -> Result<String, GntpError> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 512];
    loop {
        let n = stream
            .read(&mut chunk)
            .map_err(|e| GntpError::Io(e.to_string()))?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.len() > MAX_RESPONSE_LEN {
            return Err(GntpError::MalformedResponse(format!(
                "response exceeds {} bytes",
                MAX_RESPONSE_LEN
            )));
        }
        if buf.windows(MESSAGE_END.len()).any(|w| w == MESSAGE_END) {
            break;
        }
    }
    String::from_utf8(buf).map_err(|e| GntpError::MalformedResponse(e.to_string()))
}

/// Line breaks in header values are sent as U+2028
fn header(name: &str, value: &str) -> String {
    let value = value.replace("\r\n", "\u{2028}").replace(['\r', '\n'], "\u{2028}");
    format!("{}: {}{}", name, value, LINE_END)
}

/// REGISTER message for an application and its notification types
pub fn register_request(info: &ApplicationInfo) -> String {
    let mut request = format!("{} REGISTER NONE{}", VERSION, LINE_END);
    request.push_str(&header("Application-Name", &info.name));
    request.push_str(&header(
        "Notifications-Count",
        &info.notification_types.len().to_string(),
    ));
    request.push_str(LINE_END);

    for name in &info.notification_types {
        request.push_str(&header("Notification-Name", name));
        request.push_str(&header("Notification-Display-Name", name));
        request.push_str(&header("Notification-Enabled", "True"));
        request.push_str(LINE_END);
    }
    request
}

/// NOTIFY message for one notification shown for `duration`
pub fn notify_request(notification: &GntpNotification, duration: DisplayDuration) -> String {
    let mut request = format!("{} NOTIFY NONE{}", VERSION, LINE_END);
    request.push_str(&header("Application-Name", &notification.application_name));
    request.push_str(&header("Notification-Name", &notification.notification_type));
    request.push_str(&header("Notification-Title", &notification.title));
    if let Some(text) = &notification.text {
        request.push_str(&header("Notification-Text", text));
    }
    request.push_str(&header(
        DISPLAY_DURATION_HEADER,
        &duration.as_std().as_millis().to_string(),
    ));
    request.push_str(LINE_END);
    request
}

/// Interpret a relay response
pub fn parse_response(response: &str) -> Result<(), GntpError> {
    let mut lines = response.lines();
    let status = lines
        .next()
        .ok_or_else(|| GntpError::MalformedResponse("empty response".to_string()))?;

    let mut parts = status.split_whitespace();
    let version = parts.next().unwrap_or("");
    if !version.starts_with("GNTP/") {
        return Err(GntpError::MalformedResponse(status.to_string()));
    }

    match parts.next() {
        Some("-OK") => Ok(()),
        Some("-ERROR") => {
            let mut code = String::new();
            let mut description = String::new();
            for line in lines {
                if let Some((name, value)) = line.split_once(':') {
                    match name.trim() {
                        "Error-Code" => code = value.trim().to_string(),
                        "Error-Description" => description = value.trim().to_string(),
                        _ => {}
                    }
                }
            }
            Err(GntpError::Rejected { code, description })
        }
        _ => Err(GntpError::MalformedResponse(status.to_string())),
    }
}

//! Windows notification infrastructure module
//!
//! Drives Growl for Windows through a GNTP relay.

pub mod gntp;
mod growl;

pub use gntp::{TcpGntpClient, TcpGntpConnector};
pub use growl::{WindowsGrowlNotification, NO_CLIENT_MESSAGE};

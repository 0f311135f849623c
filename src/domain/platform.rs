//! Host platform classification

use std::fmt;

/// The host operating system, classified into the families with a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Windows,
    /// Any other host, carrying its target name for diagnostics
    Other(String),
}

impl HostOs {
    /// Probe the running host
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other(std::env::consts::OS.to_string())
        }
    }

    pub fn is_mac_os(&self) -> bool {
        matches!(self, Self::MacOs)
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    /// The backend serving this host, if any
    pub fn backend_kind(&self) -> Option<BackendKind> {
        match self {
            Self::MacOs => Some(BackendKind::Osx),
            Self::Windows => Some(BackendKind::Windows),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs => write!(f, "Mac OS X"),
            Self::Windows => write!(f, "Windows"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Concrete backend behind a notification handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Osx,
    Windows,
}

impl BackendKind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Osx => "OS X",
            Self::Windows => "Windows",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Platform detection
//!
//! Only the operating system family matters here: it decides how a Python
//! virtual environment is provisioned.

/// Operating system platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS (Darwin)
    MacOS,
    /// Linux
    Linux,
    /// Windows
    Windows,
    /// Unknown/unsupported platform
    Unknown,
}

impl Platform {
    /// Detect the platform this binary runs on
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Self::MacOS,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MacOS => write!(f, "macOS"),
            Self::Linux => write!(f, "Linux"),
            Self::Windows => write!(f, "Windows"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

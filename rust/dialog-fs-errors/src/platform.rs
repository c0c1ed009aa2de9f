use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DialogFsErrorsError, PosixCodes};

/// The operating system whose error numbering a [`crate::Classifier`]
/// assumes.
///
/// Names follow [`std::env::consts::OS`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux
    Linux,
    /// Android
    Android,
    /// macOS
    #[serde(alias = "darwin")]
    MacOs,
    /// iOS
    Ios,
    /// FreeBSD
    FreeBsd,
    /// NetBSD
    NetBsd,
    /// OpenBSD
    OpenBsd,
    /// DragonFly BSD
    DragonFly,
    /// illumos
    Illumos,
    /// Solaris
    Solaris,
    /// Windows
    Windows,
    /// Any other target, including `wasm32-unknown-unknown`
    Other,
}

impl Platform {
    /// Every platform, in declaration order.
    pub const ALL: [Platform; 12] = [
        Platform::Linux,
        Platform::Android,
        Platform::MacOs,
        Platform::Ios,
        Platform::FreeBsd,
        Platform::NetBsd,
        Platform::OpenBsd,
        Platform::DragonFly,
        Platform::Illumos,
        Platform::Solaris,
        Platform::Windows,
        Platform::Other,
    ];

    /// The platform this crate was compiled for.
    pub const fn native() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "freebsd") {
            Platform::FreeBsd
        } else if cfg!(target_os = "netbsd") {
            Platform::NetBsd
        } else if cfg!(target_os = "openbsd") {
            Platform::OpenBsd
        } else if cfg!(target_os = "dragonfly") {
            Platform::DragonFly
        } else if cfg!(target_os = "illumos") {
            Platform::Illumos
        } else if cfg!(target_os = "solaris") {
            Platform::Solaris
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Whether error numbers are Windows system error codes.
    pub const fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// The errno table for this platform's Unix family, if it has one.
    ///
    /// Windows reports system error codes rather than errno values, so it
    /// has no table; neither does [`Platform::Other`].
    pub const fn posix_codes(self) -> Option<&'static PosixCodes> {
        match self {
            Platform::Linux | Platform::Android => Some(&PosixCodes::LINUX),
            Platform::MacOs | Platform::Ios => Some(&PosixCodes::DARWIN),
            Platform::FreeBsd | Platform::NetBsd | Platform::OpenBsd | Platform::DragonFly => {
                Some(&PosixCodes::BSD)
            }
            Platform::Illumos | Platform::Solaris => Some(&PosixCodes::SOLARIS),
            Platform::Windows | Platform::Other => None,
        }
    }

    /// The lowercase name of the platform.
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Android => "android",
            Platform::MacOs => "macos",
            Platform::Ios => "ios",
            Platform::FreeBsd => "freebsd",
            Platform::NetBsd => "netbsd",
            Platform::OpenBsd => "openbsd",
            Platform::DragonFly => "dragonfly",
            Platform::Illumos => "illumos",
            Platform::Solaris => "solaris",
            Platform::Windows => "windows",
            Platform::Other => "other",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DialogFsErrorsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        if name == "darwin" {
            return Ok(Platform::MacOs);
        }

        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == name)
            .ok_or_else(|| DialogFsErrorsError::UnknownPlatform(s.to_owned()))
    }
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The semantic meaning of a filesystem failure, independent of the
/// platform that reported it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    /// The requested function is not implemented (`ENOSYS`)
    NotImplemented,
    /// The operation is not supported by the filesystem (`EOPNOTSUPP`)
    OperationNotSupported,
    /// No space left on the device (`ENOSPC`)
    NoSpace,
    /// Low-level input/output fault (`EIO`)
    IoFault,
    /// A directory was found where a file was expected (`EISDIR`)
    IsDirectory,
    /// A path component is not a directory (`ENOTDIR`)
    NotDirectory,
    /// A name exceeds the filesystem's length limit (`ENAMETOOLONG`)
    NameTooLong,
    /// The directory still has entries (`ENOTEMPTY`, `ERROR_DIR_NOT_EMPTY`)
    DirectoryNotEmpty,
    /// An intermediate path component is missing (`ERROR_PATH_NOT_FOUND`)
    PathNotFound,
    /// A handle was closed or never valid (`ERROR_INVALID_HANDLE`)
    HandleInvalid,
    /// A rename or link crosses filesystems (`EXDEV`)
    CrossDeviceLink,
}

impl ErrorCategory {
    /// Every category, in declaration order.
    pub const ALL: [ErrorCategory; 11] = [
        ErrorCategory::NotImplemented,
        ErrorCategory::OperationNotSupported,
        ErrorCategory::NoSpace,
        ErrorCategory::IoFault,
        ErrorCategory::IsDirectory,
        ErrorCategory::NotDirectory,
        ErrorCategory::NameTooLong,
        ErrorCategory::DirectoryNotEmpty,
        ErrorCategory::PathNotFound,
        ErrorCategory::HandleInvalid,
        ErrorCategory::CrossDeviceLink,
    ];

    /// Categories that can only be reported by Windows.
    pub const fn is_windows_only(self) -> bool {
        matches!(
            self,
            ErrorCategory::PathNotFound | ErrorCategory::HandleInvalid
        )
    }

    /// The kebab-case name of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::NotImplemented => "not-implemented",
            ErrorCategory::OperationNotSupported => "operation-not-supported",
            ErrorCategory::NoSpace => "no-space",
            ErrorCategory::IoFault => "io-fault",
            ErrorCategory::IsDirectory => "is-directory",
            ErrorCategory::NotDirectory => "not-directory",
            ErrorCategory::NameTooLong => "name-too-long",
            ErrorCategory::DirectoryNotEmpty => "directory-not-empty",
            ErrorCategory::PathNotFound => "path-not-found",
            ErrorCategory::HandleInvalid => "handle-invalid",
            ErrorCategory::CrossDeviceLink => "cross-device-link",
        }
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

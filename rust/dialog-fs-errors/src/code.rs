use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A low-level error number as reported by the operating system.
///
/// The value is only meaningful relative to the platform that produced it:
/// `5` is `EIO` on every Unix we know about, but `ERROR_ACCESS_DENIED` on
/// Windows.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
#[repr(transparent)]
pub struct OsCode(i32);

impl OsCode {
    /// Wrap a raw error number.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw error number.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for OsCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<OsCode> for i32 {
    fn from(value: OsCode) -> Self {
        value.0
    }
}

impl Display for OsCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:x})", self.0, self.0)
    }
}

/// `ERROR_PATH_NOT_FOUND`
pub const ERROR_PATH_NOT_FOUND: OsCode = OsCode(0x03);

/// `ERROR_INVALID_HANDLE`
pub const ERROR_INVALID_HANDLE: OsCode = OsCode(0x06);

/// `ERROR_DIR_NOT_EMPTY`
pub const ERROR_DIR_NOT_EMPTY: OsCode = OsCode(0x91);

/// The POSIX errno values this crate classifies, as numbered by one family
/// of Unix kernels.
///
/// Numbering is shared within a family but not across families; for example
/// `ENOTEMPTY` is 39 on Linux and 66 on the BSDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PosixCodes {
    /// `ENOSYS`, function not implemented
    pub enosys: OsCode,
    /// `EOPNOTSUPP`, operation not supported
    pub eopnotsupp: OsCode,
    /// `ENOSPC`, no space left on device
    pub enospc: OsCode,
    /// `EIO`, input/output error
    pub eio: OsCode,
    /// `EISDIR`, is a directory
    pub eisdir: OsCode,
    /// `ENOTDIR`, not a directory
    pub enotdir: OsCode,
    /// `ENAMETOOLONG`, file name too long
    pub enametoolong: OsCode,
    /// `ENOTEMPTY`, directory not empty
    pub enotempty: OsCode,
    /// `EXDEV`, cross-device link
    pub exdev: OsCode,
}

impl PosixCodes {
    /// Linux and Android (generic asm, as used by x86, arm and riscv).
    pub const LINUX: PosixCodes = PosixCodes {
        enosys: OsCode(38),
        eopnotsupp: OsCode(95),
        enospc: OsCode(28),
        eio: OsCode(5),
        eisdir: OsCode(21),
        enotdir: OsCode(20),
        enametoolong: OsCode(36),
        enotempty: OsCode(39),
        exdev: OsCode(18),
    };

    /// macOS and iOS. Darwin splits `ENOTSUP` (45) from `EOPNOTSUPP`.
    pub const DARWIN: PosixCodes = PosixCodes {
        enosys: OsCode(78),
        eopnotsupp: OsCode(102),
        enospc: OsCode(28),
        eio: OsCode(5),
        eisdir: OsCode(21),
        enotdir: OsCode(20),
        enametoolong: OsCode(63),
        enotempty: OsCode(66),
        exdev: OsCode(18),
    };

    /// FreeBSD, NetBSD, OpenBSD and DragonFly.
    pub const BSD: PosixCodes = PosixCodes {
        enosys: OsCode(78),
        eopnotsupp: OsCode(45),
        enospc: OsCode(28),
        eio: OsCode(5),
        eisdir: OsCode(21),
        enotdir: OsCode(20),
        enametoolong: OsCode(63),
        enotempty: OsCode(66),
        exdev: OsCode(18),
    };

    /// Solaris and illumos.
    pub const SOLARIS: PosixCodes = PosixCodes {
        enosys: OsCode(89),
        eopnotsupp: OsCode(122),
        enospc: OsCode(28),
        eio: OsCode(5),
        eisdir: OsCode(21),
        enotdir: OsCode(20),
        enametoolong: OsCode(78),
        enotempty: OsCode(93),
        exdev: OsCode(18),
    };

    /// All codes in the table, in a fixed order.
    pub const fn all(&self) -> [OsCode; 9] {
        [
            self.enosys,
            self.eopnotsupp,
            self.enospc,
            self.eio,
            self.eisdir,
            self.enotdir,
            self.enametoolong,
            self.enotempty,
            self.exdev,
        ]
    }
}

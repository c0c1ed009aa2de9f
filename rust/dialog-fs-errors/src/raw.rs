use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::OsCode;

/// A failed single-path operation (open, mkdir, remove, ...) together with
/// the code the operating system reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    /// The operation that failed
    pub op: String,
    /// The path the operation was applied to
    pub path: PathBuf,
    /// The platform error number
    pub code: OsCode,
}

impl PathError {
    /// Creates a new [`PathError`].
    pub fn new(op: impl Into<String>, path: impl Into<PathBuf>, code: impl Into<OsCode>) -> Self {
        Self {
            op: op.into(),
            path: path.into(),
            code: code.into(),
        }
    }
}

impl Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: os error {}",
            self.op,
            self.path.display(),
            self.code
        )
    }
}

impl std::error::Error for PathError {}

/// A failed two-path operation (rename, hard link, symlink) together with
/// the code the operating system reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkError {
    /// The operation that failed
    pub op: String,
    /// The source path
    pub from: PathBuf,
    /// The destination path
    pub to: PathBuf,
    /// The platform error number
    pub code: OsCode,
}

impl LinkError {
    /// Creates a new [`LinkError`].
    pub fn new(
        op: impl Into<String>,
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        code: impl Into<OsCode>,
    ) -> Self {
        Self {
            op: op.into(),
            from: from.into(),
            to: to.into(),
            code: code.into(),
        }
    }
}

impl Display for LinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}: os error {}",
            self.op,
            self.from.display(),
            self.to.display(),
            self.code
        )
    }
}

impl std::error::Error for LinkError {}

/// A filesystem failure as handed to a [`crate::Classifier`].
///
/// The shape of the failure is fixed when it is constructed, so that
/// classification never has to guess what kind of error it is looking at.
/// Use [`RawError::path`], [`RawError::link`] or the `From<io::Error>`
/// conversions at the point where the failing call returns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RawError {
    /// A single-path failure
    #[error(transparent)]
    Path(#[from] PathError),

    /// A two-path failure
    #[error(transparent)]
    Link(#[from] LinkError),

    /// A bare platform error number with no path attached
    #[error("os error {0}")]
    Code(OsCode),

    /// A failure that carries no platform error number
    #[error("{0}")]
    Other(String),
}

impl RawError {
    /// Captures the failure of `op` on `path`. Errors without a raw OS code
    /// become [`RawError::Other`].
    pub fn path(op: impl Into<String>, path: impl AsRef<Path>, error: &io::Error) -> Self {
        match error.raw_os_error() {
            Some(code) => PathError::new(op, path.as_ref(), code).into(),
            None => RawError::Other(error.to_string()),
        }
    }

    /// Captures the failure of `op` between `from` and `to`. Errors without
    /// a raw OS code become [`RawError::Other`].
    pub fn link(
        op: impl Into<String>,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        error: &io::Error,
    ) -> Self {
        match error.raw_os_error() {
            Some(code) => LinkError::new(op, from.as_ref(), to.as_ref(), code).into(),
            None => RawError::Other(error.to_string()),
        }
    }

    /// The platform error number, whatever the shape.
    pub fn code(&self) -> Option<OsCode> {
        match self {
            RawError::Path(error) => Some(error.code),
            RawError::Link(error) => Some(error.code),
            RawError::Code(code) => Some(*code),
            RawError::Other(_) => None,
        }
    }

    /// The single-path shape, if this is one.
    pub fn as_path(&self) -> Option<&PathError> {
        match self {
            RawError::Path(error) => Some(error),
            _ => None,
        }
    }

    /// The two-path shape, if this is one.
    pub fn as_link(&self) -> Option<&LinkError> {
        match self {
            RawError::Link(error) => Some(error),
            _ => None,
        }
    }
}

impl From<OsCode> for RawError {
    fn from(code: OsCode) -> Self {
        RawError::Code(code)
    }
}

impl From<&io::Error> for RawError {
    fn from(error: &io::Error) -> Self {
        match error.raw_os_error() {
            Some(code) => RawError::Code(code.into()),
            None => RawError::Other(error.to_string()),
        }
    }
}

impl From<io::Error> for RawError {
    fn from(error: io::Error) -> Self {
        Self::from(&error)
    }
}

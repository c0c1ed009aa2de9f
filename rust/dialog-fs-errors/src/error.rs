use thiserror::Error;

/// The common error type used by this crate
///
/// Classification itself never fails; these errors only surface while
/// resolving which platform a [`crate::Classifier`] should assume.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogFsErrorsError {
    /// A platform name did not match any known operating system
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Classifier configuration could not be read
    #[error("Invalid classifier configuration: {0}")]
    InvalidConfig(String),
}

#![warn(missing_docs)]

//! This crate classifies low-level filesystem failures into a small,
//! platform-independent vocabulary of [ErrorCategory] values, so that a
//! storage engine can decide whether to retry, fall back or abort without
//! knowing whether an error number came from Linux, a BSD or Windows.
//!
//! Failures are captured as a [RawError] at the point where the failing
//! call returns, and then handed to a [Classifier] that has been told which
//! [Platform] produced them:
//!
//! ```rust
//! use dialog_fs_errors::{Classifier, ErrorCategory, Platform, RawError};
//!
//! let classifier = Classifier::new(Platform::Windows);
//!
//! let failure = std::io::Error::from_raw_os_error(0x91);
//! let error = RawError::path("remove", "C:\\data\\objects", &failure);
//!
//! assert_eq!(
//!     classifier.classify(&error),
//!     Some(ErrorCategory::DirectoryNotEmpty)
//! );
//! ```

mod category;
pub use category::*;

mod classifier;
pub use classifier::*;

mod code;
pub use code::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod platform;
pub use platform::*;

mod raw;
pub use raw::*;

use std::io;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    ERROR_DIR_NOT_EMPTY, ERROR_INVALID_HANDLE, ERROR_PATH_NOT_FOUND, ErrorCategory, OsCode,
    Platform, PosixCodes, RawError,
};

/// Answers "is this filesystem failure an instance of category X?" for a
/// fixed [`Platform`].
///
/// Every predicate accepts either a `&RawError` or an `Option<&RawError>`;
/// an absent error never matches. Predicates are pure, so a [`Classifier`]
/// can be copied freely and shared across threads.
///
/// Categories that only Windows reports are guarded by the platform: on any
/// other platform they never match, even when the numeric code happens to
/// equal the Windows literal.
///
/// ```rust
/// use dialog_fs_errors::{Classifier, PathError, Platform, PosixCodes, RawError};
///
/// let classifier = Classifier::new(Platform::Linux);
/// let error = RawError::from(PathError::new("write", "/data/obj", PosixCodes::LINUX.enospc));
///
/// assert!(classifier.is_no_space(&error));
/// assert!(!classifier.is_io_fault(&error));
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Classifier {
    platform: Platform,
}

impl Classifier {
    /// Creates a [`Classifier`] for errors reported by `platform`.
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Creates a [`Classifier`] for the platform this crate was compiled for.
    pub const fn native() -> Self {
        Self::new(Platform::native())
    }

    /// The platform this classifier assumes.
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Function not implemented (`ENOSYS`).
    pub fn is_not_implemented<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        self.path_matches_posix(error.into(), |codes| codes.enosys)
    }

    /// Operation not supported (`EOPNOTSUPP`).
    pub fn is_operation_not_supported<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        self.path_matches_posix(error.into(), |codes| codes.eopnotsupp)
    }

    /// No space left on device (`ENOSPC`).
    pub fn is_no_space<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        self.path_matches_posix(error.into(), |codes| codes.enospc)
    }

    /// Input/output error (`EIO`).
    pub fn is_io_fault<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        self.path_matches_posix(error.into(), |codes| codes.eio)
    }

    /// Is a directory (`EISDIR`).
    pub fn is_directory<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        self.path_matches_posix(error.into(), |codes| codes.eisdir)
    }

    /// Not a directory (`ENOTDIR`).
    pub fn is_not_directory<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        self.path_matches_posix(error.into(), |codes| codes.enotdir)
    }

    /// File name too long (`ENAMETOOLONG`).
    pub fn is_name_too_long<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        self.path_matches_posix(error.into(), |codes| codes.enametoolong)
    }

    /// Directory not empty: `ERROR_DIR_NOT_EMPTY` on Windows, `ENOTEMPTY`
    /// everywhere else.
    pub fn is_directory_not_empty<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        let error = error.into();
        if self.platform.is_windows() {
            path_code(error) == Some(ERROR_DIR_NOT_EMPTY)
        } else {
            self.path_matches_posix(error, |codes| codes.enotempty)
        }
    }

    /// `ERROR_PATH_NOT_FOUND`. Windows only.
    pub fn is_path_not_found<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        if !self.platform.is_windows() {
            return false;
        }
        path_code(error.into()) == Some(ERROR_PATH_NOT_FOUND)
    }

    /// `ERROR_INVALID_HANDLE`. Windows only.
    ///
    /// Unlike the other predicates this also accepts a bare
    /// [`RawError::Code`], since invalid handles are usually reported by
    /// calls that take a handle rather than a path.
    pub fn is_handle_invalid<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        if !self.platform.is_windows() {
            return false;
        }
        let code = match error.into() {
            Some(RawError::Path(error)) => error.code,
            Some(RawError::Code(code)) => *code,
            _ => return false,
        };
        code == ERROR_INVALID_HANDLE
    }

    /// Cross-device link (`EXDEV`). Only two-path failures qualify.
    pub fn is_cross_device_link<'a>(&self, error: impl Into<Option<&'a RawError>>) -> bool {
        match (error.into(), self.platform.posix_codes()) {
            (Some(RawError::Link(error)), Some(codes)) => error.code == codes.exdev,
            _ => false,
        }
    }

    /// Evaluates the predicate for `category`.
    pub fn matches<'a>(
        &self,
        error: impl Into<Option<&'a RawError>>,
        category: ErrorCategory,
    ) -> bool {
        let error = error.into();
        match category {
            ErrorCategory::NotImplemented => self.is_not_implemented(error),
            ErrorCategory::OperationNotSupported => self.is_operation_not_supported(error),
            ErrorCategory::NoSpace => self.is_no_space(error),
            ErrorCategory::IoFault => self.is_io_fault(error),
            ErrorCategory::IsDirectory => self.is_directory(error),
            ErrorCategory::NotDirectory => self.is_not_directory(error),
            ErrorCategory::NameTooLong => self.is_name_too_long(error),
            ErrorCategory::DirectoryNotEmpty => self.is_directory_not_empty(error),
            ErrorCategory::PathNotFound => self.is_path_not_found(error),
            ErrorCategory::HandleInvalid => self.is_handle_invalid(error),
            ErrorCategory::CrossDeviceLink => self.is_cross_device_link(error),
        }
    }

    /// The category `error` belongs to, or `None` if it is unclassified.
    ///
    /// The predicates test disjoint code sets, so at most one category can
    /// match.
    pub fn classify<'a>(&self, error: impl Into<Option<&'a RawError>>) -> Option<ErrorCategory> {
        let error = error.into();
        let category = ErrorCategory::ALL
            .into_iter()
            .find(|category| self.matches(error, *category));

        trace!(
            platform = %self.platform,
            ?error,
            ?category,
            "Classified filesystem error"
        );

        category
    }

    /// Classifies a bare [`io::Error`], with no path attached.
    ///
    /// Only [`ErrorCategory::HandleInvalid`] accepts that shape; for other
    /// categories capture the failure with [`RawError::path`] or
    /// [`RawError::link`] instead.
    pub fn classify_io(&self, error: &io::Error) -> Option<ErrorCategory> {
        self.classify(&RawError::from(error))
    }

    fn path_matches_posix(
        &self,
        error: Option<&RawError>,
        select: fn(&PosixCodes) -> OsCode,
    ) -> bool {
        match (path_code(error), self.platform.posix_codes()) {
            (Some(code), Some(codes)) => code == select(codes),
            _ => false,
        }
    }
}

fn path_code(error: Option<&RawError>) -> Option<OsCode> {
    error?.as_path().map(|error| error.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkError, PathError};
    use proptest::prelude::*;

    fn path_error(code: impl Into<OsCode>) -> RawError {
        PathError::new("open", "/data/obj", code).into()
    }

    fn link_error(code: impl Into<OsCode>) -> RawError {
        LinkError::new("rename", "/data/a", "/mnt/b", code).into()
    }

    const UNIX: [Platform; 10] = [
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
    ];

    #[test]
    fn it_classifies_no_space_end_to_end() {
        let classifier = Classifier::new(Platform::Linux);
        let error = path_error(PosixCodes::LINUX.enospc);

        assert!(classifier.is_no_space(&error));
        assert!(!classifier.is_io_fault(&error));
        assert_eq!(classifier.classify(&error), Some(ErrorCategory::NoSpace));
    }

    #[test]
    fn it_never_matches_an_absent_error() {
        for platform in Platform::ALL {
            let classifier = Classifier::new(platform);
            for category in ErrorCategory::ALL {
                assert!(!classifier.matches(None::<&RawError>, category));
            }
            assert_eq!(classifier.classify(None::<&RawError>), None);
        }
    }

    #[test]
    fn it_maps_each_posix_code_to_its_category() {
        for platform in UNIX {
            let classifier = Classifier::new(platform);
            let Some(codes) = platform.posix_codes() else {
                panic!("{platform} has no errno table");
            };

            let expected = [
                (codes.enosys, ErrorCategory::NotImplemented),
                (codes.eopnotsupp, ErrorCategory::OperationNotSupported),
                (codes.enospc, ErrorCategory::NoSpace),
                (codes.eio, ErrorCategory::IoFault),
                (codes.eisdir, ErrorCategory::IsDirectory),
                (codes.enotdir, ErrorCategory::NotDirectory),
                (codes.enametoolong, ErrorCategory::NameTooLong),
                (codes.enotempty, ErrorCategory::DirectoryNotEmpty),
            ];

            for (code, category) in expected {
                assert_eq!(
                    classifier.classify(&path_error(code)),
                    Some(category),
                    "{platform} {code}"
                );
            }
        }
    }

    #[test]
    fn it_uses_the_configured_family_numbering() {
        // 39 is ENOTEMPTY on Linux but EDESTADDRREQ on the BSDs
        let error = path_error(39);

        assert!(Classifier::new(Platform::Linux).is_directory_not_empty(&error));
        assert!(!Classifier::new(Platform::FreeBsd).is_directory_not_empty(&error));
        assert!(!Classifier::new(Platform::MacOs).is_directory_not_empty(&error));
    }

    #[test]
    fn it_guards_windows_only_categories_by_platform() {
        let classifier = Classifier::new(Platform::Linux);

        assert!(!classifier.is_path_not_found(&path_error(ERROR_PATH_NOT_FOUND)));
        assert!(!classifier.is_handle_invalid(&path_error(ERROR_INVALID_HANDLE)));
        assert!(!classifier.is_handle_invalid(&RawError::Code(ERROR_INVALID_HANDLE)));
        assert!(!classifier.is_directory_not_empty(&path_error(ERROR_DIR_NOT_EMPTY)));
    }

    #[test]
    fn it_recognizes_windows_literals_on_windows() {
        let classifier = Classifier::new(Platform::Windows);

        assert_eq!(
            classifier.classify(&path_error(ERROR_PATH_NOT_FOUND)),
            Some(ErrorCategory::PathNotFound)
        );
        assert_eq!(
            classifier.classify(&path_error(ERROR_DIR_NOT_EMPTY)),
            Some(ErrorCategory::DirectoryNotEmpty)
        );
        assert_eq!(
            classifier.classify(&path_error(ERROR_INVALID_HANDLE)),
            Some(ErrorCategory::HandleInvalid)
        );
    }

    #[test]
    fn it_accepts_a_bare_code_only_for_invalid_handles() {
        let classifier = Classifier::new(Platform::Windows);

        assert!(classifier.is_handle_invalid(&RawError::Code(ERROR_INVALID_HANDLE)));
        assert!(!classifier.is_path_not_found(&RawError::Code(ERROR_PATH_NOT_FOUND)));
        assert!(!classifier.is_directory_not_empty(&RawError::Code(ERROR_DIR_NOT_EMPTY)));

        let linux = Classifier::new(Platform::Linux);
        assert!(!linux.is_no_space(&RawError::Code(PosixCodes::LINUX.enospc)));
    }

    #[test]
    fn it_consults_only_one_branch_for_directory_not_empty() {
        let windows = Classifier::new(Platform::Windows);
        let linux = Classifier::new(Platform::Linux);
        let enotempty = path_error(PosixCodes::LINUX.enotempty);
        let dir_not_empty = path_error(ERROR_DIR_NOT_EMPTY);

        assert!(!windows.is_directory_not_empty(&enotempty));
        assert!(windows.is_directory_not_empty(&dir_not_empty));
        assert!(linux.is_directory_not_empty(&enotempty));
        assert!(!linux.is_directory_not_empty(&dir_not_empty));
    }

    #[test]
    fn it_requires_the_link_shape_for_cross_device() {
        let classifier = Classifier::new(Platform::Linux);
        let exdev = PosixCodes::LINUX.exdev;

        assert!(classifier.is_cross_device_link(&link_error(exdev)));
        assert!(!classifier.is_cross_device_link(&path_error(exdev)));
        assert!(!classifier.is_cross_device_link(&RawError::Code(exdev)));
        assert_eq!(classifier.classify(&path_error(exdev)), None);
    }

    #[test]
    fn it_requires_the_path_shape_for_portable_categories() {
        let classifier = Classifier::new(Platform::Linux);
        let error = link_error(PosixCodes::LINUX.enospc);

        assert!(!classifier.is_no_space(&error));
        assert_eq!(classifier.classify(&error), None);
    }

    #[test]
    fn it_leaves_codeless_errors_unclassified() {
        let error = RawError::Other("synthetic failure".into());
        for platform in Platform::ALL {
            assert_eq!(Classifier::new(platform).classify(&error), None);
        }
    }

    #[test]
    fn it_has_no_posix_categories_without_an_errno_table() {
        let error = path_error(PosixCodes::LINUX.enospc);

        assert!(!Classifier::new(Platform::Windows).is_no_space(&error));
        assert!(!Classifier::new(Platform::Other).is_no_space(&error));
        assert!(!Classifier::new(Platform::Other).is_directory_not_empty(&path_error(39)));
    }

    #[test_log::test]
    fn it_classifies_a_bare_io_error() {
        let classifier = Classifier::new(Platform::Windows);
        let error = io::Error::from_raw_os_error(ERROR_INVALID_HANDLE.raw());

        assert_eq!(
            classifier.classify_io(&error),
            Some(ErrorCategory::HandleInvalid)
        );
        assert_eq!(
            Classifier::new(Platform::Linux).classify_io(&error),
            None
        );
    }

    fn any_platform() -> impl Strategy<Value = Platform> {
        prop::sample::select(Platform::ALL.to_vec())
    }

    fn any_raw_error() -> impl Strategy<Value = RawError> {
        // Small codes cover every literal; the wide range covers the rest
        let code = prop_oneof![0..256i32, any::<i32>()];
        (code, 0..4u8).prop_map(|(code, shape)| match shape {
            0 => path_error(code),
            1 => link_error(code),
            2 => RawError::Code(code.into()),
            _ => RawError::Other(format!("failure {code}")),
        })
    }

    proptest! {
        #[test]
        fn it_matches_at_most_one_category(platform in any_platform(), error in any_raw_error()) {
            let classifier = Classifier::new(platform);
            let matched = ErrorCategory::ALL
                .into_iter()
                .filter(|category| classifier.matches(&error, *category))
                .count();

            prop_assert!(matched <= 1);
            prop_assert_eq!(classifier.classify(&error).is_some(), matched == 1);
        }

        #[test]
        fn it_is_idempotent(platform in any_platform(), error in any_raw_error()) {
            let classifier = Classifier::new(platform);
            for category in ErrorCategory::ALL {
                prop_assert_eq!(
                    classifier.matches(&error, category),
                    classifier.matches(&error, category)
                );
            }
            prop_assert_eq!(classifier.classify(&error), classifier.classify(&error));
        }

        #[test]
        fn it_never_reports_windows_only_categories_elsewhere(
            platform in any_platform(),
            error in any_raw_error()
        ) {
            prop_assume!(!platform.is_windows());
            let classifier = Classifier::new(platform);

            prop_assert!(!classifier.is_path_not_found(&error));
            prop_assert!(!classifier.is_handle_invalid(&error));
        }

        #[test]
        fn it_matches_no_space_only_for_enospc(platform in any_platform(), code in any::<i32>()) {
            let classifier = Classifier::new(platform);
            let expected = platform
                .posix_codes()
                .is_some_and(|codes| codes.enospc.raw() == code);

            prop_assert_eq!(classifier.is_no_space(&path_error(code)), expected);
        }
    }
}

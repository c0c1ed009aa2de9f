use std::env::VarError;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Classifier, DialogFsErrorsError, Platform};

/// Environment variable that overrides the platform a [`Classifier`]
/// assumes.
pub const PLATFORM_ENV_VAR: &str = "DIALOG_FS_PLATFORM";

/// Configuration for a [`Classifier`], suitable for embedding in a larger
/// storage configuration.
///
/// An absent `platform` means the platform this crate was compiled for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// The platform whose error numbering to assume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl ClassifierConfig {
    /// Parses configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, DialogFsErrorsError> {
        serde_json::from_str(json)
            .map_err(|error| DialogFsErrorsError::InvalidConfig(format!("{error}")))
    }

    /// Reads configuration from [`PLATFORM_ENV_VAR`].
    pub fn from_env() -> Result<Self, DialogFsErrorsError> {
        Self::from_var(std::env::var(PLATFORM_ENV_VAR))
    }

    fn from_var(value: Result<String, VarError>) -> Result<Self, DialogFsErrorsError> {
        match value {
            Ok(name) => Ok(Self {
                platform: Some(name.parse()?),
            }),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(DialogFsErrorsError::InvalidConfig(format!(
                "{PLATFORM_ENV_VAR} is not valid unicode"
            ))),
        }
    }

    /// The platform this configuration resolves to.
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::native)
    }

    /// Builds the configured [`Classifier`].
    pub fn classifier(&self) -> Classifier {
        if let Some(platform) = self.platform {
            debug!(%platform, native = %Platform::native(), "Using configured platform");
        }
        Classifier::new(self.platform())
    }
}

impl From<ClassifierConfig> for Classifier {
    fn from(config: ClassifierConfig) -> Self {
        config.classifier()
    }
}

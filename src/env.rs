use std::path::PathBuf;

use nix::unistd::{getuid, User};
use tracing::debug;

use crate::error::ResolveError;

const BINDING_CACHE_PREFIX: &str = "writ-bind-cache-";

/// Process state the resolver depends on, passed in explicitly so resolution
/// can run against a fixture directory in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnv {
    pub current_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub user_name: String,
}

impl HostEnv {
    pub fn new(current_dir: impl Into<PathBuf>, temp_dir: impl Into<PathBuf>, user_name: impl Into<String>) -> Self {
        Self {
            current_dir: current_dir.into(),
            temp_dir: temp_dir.into(),
            user_name: user_name.into(),
        }
    }

    pub fn from_process() -> Result<Self, ResolveError> {
        let current_dir = std::env::current_dir().map_err(ResolveError::CurrentDir)?;
        let temp_dir = std::env::temp_dir();

        let uid = getuid();
        let Ok(Some(user)) = User::from_uid(uid) else {
            return Err(ResolveError::UnknownUser { uid: uid.as_raw() });
        };

        debug!(?current_dir, ?temp_dir, user = %user.name, "host environment");

        Ok(Self::new(current_dir, temp_dir, user.name))
    }

    /// `<temp_dir>/writ-bind-cache-<user_name>`
    pub fn default_binding_path(&self) -> PathBuf {
        self.temp_dir.join(format!("{BINDING_CACHE_PREFIX}{}", self.user_name))
    }
}

// Storage path utilities.
// Resolves where the identity, the registry, and fetched posts live on disk.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Name of the registry file kept in the working directory.
pub const REGISTRY_FILE: &str = ".discli";

/// Environment variable overriding the identity file location.
pub const IDENTITY_ENV: &str = "DISCLI_IDENTITY";

/// Get the per-user config directory (~/.config/discli on Linux).
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "discli").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the identity file, honouring `DISCLI_IDENTITY` when set.
pub fn identity_path() -> Option<PathBuf> {
    identity_path_with(env::var_os(IDENTITY_ENV))
}

/// Identity file location given the override value; empty means unset.
fn identity_path_with(override_path: Option<OsString>) -> Option<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir().map(|dir| dir.join("identity.json")),
    }
}

/// Path to the registry file inside a working directory.
pub fn registry_path(dir: &Path) -> PathBuf {
    dir.join(REGISTRY_FILE)
}

/// Local filename for a fetched topic.
pub fn post_filename(topic_id: u64, slug: &str) -> String {
    format!("{}-{}.md", topic_id, slug)
}

// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic for finding and preparing the
//! line-counting executable.

use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

// ============================================================================
// Executable Names
// ============================================================================

/// File names probed on `PATH`, in order of preference.
#[cfg(windows)]
pub const EXECUTABLE_NAMES: &[&str] = &["cloc.exe", "cloc.pl", "cloc"];

#[cfg(not(windows))]
pub const EXECUTABLE_NAMES: &[&str] = &["cloc", "cloc.pl"];

/// Name used when extracting an embedded executable.
#[cfg(windows)]
pub const EXTRACTED_NAME: &str = "cloc.exe";

#[cfg(not(windows))]
pub const EXTRACTED_NAME: &str = "cloc";

// ============================================================================
// PATH Lookup
// ============================================================================

/// Search the directories of `path_var` (a `PATH`-style list) for the first
/// regular file matching one of `names`.
pub fn find_in(path_var: &OsStr, names: &[&str]) -> Option<PathBuf> {
    env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| names.iter().map(move |name| dir.join(name)))
        .find(|candidate| is_runnable(candidate))
}

/// Search the process `PATH` for the first of `names`.
pub fn find_in_path(names: &[&str]) -> Option<PathBuf> {
    env::var_os("PATH").and_then(|path_var| find_in(&path_var, names))
}

#[cfg(unix)]
fn is_runnable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|md| md.is_file() && md.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_runnable(path: &Path) -> bool {
    path.is_file()
}

// ============================================================================
// Permissions
// ============================================================================

/// Mark `path` executable for everyone (`0o755`). A no-op where the concept
/// does not exist.
pub fn make_executable(path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = std::fs::metadata(path)?.permissions();
        if perms.mode() & 0o777 != 0o755 {
            perms.set_mode(0o755);
            std::fs::set_permissions(path, perms)?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        let _ = path;
        Ok(())
    }
}

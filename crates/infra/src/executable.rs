// crates/infra/src/executable.rs
//! Locating the line-counting executable.
//!
//! The executable is resolved at most once per [`CachedLocator`]; the
//! process-wide locator returned by [`global_locator`] therefore resolves at
//! most once per process. Embedded executables are extracted into a
//! directory named after their content fingerprint, so repeated runs (and
//! other processes) reuse the same file instead of writing new copies.

use std::{
    env,
    fs::{self, File},
    path::{Path, PathBuf},
    io,
    sync::OnceLock,
};

use cloc_runner_ports::{ExecutableLocator, Hasher};
use cloc_runner_shared_kernel::{ClocError, ConfigurationError, ResolutionError, Result};
use fs2::FileExt;
use log::debug;

use crate::{
    hashing::Xxh3Hasher,
    persistence::{FileReader, FileWriter},
    platform,
};

/// Environment variable that overrides executable discovery.
pub const ENV_EXECUTABLE: &str = "CLOC_RUNNER_EXECUTABLE";

const EXTRACT_PREFIX: &str = "cloc_runner-";

/// Where the executable comes from.
#[derive(Debug, Clone)]
pub enum ExecutableSource {
    /// A loose file, used in place.
    Path(PathBuf),
    /// Bytes compiled into the caller's binary, extracted before first use.
    Embedded { name: &'static str, bytes: &'static [u8] },
}

impl ExecutableSource {
    /// `CLOC_RUNNER_EXECUTABLE` if set, otherwise the first match on `PATH`.
    pub fn discover() -> Result<Self> {
        if let Some(path) = env::var_os(ENV_EXECUTABLE).filter(|v| !v.is_empty()) {
            debug!("using {ENV_EXECUTABLE}={}", PathBuf::from(&path).display());
            return Ok(Self::Path(PathBuf::from(path)));
        }
        platform::find_in_path(platform::EXECUTABLE_NAMES).map(Self::Path).ok_or_else(|| {
            ConfigurationError::ExecutableNotFound {
                reason: format!(
                    "none of {:?} found on PATH; install cloc or set {ENV_EXECUTABLE}",
                    platform::EXECUTABLE_NAMES
                ),
            }
            .into()
        })
    }

    /// Embedded bytes extracted under the platform's executable name.
    pub fn embedded(bytes: &'static [u8]) -> Self {
        Self::Embedded { name: platform::EXTRACTED_NAME, bytes }
    }
}

/// Outcome of resolving a source.
#[derive(Debug)]
struct Resolved {
    path: PathBuf,
    /// Set when this locator wrote the file itself.
    written: bool,
}

/// Resolve-once, cache-forever [`ExecutableLocator`].
///
/// Safe to share between threads; concurrent first calls resolve exactly
/// once. Failures are cached as well, so a missing tool is reported
/// consistently without probing the filesystem again.
#[derive(Debug)]
pub struct CachedLocator {
    source: Option<ExecutableSource>,
    extract_root: PathBuf,
    remove_on_drop: bool,
    cell: OnceLock<Result<Resolved>>,
}

impl CachedLocator {
    /// Locator that calls [`ExecutableSource::discover`] on first use.
    pub fn discovering() -> Self {
        Self { source: None, extract_root: env::temp_dir(), remove_on_drop: false, cell: OnceLock::new() }
    }

    /// Locator over a fixed source; embedded bytes go to the system temp directory.
    pub fn new(source: ExecutableSource) -> Self {
        Self { source: Some(source), extract_root: env::temp_dir(), remove_on_drop: false, cell: OnceLock::new() }
    }

    /// Extract embedded bytes under `root` instead of the system temp directory.
    #[must_use]
    pub fn extract_into(mut self, root: impl Into<PathBuf>) -> Self {
        self.extract_root = root.into();
        self
    }

    /// Locator that extracts into `root` and deletes what it extracted when dropped.
    pub fn scoped(source: ExecutableSource, root: impl Into<PathBuf>) -> Self {
        let mut locator = Self::new(source).extract_into(root);
        locator.remove_on_drop = true;
        locator
    }

    fn resolve(&self) -> Result<Resolved> {
        let source = match &self.source {
            Some(source) => source.clone(),
            None => ExecutableSource::discover()?,
        };
        match source {
            ExecutableSource::Path(path) => {
                if !path.is_file() {
                    return Err(ConfigurationError::ExecutableNotFound {
                        reason: format!("'{}' is not a file", path.display()),
                    }
                    .into());
                }
                debug!("resolved executable {}", path.display());
                Ok(Resolved { path, written: false })
            }
            ExecutableSource::Embedded { name, bytes } => extract(&Xxh3Hasher, &self.extract_root, name, bytes),
        }
    }
}

impl ExecutableLocator for CachedLocator {
    fn locate(&self) -> Result<PathBuf> {
        match self.cell.get_or_init(|| self.resolve()) {
            Ok(resolved) => Ok(resolved.path.clone()),
            Err(err) => Err(replay(err)),
        }
    }
}

impl Drop for CachedLocator {
    fn drop(&mut self) {
        if !self.remove_on_drop {
            return;
        }
        // The directory and its lock stay: other processes may share them.
        if let Some(Ok(Resolved { path, written: true })) = self.cell.get() {
            let _ = fs::remove_file(path);
        }
    }
}

/// Rebuild a cached failure so every caller sees the same category.
fn replay(err: &ClocError) -> ClocError {
    let copy_io = |source: &io::Error| io::Error::new(source.kind(), source.to_string());
    match err {
        ClocError::Context { context, source } => {
            ClocError::Context { context: context.clone(), source: Box::new(replay(source)) }
        }
        ClocError::Configuration(ConfigurationError::ExecutableNotFound { reason }) => {
            ConfigurationError::ExecutableNotFound { reason: reason.clone() }.into()
        }
        ClocError::Resolution(ResolutionError::Extraction { path, source }) => {
            ResolutionError::Extraction { path: path.clone(), source: copy_io(source) }.into()
        }
        ClocError::Resolution(ResolutionError::Permissions { path, source }) => {
            ResolutionError::Permissions { path: path.clone(), source: copy_io(source) }.into()
        }
        other => ConfigurationError::ExecutableNotFound { reason: other.to_string() }.into(),
    }
}

/// The process-wide locator, discovering the tool on first use.
pub fn global_locator() -> &'static CachedLocator {
    static GLOBAL: OnceLock<CachedLocator> = OnceLock::new();
    GLOBAL.get_or_init(CachedLocator::discovering)
}

fn extract(hasher: &dyn Hasher, root: &Path, name: &str, bytes: &[u8]) -> Result<Resolved> {
    let digest = hasher.hash_bytes(bytes)?;
    let dir = root.join(format!("{EXTRACT_PREFIX}{digest}"));
    fs::create_dir_all(&dir).map_err(|source| ResolutionError::Extraction { path: dir.clone(), source })?;
    let path = dir.join(name);

    // Serialise extraction between processes sharing the directory.
    let lock_path = dir.join(".lock");
    let lock = File::create(&lock_path)
        .map_err(|source| ResolutionError::Extraction { path: lock_path.clone(), source })?;
    FileExt::lock_exclusive(&lock)
        .map_err(|source| ResolutionError::Extraction { path: lock_path.clone(), source })?;

    let existing =
        FileReader::read_if_exists(&path).map_err(|source| ResolutionError::Extraction { path: path.clone(), source })?;
    let reusable = match existing {
        Some(content) => hasher.hash_bytes(&content)? == digest,
        None => false,
    };
    if reusable {
        debug!("reusing extracted executable {}", path.display());
    } else {
        FileWriter::atomic_write(&path, bytes)
            .map_err(|source| ResolutionError::Extraction { path: path.clone(), source })?;
        debug!("extracted executable to {}", path.display());
    }
    platform::make_executable(&path).map_err(|source| ResolutionError::Permissions { path: path.clone(), source })?;

    let _ = FileExt::unlock(&lock);
    Ok(Resolved { path, written: !reusable })
}

// crates/ports/src/locator.rs
use std::path::PathBuf;

use cloc_runner_shared_kernel::Result;

/// Port for finding the line-counting executable.
pub trait ExecutableLocator: Send + Sync {
    fn locate(&self) -> Result<PathBuf>;
}

/// Locator that always answers with the same path.
#[derive(Debug, Clone)]
pub struct FixedLocator(pub PathBuf);

impl ExecutableLocator for FixedLocator {
    fn locate(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

impl<T: ExecutableLocator + ?Sized> ExecutableLocator for &T {
    fn locate(&self) -> Result<PathBuf> {
        (**self).locate()
    }
}

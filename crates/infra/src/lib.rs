// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod executable;
pub mod hashing;
pub mod mapper;
pub mod persistence;
pub mod platform;
pub mod process;

pub use executable::{CachedLocator, ExecutableSource, global_locator};
pub use hashing::Xxh3Hasher;
pub use mapper::JsonMapper;
pub use process::StdProcessRunner;

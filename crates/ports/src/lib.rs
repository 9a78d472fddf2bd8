//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`process`]: Running an [`Invocation`](cloc_runner_domain::Invocation) and capturing its streams
//! - [`mapper`]: Materialising captured JSON into a tree
//! - [`locator`]: Finding the executable to run
//! - [`hashing`]: Content fingerprints for extracted executables
//!
//! These ports allow the command layer to remain independent of
//! specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod hashing;
pub mod locator;
pub mod mapper;
pub mod process;

pub use hashing::{HashValue, Hasher};
pub use locator::{ExecutableLocator, FixedLocator};
pub use mapper::OutputMapper;
pub use process::{ExecutionOutput, ProcessRunner};

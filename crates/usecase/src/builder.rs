// crates/usecase/src/builder.rs
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use cloc_runner_domain::{ClocOptions, Flag, Invocation, OptionSet, Parameter};
use cloc_runner_ports::{ExecutableLocator, FixedLocator, OutputMapper, ProcessRunner};
use cloc_runner_shared_kernel::{ConfigurationError, Result, path::logical_absolute};
use log::debug;

use crate::command::Cloc;

/// Step-by-step construction of [`Cloc`] commands.
///
/// Every setter validates its input immediately, so an invalid value is
/// reported where it is set rather than when the tool runs. A builder can
/// be reused: [`ClocBuilder::target`] borrows it and freezes the current
/// settings into an independent command.
#[derive(Clone)]
pub struct ClocBuilder {
    runner: Arc<dyn ProcessRunner>,
    locator: Arc<dyn ExecutableLocator>,
    default_mapper: Arc<dyn OutputMapper>,
    mapper: Arc<dyn OutputMapper>,
    options: OptionSet,
    timeout: u64,
    working_dir: Option<PathBuf>,
}

impl ClocBuilder {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        locator: Arc<dyn ExecutableLocator>,
        default_mapper: Arc<dyn OutputMapper>,
    ) -> Self {
        Self {
            runner,
            locator,
            mapper: Arc::clone(&default_mapper),
            default_mapper,
            options: OptionSet::default(),
            timeout: 0,
            working_dir: None,
        }
    }

    /// Timeout in seconds, or `0` for none.
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Number of worker processes the tool may use; `0` or `1` disable multiprocessing.
    ///
    /// The value is handed to the tool as is, even when it exceeds the number of cores.
    #[must_use]
    pub fn cores(mut self, value: usize) -> Self {
        if value > 1 {
            self.options.put(Parameter::Processes, value);
        } else {
            self.options.remove(Parameter::Processes);
        }
        self
    }

    /// One worker process per logical CPU.
    #[must_use]
    pub fn all_cores(self) -> Self {
        self.cores(num_cpus::get())
    }

    /// Skip files larger than `megabytes`. The tool's own default is 100.
    ///
    /// The tool needs roughly twenty times the largest file's size in memory.
    pub fn max_file_size(mut self, megabytes: u32) -> Result<Self> {
        if megabytes == 0 {
            return Err(ConfigurationError::InvalidValue {
                option: "max_file_size",
                reason: "Maximum file size must be greater than 0!".to_string(),
            }
            .into());
        }
        self.options.put(Parameter::MaxFileSize, megabytes);
        Ok(self)
    }

    /// Count docstrings as code instead of comments.
    #[must_use]
    pub fn docstring_as_code(self, value: bool) -> Self {
        self.flag(Flag::DocstringAsCode, value)
    }

    /// Follow symbolic links to directories (links to files are always followed).
    #[must_use]
    pub fn follow_links(self, value: bool) -> Self {
        self.flag(Flag::FollowLinks, value)
    }

    /// Do not descend into subdirectories of the target.
    #[must_use]
    pub fn no_recurse(self, value: bool) -> Self {
        self.flag(Flag::NoRecurse, value)
    }

    /// Process binary files as well as text files.
    #[must_use]
    pub fn read_binary_files(self, value: bool) -> Self {
        self.flag(Flag::ReadBinaryFiles, value)
    }

    /// Skip the duplicate-content check; identical files are then counted repeatedly.
    #[must_use]
    pub fn skip_uniqueness(self, value: bool) -> Self {
        self.flag(Flag::SkipUniqueness, value)
    }

    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Run this executable instead of the one the locator would find.
    #[must_use]
    pub fn executable(self, path: impl Into<PathBuf>) -> Self {
        self.locator(Arc::new(FixedLocator(path.into())))
    }

    #[must_use]
    pub fn locator(mut self, locator: Arc<dyn ExecutableLocator>) -> Self {
        self.locator = locator;
        self
    }

    /// Install a custom output materializer, or restore the default with `None`.
    #[must_use]
    pub fn output_mapper(mut self, mapper: Option<Arc<dyn OutputMapper>>) -> Self {
        self.mapper = mapper.unwrap_or_else(|| Arc::clone(&self.default_mapper));
        self
    }

    /// Apply a deserialized option set through the validating setters.
    pub fn apply(self, options: &ClocOptions) -> Result<Self> {
        let builder = self
            .timeout(options.timeout)
            .cores(options.cores)
            .no_recurse(options.no_recurse)
            .follow_links(options.follow_links)
            .read_binary_files(options.read_binary_files)
            .skip_uniqueness(options.skip_uniqueness)
            .docstring_as_code(options.docstring_as_code);
        match options.max_file_size {
            Some(megabytes) => builder.max_file_size(megabytes),
            None => Ok(builder),
        }
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Freeze the current settings into a command over `path`.
    ///
    /// Fails without resolving the executable when `path` does not exist.
    pub fn target(&self, path: impl AsRef<Path>) -> Result<Cloc> {
        let path = path.as_ref();
        if !path.try_exists().unwrap_or(false) {
            return Err(ConfigurationError::TargetNotFound { path: path.to_path_buf() }.into());
        }
        let target = logical_absolute(path);
        let program = self.locator.locate()?;

        let mut builder = Invocation::builder();
        builder
            .program(program)
            .arg(target.as_os_str())
            .working_dir(self.working_dir.clone())
            .timeout((self.timeout > 0).then(|| Duration::from_secs(self.timeout)));
        for arg in self.options.render() {
            builder.arg(arg);
        }
        let invocation = Invocation::build(&builder)?;
        debug!("configured command: {invocation}");

        Ok(Cloc::new(target, invocation, Arc::clone(&self.runner), Arc::clone(&self.mapper)))
    }

    fn flag(mut self, flag: Flag, enabled: bool) -> Self {
        self.options.set_flag(flag, enabled);
        self
    }
}

impl fmt::Debug for ClocBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClocBuilder")
            .field("options", &self.options)
            .field("timeout", &self.timeout)
            .field("working_dir", &self.working_dir)
            .field("mapper", &self.mapper)
            .finish_non_exhaustive()
    }
}

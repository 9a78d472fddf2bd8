use std::{
    path::PathBuf,
    sync::{
        Mutex, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use cloc_runner_domain::Invocation;
use cloc_runner_ports::{ExecutionOutput, OutputMapper, ProcessRunner};
use cloc_runner_shared_kernel::{ClocError, OutputError, Result};
use serde_json::{Map, Value};

pub fn invocation() -> Invocation {
    let mut builder = Invocation::builder();
    builder.program("cloc").arg("src").arg("--json").arg("--quiet");
    Invocation::build(&builder).expect("invocation")
}

enum Reply {
    Output(ExecutionOutput),
    Timeout,
}

/// Records every invocation and answers with a canned reply.
pub struct StubRunner {
    reply: Reply,
    calls: Mutex<Vec<Invocation>>,
}

impl StubRunner {
    pub fn replying(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        let output = ExecutionOutput { exit_code, stdout: stdout.to_string(), stderr: stderr.to_string() };
        Self { reply: Reply::Output(output), calls: Mutex::new(Vec::new()) }
    }

    pub fn timing_out() -> Self {
        Self { reply: Reply::Timeout, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for StubRunner {
    fn run(&self, invocation: &Invocation) -> Result<ExecutionOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        match &self.reply {
            Reply::Output(output) => Ok(output.clone()),
            Reply::Timeout => Err(ClocError::Timeout {
                program: invocation.program().to_path_buf(),
                limit: invocation.timeout().unwrap_or(Duration::from_secs(1)),
            }),
        }
    }
}

/// JSON mapper that counts its calls and can tag every tree it returns.
#[derive(Debug, Default)]
pub struct StubMapper {
    tag: Option<&'static str>,
    calls: AtomicUsize,
}

impl StubMapper {
    pub fn json() -> Self {
        Self::default()
    }

    pub fn tagging(tag: &'static str) -> Self {
        Self { tag: Some(tag), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OutputMapper for StubMapper {
    fn read_tree(&self, stdout: &str) -> Result<Map<String, Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut tree = match serde_json::from_str::<Value>(stdout)? {
            Value::Object(tree) => tree,
            _ => return Err(OutputError::UnexpectedShape { details: "not an object".into() }.into()),
        };
        if let Some(tag) = self.tag {
            tree.insert("mapped_by".to_string(), Value::String(tag.to_string()));
        }
        Ok(tree)
    }
}

pub fn existing_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

pub fn fake_program() -> PathBuf {
    PathBuf::from("/opt/cloc/bin/cloc")
}

type LogRecords = Mutex<Vec<(log::Level, String)>>;

struct CapturingLogger(LogRecords);

impl log::Log for CapturingLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.0.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Installs a process-wide logger on first use and returns everything it has recorded.
pub fn captured_logs() -> &'static LogRecords {
    static LOGGER: OnceLock<CapturingLogger> = OnceLock::new();
    let logger = LOGGER.get_or_init(|| CapturingLogger(Mutex::new(Vec::new())));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
    &logger.0
}

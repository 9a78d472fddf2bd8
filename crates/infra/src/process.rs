// crates/infra/src/process.rs
use std::{
    io::Read,
    process::{Child, Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use cloc_runner_domain::Invocation;
use cloc_runner_ports::{ExecutionOutput, ProcessRunner};
use cloc_runner_shared_kernel::{ClocError, ExecutionError, Result};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs invocations with `std::process`, capturing both output streams.
///
/// Streams are drained on dedicated threads so a chatty child can never
/// block on a full pipe while we wait for it.
#[derive(Debug, Clone, Copy)]
pub struct StdProcessRunner {
    poll_interval: Duration,
}

impl Default for StdProcessRunner {
    fn default() -> Self {
        Self { poll_interval: DEFAULT_POLL_INTERVAL }
    }
}

impl StdProcessRunner {
    /// How often a bounded run checks whether the child has exited.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    fn wait_until(&self, child: &mut Child, limit: Duration) -> std::io::Result<Option<ExitStatus>> {
        // A deadline past the end of the clock is no deadline at all.
        let Some(deadline) = Instant::now().checked_add(limit) else {
            return child.wait().map(Some);
        };
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            thread::sleep(self.poll_interval.min(deadline - now));
        }
    }
}

impl ProcessRunner for StdProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ExecutionOutput> {
        let program = invocation.program();
        let mut command = Command::new(program);
        command.args(invocation.args()).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = invocation.working_dir() {
            command.current_dir(dir);
        }

        debug!("spawning: {invocation}");
        let mut child = command
            .spawn()
            .map_err(|source| ExecutionError::Spawn { program: program.to_path_buf(), source })?;
        let streams = CapturedStreams::attach(&mut child);

        let waited = match invocation.timeout() {
            None => child.wait().map(Some),
            Some(limit) => self.wait_until(&mut child, limit),
        };
        let status = match waited {
            Ok(Some(status)) => status,
            Ok(None) => {
                let limit = invocation.timeout().unwrap_or_default();
                warn!("'{}' exceeded {limit:?}; terminating pid {}", program.display(), child.id());
                let _ = child.kill();
                let _ = child.wait();
                // Readers may still be blocked on pipes inherited by grandchildren; leave them detached.
                return Err(ClocError::Timeout { program: program.to_path_buf(), limit });
            }
            Err(source) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExecutionError::Wait { program: program.to_path_buf(), source }.into());
            }
        };

        let (stdout, stderr) = streams.collect();
        let exit_code = status.code().unwrap_or(-1);
        debug!("'{}' exited with {exit_code}", program.display());
        Ok(ExecutionOutput { exit_code, stdout, stderr })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

struct CapturedStreams {
    rx: Receiver<(Stream, String)>,
    pending: usize,
}

impl CapturedStreams {
    fn attach(child: &mut Child) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(2);
        let mut pending = 0;
        if let Some(out) = child.stdout.take() {
            spawn_reader(Stream::Stdout, out, tx.clone());
            pending += 1;
        }
        if let Some(err) = child.stderr.take() {
            spawn_reader(Stream::Stderr, err, tx);
            pending += 1;
        }
        Self { rx, pending }
    }

    fn collect(self) -> (String, String) {
        let mut stdout = String::new();
        let mut stderr = String::new();
        for _ in 0..self.pending {
            match self.rx.recv() {
                Ok((Stream::Stdout, text)) => stdout = text,
                Ok((Stream::Stderr, text)) => stderr = text,
                Err(_) => break,
            }
        }
        (stdout, stderr)
    }
}

fn spawn_reader<R: Read + Send + 'static>(kind: Stream, mut reader: R, tx: Sender<(Stream, String)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Err(err) = reader.read_to_end(&mut buf) {
            warn!("failed to read child {kind:?}: {err}");
        }
        let _ = tx.send((kind, String::from_utf8_lossy(&buf).into_owned()));
    });
}

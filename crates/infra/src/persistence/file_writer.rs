// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted so a crash never leaves a truncated file behind.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        if let Err(err) = Self::write_and_rename(&tmp, path, data) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_and_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(tmp)?);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        drop(w);
        fs::rename(tmp, path)
    }
}

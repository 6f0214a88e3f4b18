//! Append-only trace file that rolls over once it grows past a size limit.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Size at which the active trace file is rolled over (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rolled-over files kept next to the active one.
pub const DEFAULT_BACKUPS: usize = 3;

/// Line-oriented writer with size-based rollover.
///
/// The file handle is opened lazily on the first write, so construction never
/// touches the filesystem. When the active file exceeds `max_bytes` it is
/// renamed to `<stem>.<ext>.<unix-nanos>` and only the newest `backups`
/// rolled files survive.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Writer with the default 10 MB limit and three backups.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when rollover, opening or writing
    /// fails, or when the lock was poisoned by a panicking writer.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| {
                io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}"))
            })?;

        if self.needs_rollover() {
            *handle = None;
            self.roll_over()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rollover(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn roll_over(&self) -> io::Result<()> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());

        if self.path.exists() {
            fs::rename(&self.path, self.rolled_name(stamp))?;
        }
        self.prune_backups()
    }

    fn rolled_name(&self, stamp: u128) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".{stamp}"));
        self.path.with_file_name(name)
    }

    /// Deletes all but the newest `backups` rolled files.
    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let Some(active) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{active}.");

        let mut rolled: Vec<(u128, PathBuf)> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let path = entry.path();
                let stamp = path
                    .file_name()?
                    .to_str()?
                    .strip_prefix(&prefix)?
                    .parse()
                    .ok()?;
                Some((stamp, path))
            })
            .collect();

        rolled.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, stale) in rolled.iter().skip(self.backups) {
            if let Err(e) = fs::remove_file(stale) {
                tracing::trace!(
                    path = %stale.display(),
                    error = %e,
                    "could not remove old trace file"
                );
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolled_count(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("trace.json"));

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rolls_over_past_the_limit_and_keeps_backups_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 2);

        for i in 0..6 {
            file.append_line(&format!("line-{i}-padding")).unwrap();
        }

        assert!(rolled_count(dir.path()) <= 2);
        assert!(rolled_count(dir.path()) >= 1);
        let active = fs::read_to_string(file.path()).unwrap();
        assert_eq!(active, "line-5-padding\n");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("absent").join("trace.json"));
        assert!(file.append_line("x").is_err());
    }
}

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log files larger than this are trimmed at startup (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Bytes of the most recent entries kept when trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

const LOG_FILE_NAME: &str = "gridlist.log";

/// Path of the log file inside `data_dir`.
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

/// Trim `path` down to its last `keep` bytes once it grows past `max`.
///
/// The cut is moved forward to the next line break so no entry is split.
/// Returns `true` if the file was rewritten.
fn trim_log(path: &Path, max: u64, keep: u64) -> io::Result<bool> {
    let len = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    if len <= max {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(path)?;
    file.write_all(b"--- earlier entries trimmed ---\n")?;
    file.write_all(&tail[start..])?;
    Ok(true)
}

/// `MakeWriter` over one log file shared by every span and event.
#[derive(Clone)]
struct SharedLogFile(Arc<Mutex<File>>);

struct SharedLogWriter(Arc<Mutex<File>>);

impl SharedLogWriter {
    fn with_file<T>(&self, op: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        op(&mut file)
    }
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(|file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter(Arc::clone(&self.0))
    }
}

/// Default filter: the binary at `level`, the engine only when something is off.
fn default_filter(level: &str) -> String {
    format!("gridlist={level},gridlist_core=warn")
}

/// Send `tracing` output to `{data_dir}/gridlist.log`.
///
/// The terminal belongs to the TUI, so nothing is ever logged to stdout or
/// stderr once this returns. `RUST_LOG` overrides `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let path = log_path(data_dir);

    let trimmed = match trim_log(&path, MAX_LOG_SIZE, KEEP_SIZE) {
        Ok(trimmed) => trimmed,
        Err(err) => {
            eprintln!("Warning: could not trim {}: {err}", path.display());
            false
        }
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(SharedLogFile(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(log_path = %path.display(), trimmed, "gridlist logging initialized");
    Ok(())
}

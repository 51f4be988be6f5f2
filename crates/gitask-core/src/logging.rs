//! Log setup for the prompt binary.
//!
//! The prompt owns stdout and the terminal is in raw mode while it runs, so
//! events go to `~/.local/state/gitask/gitask.log`. When that file cannot be
//! used, only warnings and errors reach stderr, with CRLF line endings so they
//! do not break the prompt layout.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "info,gitask=debug,gitask_core=debug,gitask_cli=debug";
const STDERR_FILTER: &str = "warn";

/// Writes `\r\n` for every bare `\n`; raw mode does not return the cursor on LF.
pub struct CrlfWriter<W> {
    inner: W,
    last_was_cr: bool,
}

impl<W: io::Write> CrlfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            last_was_cr: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> io::Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut out = Vec::with_capacity(buf.len() + 2);
        for &b in buf {
            if b == b'\n' && !self.last_was_cr {
                out.push(b'\r');
            }
            out.push(b);
            self.last_was_cr = b == b'\r';
        }
        self.inner.write_all(&out)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn terminal_writer() -> CrlfWriter<io::Stderr> {
    CrlfWriter::new(io::stderr())
}

/// Log file handle, or the terminal if the handle cannot be cloned.
enum LogSink {
    File(fs::File),
    Terminal(CrlfWriter<io::Stderr>),
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Terminal(t) => t.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Terminal(t) => t.flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or_else(|_| LogSink::Terminal(terminal_writer()))
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gitask")?;
    Ok(xdg_dirs.get_state_home().join("gitask").join("gitask.log"))
}

/// Log to the state-dir file. Returns Err when the file cannot be opened so
/// the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_FILTER))
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!("gitask logging to {}", path.display());
    Ok(())
}

/// Warnings and errors to stderr. Debug events would interleave with the
/// prompt, so `RUST_LOG` is the only way to get them here.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(terminal_writer)
        .with_ansi(false)
        .without_time()
        .try_init();
}

//! Host platform capability traits for dependency injection.
//!
//! Everything the primitive layer needs from the operating system goes
//! through one of these traits. The `Std*` types delegate to the real host;
//! `BufferedConsole` keeps console traffic in memory.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::{HostError, HostResult};
use crate::text::Text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Symlink,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileStat {
    pub kind: FileKind,
    pub len: u64,
}

pub trait FileSystem {
    fn read(&self, path: &Path) -> HostResult<Vec<u8>>;
    /// Create or truncate, then write everything.
    fn write(&self, path: &Path, data: &[u8]) -> HostResult<()>;
    /// Create if missing, then append.
    fn append(&self, path: &Path, data: &[u8]) -> HostResult<()>;
    /// Metadata, following symlinks.
    fn stat(&self, path: &Path) -> HostResult<FileStat>;
    /// Metadata of the entry itself.
    fn lstat(&self, path: &Path) -> HostResult<FileStat>;
    fn create_dir(&self, path: &Path) -> HostResult<()>;
    fn create_dir_all(&self, path: &Path) -> HostResult<()>;
    fn remove_file(&self, path: &Path) -> HostResult<()>;
    fn remove_dir(&self, path: &Path) -> HostResult<()>;
    /// Names of the immediate children, in host order.
    fn read_dir(&self, path: &Path) -> HostResult<Vec<PathBuf>>;
    fn copy_file(&self, from: &Path, to: &Path) -> HostResult<()>;
    fn rename(&self, from: &Path, to: &Path) -> HostResult<()>;
    fn absolute(&self, path: &Path) -> HostResult<PathBuf>;
    /// Absolute path with every link resolved. The path must exist.
    fn canonicalize(&self, path: &Path) -> HostResult<PathBuf>;
    fn current_dir(&self) -> HostResult<PathBuf>;
    fn set_current_dir(&self, path: &Path) -> HostResult<()>;
}

pub struct StdFileSystem;

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn to_stat(meta: &std::fs::Metadata) -> FileStat {
    let ft = meta.file_type();
    let kind = if ft.is_symlink() {
        FileKind::Symlink
    } else if ft.is_dir() {
        FileKind::Dir
    } else if ft.is_file() {
        FileKind::File
    } else {
        FileKind::Other
    };
    FileStat {
        kind,
        len: meta.len(),
    }
}

impl FileSystem for StdFileSystem {
    fn read(&self, path: &Path) -> HostResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| HostError::from_io("read", display(path), e))
    }

    fn write(&self, path: &Path, data: &[u8]) -> HostResult<()> {
        std::fs::write(path, data).map_err(|e| HostError::from_io("write", display(path), e))
    }

    fn append(&self, path: &Path, data: &[u8]) -> HostResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| HostError::from_io("append", display(path), e))?;
        file.write_all(data)
            .map_err(|e| HostError::from_io("append", display(path), e))
    }

    fn stat(&self, path: &Path) -> HostResult<FileStat> {
        let meta = std::fs::metadata(path).map_err(|e| HostError::from_io("stat", display(path), e))?;
        Ok(to_stat(&meta))
    }

    fn lstat(&self, path: &Path) -> HostResult<FileStat> {
        let meta = std::fs::symlink_metadata(path)
            .map_err(|e| HostError::from_io("lstat", display(path), e))?;
        Ok(to_stat(&meta))
    }

    fn create_dir(&self, path: &Path) -> HostResult<()> {
        std::fs::create_dir(path).map_err(|e| HostError::from_io("mkdir", display(path), e))
    }

    fn create_dir_all(&self, path: &Path) -> HostResult<()> {
        std::fs::create_dir_all(path).map_err(|e| HostError::from_io("mkdirp", display(path), e))
    }

    fn remove_file(&self, path: &Path) -> HostResult<()> {
        std::fs::remove_file(path).map_err(|e| HostError::from_io("unlink", display(path), e))
    }

    fn remove_dir(&self, path: &Path) -> HostResult<()> {
        std::fs::remove_dir(path).map_err(|e| HostError::from_io("rmdir", display(path), e))
    }

    fn read_dir(&self, path: &Path) -> HostResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| HostError::from_io("readdir", display(path), e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| HostError::from_io("readdir", display(path), e))?;
            names.push(PathBuf::from(entry.file_name()));
        }
        Ok(names)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> HostResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| HostError::from_io("copy", display(from), e))
    }

    fn rename(&self, from: &Path, to: &Path) -> HostResult<()> {
        std::fs::rename(from, to).map_err(|e| HostError::from_io("rename", display(from), e))
    }

    fn absolute(&self, path: &Path) -> HostResult<PathBuf> {
        std::path::absolute(path).map_err(|e| HostError::from_io("absolute", display(path), e))
    }

    fn canonicalize(&self, path: &Path) -> HostResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|e| HostError::from_io("realpath", display(path), e))
    }

    fn current_dir(&self) -> HostResult<PathBuf> {
        std::env::current_dir().map_err(|e| HostError::from_io("getcwd", "", e))
    }

    fn set_current_dir(&self, path: &Path) -> HostResult<()> {
        std::env::set_current_dir(path).map_err(|e| HostError::from_io("chdir", display(path), e))
    }
}

/// Raw console streams. Reads hand back whole lines including the terminator.
pub trait ConsoleStreams {
    fn write_out(&mut self, bytes: &[u8]) -> io::Result<()>;
    fn write_err(&mut self, bytes: &[u8]) -> io::Result<()>;
    fn flush_out(&mut self) -> io::Result<()>;
    /// Append one line (terminator included) to `buf`; 0 at end of stream.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}

pub struct StdConsole;

impl ConsoleStreams for StdConsole {
    fn write_out(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(bytes)
    }

    fn write_err(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(bytes)
    }

    fn flush_out(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        io::stdin().lock().read_until(b'\n', buf)
    }
}

#[derive(Default)]
struct BufferedState {
    input: VecDeque<u8>,
    out: Vec<u8>,
    err: Vec<u8>,
}

/// In-memory console. Clones share the same buffers, so a caller can keep a
/// handle while the console itself is boxed inside a `Capabilities`.
#[derive(Clone, Default)]
pub struct BufferedConsole {
    state: Rc<RefCell<BufferedState>>,
}

impl BufferedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: impl AsRef<[u8]>) -> Self {
        let console = Self::new();
        console.push_input(input);
        console
    }

    pub fn push_input(&self, input: impl AsRef<[u8]>) {
        self.state.borrow_mut().input.extend(input.as_ref().iter().copied());
    }

    pub fn output(&self) -> Text {
        Text::from_bytes(&self.state.borrow().out)
    }

    pub fn diagnostics(&self) -> Text {
        Text::from_bytes(&self.state.borrow().err)
    }

    pub fn take_output(&self) -> Text {
        Text::from_vec(std::mem::take(&mut self.state.borrow_mut().out))
    }

    pub fn take_diagnostics(&self) -> Text {
        Text::from_vec(std::mem::take(&mut self.state.borrow_mut().err))
    }
}

impl ConsoleStreams for BufferedConsole {
    fn write_out(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.state.borrow_mut().out.extend_from_slice(bytes);
        Ok(())
    }

    fn write_err(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.state.borrow_mut().err.extend_from_slice(bytes);
        Ok(())
    }

    fn flush_out(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let mut state = self.state.borrow_mut();
        let mut n = 0;
        while let Some(c) = state.input.pop_front() {
            buf.push(c);
            n += 1;
            if c == b'\n' {
                break;
            }
        }
        Ok(n)
    }
}

/// Source of seeds for streams that were not seeded explicitly.
pub trait Entropy {
    fn seed(&self) -> u64;
}

pub struct SystemEntropy;

impl Entropy for SystemEntropy {
    fn seed(&self) -> u64 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        let local = 0u8;
        let addr = &local as *const u8 as u64;
        nanos ^ (u64::from(std::process::id()) << 32) ^ addr.rotate_left(17)
    }
}

/// Advances a 64-bit state and returns the next raw draw.
pub trait RngAlgorithm: Send {
    fn next_u64(&self, state: &mut u64) -> u64;
}

/// SplitMix64: one 64-bit state word, full period, cheap to reseed.
pub struct SplitMix64;

impl RngAlgorithm for SplitMix64 {
    fn next_u64(&self, state: &mut u64) -> u64 {
        *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = *state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

pub struct Capabilities {
    pub fs: Box<dyn FileSystem>,
    pub console: Box<dyn ConsoleStreams>,
    pub entropy: Box<dyn Entropy>,
    pub rng: Box<dyn RngAlgorithm>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            fs: Box::new(StdFileSystem),
            console: Box::new(StdConsole),
            entropy: Box::new(SystemEntropy),
            rng: Box::new(SplitMix64),
        }
    }
}

/// Host path for a text value. Unix paths are raw bytes; elsewhere the text
/// goes through lossy UTF-8.
#[cfg(unix)]
pub fn text_to_path(s: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(s))
}

#[cfg(not(unix))]
pub fn text_to_path(s: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(s).into_owned())
}

#[cfg(unix)]
pub fn path_to_text(p: &Path) -> Text {
    use std::os::unix::ffi::OsStrExt;
    Text::from_bytes(p.as_os_str().as_bytes())
}

#[cfg(not(unix))]
pub fn path_to_text(p: &Path) -> Text {
    Text::from(p.to_string_lossy().into_owned())
}

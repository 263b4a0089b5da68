//! Whole-file I/O, metadata, directory mutation and working-directory access.
//!
//! Every operation resolves host failures at this boundary: reads yield
//! `None` or an empty value, mutations yield `false` or a count. The host
//! error itself is only visible as a `tracing` event.

mod path;

use std::path::Path;

use crate::errors::{ErrorKind, HostError, HostResult};
use crate::host::{FileKind, FileSystem, StdFileSystem, path_to_text, text_to_path};
use crate::text::Text;

pub use path::{extension, filename, is_absolute, join, join_all, parent, stem};

fn collapse(op: &'static str, err: &HostError) {
    tracing::debug!(op, path = %err.path, kind = err.kind.as_str(), error = %err, "host failure");
}

/// Filesystem operations over an injected host.
pub struct Fs {
    host: Box<dyn FileSystem>,
}

impl Default for Fs {
    fn default() -> Self {
        Self::std()
    }
}

impl Fs {
    pub fn new(host: Box<dyn FileSystem>) -> Self {
        Self { host }
    }

    pub fn std() -> Self {
        Self::new(Box::new(StdFileSystem))
    }

    fn ok_or_log<T>(&self, op: &'static str, res: HostResult<T>) -> Option<T> {
        res.map_err(|e| collapse(op, &e)).ok()
    }

    /// Full contents, or `None` when the file cannot be read.
    pub fn read_file(&self, path: impl AsRef<[u8]>) -> Option<Text> {
        let path = text_to_path(path.as_ref());
        self.ok_or_log("readFile", self.host.read(&path))
            .map(Text::from_vec)
    }

    pub fn write_file(&self, path: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> bool {
        let path = text_to_path(path.as_ref());
        self.ok_or_log("writeFile", self.host.write(&path, data.as_ref()))
            .is_some()
    }

    pub fn append_file(&self, path: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> bool {
        let path = text_to_path(path.as_ref());
        self.ok_or_log("appendFile", self.host.append(&path, data.as_ref()))
            .is_some()
    }

    /// Lines without terminators (`\n` or `\r\n`). A final terminator does
    /// not produce a trailing empty line. Unreadable files give no lines.
    pub fn read_lines(&self, path: impl AsRef<[u8]>) -> Vec<Text> {
        let Some(contents) = self.read_file(path) else {
            return Vec::new();
        };
        let mut bytes = contents.as_bytes();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        } else if bytes.is_empty() {
            return Vec::new();
        }
        bytes
            .split(|&c| c == b'\n')
            .map(|line| Text::from_bytes(line.strip_suffix(b"\r").unwrap_or(line)))
            .collect()
    }

    fn kind(&self, path: &Path) -> Option<FileKind> {
        match self.host.stat(path) {
            Ok(stat) => Some(stat.kind),
            Err(e) => {
                if !e.is_not_found() {
                    collapse("stat", &e);
                }
                None
            }
        }
    }

    pub fn exists(&self, path: impl AsRef<[u8]>) -> bool {
        self.kind(&text_to_path(path.as_ref())).is_some()
    }

    pub fn is_file(&self, path: impl AsRef<[u8]>) -> bool {
        self.kind(&text_to_path(path.as_ref())) == Some(FileKind::File)
    }

    pub fn is_dir(&self, path: impl AsRef<[u8]>) -> bool {
        self.kind(&text_to_path(path.as_ref())) == Some(FileKind::Dir)
    }

    /// Size in bytes of a regular file, -1 for anything else.
    pub fn file_size(&self, path: impl AsRef<[u8]>) -> i64 {
        let path = text_to_path(path.as_ref());
        match self.host.stat(&path) {
            Ok(stat) if stat.kind == FileKind::File => i64::try_from(stat.len).unwrap_or(i64::MAX),
            Ok(_) => -1,
            Err(e) => {
                if !e.is_not_found() {
                    collapse("fileSize", &e);
                }
                -1
            }
        }
    }

    /// Create one directory level. Fails when the parent is missing or the
    /// path already exists.
    pub fn mkdir(&self, path: impl AsRef<[u8]>) -> bool {
        let path = text_to_path(path.as_ref());
        self.ok_or_log("mkdir", self.host.create_dir(&path)).is_some()
    }

    /// Create every missing level. Succeeds when the directory already exists.
    pub fn mkdirp(&self, path: impl AsRef<[u8]>) -> bool {
        let path = text_to_path(path.as_ref());
        self.ok_or_log("mkdirp", self.host.create_dir_all(&path))
            .is_some()
    }

    /// Delete a file, a symlink or an empty directory.
    pub fn remove(&self, path: impl AsRef<[u8]>) -> bool {
        let path = text_to_path(path.as_ref());
        let res = self.host.lstat(&path).and_then(|stat| match stat.kind {
            FileKind::Dir => self.host.remove_dir(&path),
            _ => self.host.remove_file(&path),
        });
        self.ok_or_log("remove", res).is_some()
    }

    /// Delete recursively without following symlinks and return how many
    /// entries went away. A missing path removes nothing. The walk stops at
    /// the first failure and reports what it removed so far.
    pub fn remove_all(&self, path: impl AsRef<[u8]>) -> i64 {
        let path = text_to_path(path.as_ref());
        let mut removed = 0;
        match self.remove_tree(&path, &mut removed) {
            Ok(()) => {}
            Err(e) if e.is_not_found() && removed == 0 => {}
            Err(e) => {
                tracing::warn!(path = %e.path, removed, error = %e, "removeAll stopped early");
            }
        }
        removed
    }

    fn remove_tree(&self, path: &Path, removed: &mut i64) -> HostResult<()> {
        let stat = self.host.lstat(path)?;
        if stat.kind == FileKind::Dir {
            for name in self.host.read_dir(path)? {
                self.remove_tree(&path.join(name), removed)?;
            }
            self.host.remove_dir(path)?;
        } else {
            self.host.remove_file(path)?;
        }
        *removed += 1;
        Ok(())
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (self.host.canonicalize(a), self.host.canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Copy a regular file, replacing `to` if it exists. Copying a file onto
    /// itself fails and leaves it untouched.
    pub fn copy(&self, from: impl AsRef<[u8]>, to: impl AsRef<[u8]>) -> bool {
        let from = text_to_path(from.as_ref());
        let to = text_to_path(to.as_ref());
        let res = self.host.stat(&from).and_then(|stat| {
            if stat.kind != FileKind::File {
                return Err(HostError::new(
                    ErrorKind::InvalidArgument,
                    "copy",
                    from.to_string_lossy(),
                    "source is not a regular file",
                ));
            }
            // Copying a file onto itself would truncate it before the read.
            if self.same_file(&from, &to) {
                return Err(HostError::new(
                    ErrorKind::InvalidArgument,
                    "copy",
                    from.to_string_lossy(),
                    "source and destination are the same file",
                ));
            }
            self.host.copy_file(&from, &to)
        });
        self.ok_or_log("copy", res).is_some()
    }

    /// Rename `from` to `to`, replacing an existing file. A file that cannot
    /// be renamed (across devices, say) is copied and then removed.
    pub fn move_path(&self, from: impl AsRef<[u8]>, to: impl AsRef<[u8]>) -> bool {
        let from = text_to_path(from.as_ref());
        let to = text_to_path(to.as_ref());
        let err = match self.host.rename(&from, &to) {
            Ok(()) => return true,
            Err(e) => e,
        };
        if err.is_not_found() || self.kind(&from) != Some(FileKind::File) {
            collapse("move", &err);
            return false;
        }
        let res = self
            .host
            .copy_file(&from, &to)
            .and_then(|()| self.host.remove_file(&from));
        self.ok_or_log("move", res).is_some()
    }

    /// Names of the immediate children in host order, empty when the path
    /// cannot be listed.
    pub fn list_dir(&self, path: impl AsRef<[u8]>) -> Vec<Text> {
        let path = text_to_path(path.as_ref());
        self.ok_or_log("listDir", self.host.read_dir(&path))
            .map(|names| names.iter().map(|n| path_to_text(n)).collect())
            .unwrap_or_default()
    }

    /// Absolute form of `path` without touching the file tree. When the host
    /// cannot resolve it the input comes back unchanged.
    pub fn absolute(&self, path: impl AsRef<[u8]>) -> Text {
        let raw = path.as_ref();
        match self.ok_or_log("absolute", self.host.absolute(&text_to_path(raw))) {
            Some(abs) => path_to_text(&abs),
            None => Text::from_bytes(raw),
        }
    }

    /// Current working directory, empty when the host cannot report it.
    pub fn cwd(&self) -> Text {
        self.ok_or_log("cwd", self.host.current_dir())
            .map(|p| path_to_text(&p))
            .unwrap_or_default()
    }

    pub fn chdir(&self, path: impl AsRef<[u8]>) -> bool {
        let path = text_to_path(path.as_ref());
        self.ok_or_log("chdir", self.host.set_current_dir(&path))
            .is_some()
    }
}

pub fn read_file(path: impl AsRef<[u8]>) -> Option<Text> {
    Fs::std().read_file(path)
}

pub fn write_file(path: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> bool {
    Fs::std().write_file(path, data)
}

pub fn append_file(path: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> bool {
    Fs::std().append_file(path, data)
}

pub fn read_lines(path: impl AsRef<[u8]>) -> Vec<Text> {
    Fs::std().read_lines(path)
}

pub fn exists(path: impl AsRef<[u8]>) -> bool {
    Fs::std().exists(path)
}

pub fn is_file(path: impl AsRef<[u8]>) -> bool {
    Fs::std().is_file(path)
}

pub fn is_dir(path: impl AsRef<[u8]>) -> bool {
    Fs::std().is_dir(path)
}

pub fn file_size(path: impl AsRef<[u8]>) -> i64 {
    Fs::std().file_size(path)
}

pub fn mkdir(path: impl AsRef<[u8]>) -> bool {
    Fs::std().mkdir(path)
}

pub fn mkdirp(path: impl AsRef<[u8]>) -> bool {
    Fs::std().mkdirp(path)
}

pub fn remove(path: impl AsRef<[u8]>) -> bool {
    Fs::std().remove(path)
}

pub fn remove_all(path: impl AsRef<[u8]>) -> i64 {
    Fs::std().remove_all(path)
}

pub fn copy(from: impl AsRef<[u8]>, to: impl AsRef<[u8]>) -> bool {
    Fs::std().copy(from, to)
}

pub fn move_path(from: impl AsRef<[u8]>, to: impl AsRef<[u8]>) -> bool {
    Fs::std().move_path(from, to)
}

pub fn list_dir(path: impl AsRef<[u8]>) -> Vec<Text> {
    Fs::std().list_dir(path)
}

pub fn absolute(path: impl AsRef<[u8]>) -> Text {
    Fs::std().absolute(path)
}

pub fn cwd() -> Text {
    Fs::std().cwd()
}

pub fn chdir(path: impl AsRef<[u8]>) -> bool {
    Fs::std().chdir(path)
}

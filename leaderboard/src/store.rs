//! Durable backends for the leaderboard
//!
//! A store holds one opaque blob: the serialized entry list. Absence of the
//! blob is reported as `Ok(None)`, never as an error.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{LeaderboardError, LeaderboardResult};

/// Where leaderboard bytes live
pub trait Storage {
    /// Read the whole store. `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> LeaderboardResult<Option<Vec<u8>>>;

    /// Replace the whole store with `bytes`
    fn write(&mut self, bytes: &[u8]) -> LeaderboardResult<()>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> LeaderboardError {
        LeaderboardError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for FileStorage {
    fn read(&self) -> LeaderboardResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> LeaderboardResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        // Write beside the target then swap, so a crash never leaves half a file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|err| self.io_error(err))?;
        fs::rename(&tmp, &self.path).map_err(|err| self.io_error(err))
    }
}

/// In-process store. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Rc<RefCell<Option<Vec<u8>>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing bytes
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(bytes.into()))),
            read_only: false,
        }
    }

    /// A store that rejects every write
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> LeaderboardResult<Option<Vec<u8>>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&mut self, bytes: &[u8]) -> LeaderboardResult<()> {
        if self.read_only {
            return Err(LeaderboardError::ReadOnly);
        }
        *self.contents.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}

//! JSON-file skip store for the Brewfind engine.
//!
//! Persists the set of rejected candidate ids as a sorted JSON array of
//! strings. Saves write to a sibling temporary file and rename it into
//! place, so a crash mid-write leaves the previous state intact and the
//! engine observes each save as atomic. A missing file loads as the empty
//! set; that is the first-install state, not an error.

#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::fs;
use std::io;

use brewfind_core::{CandidateId, SkipStore};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Suffix appended to the target path for the temporary write.
const TMP_SUFFIX: &str = ".tmp";

/// Errors raised while reading or writing the persisted skip set.
#[derive(Debug, Error)]
pub enum FileSkipStoreError {
    /// Reading the skip file failed for a reason other than absence.
    #[error("failed to read skip file at {path}")]
    Read {
        /// Location of the skip file on disk.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// The skip file existed but was not a valid JSON id array.
    #[error("failed to decode skip file at {path}")]
    Decode {
        /// Location of the skip file on disk.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the skip set failed.
    #[error("failed to encode skip set for {path}")]
    Encode {
        /// Location of the skip file on disk.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the parent directory for the skip file failed.
    #[error("failed to create parent directory for {path}")]
    CreateParent {
        /// Target skip file whose parent could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// Writing the temporary file or renaming it into place failed.
    #[error("failed to write skip file at {path}")]
    Write {
        /// Location of the skip file on disk.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
}

/// Durable skip set backed by a JSON file.
///
/// # Examples
/// ```no_run
/// use camino::Utf8PathBuf;
/// use brewfind_store::FileSkipStore;
/// use brewfind_core::SkipStore;
///
/// let store = FileSkipStore::new(Utf8PathBuf::from("state/skips.json"));
/// let skips = store.load()?;
/// store.save(&skips)?;
/// # Ok::<(), brewfind_store::FileSkipStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSkipStore {
    path: Utf8PathBuf,
}

impl FileSkipStore {
    /// Build a store persisting to `path`.
    #[must_use]
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }

    /// Location of the skip file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl SkipStore for FileSkipStore {
    type Error = FileSkipStoreError;

    fn load(&self) -> Result<HashSet<CandidateId>, Self::Error> {
        let bytes = match fs::read(self.path.as_std_path()) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(source) => {
                return Err(FileSkipStoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| FileSkipStoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, skips: &HashSet<CandidateId>) -> Result<(), Self::Error> {
        ensure_parent_dir(&self.path).map_err(|source| FileSkipStoreError::CreateParent {
            path: self.path.clone(),
            source,
        })?;

        // Sorted output keeps the file deterministic across saves.
        let mut ids: Vec<&CandidateId> = skips.iter().collect();
        ids.sort();
        let json = serde_json::to_vec_pretty(&ids).map_err(|source| FileSkipStoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        let tmp_path = Utf8PathBuf::from(format!("{}{TMP_SUFFIX}", self.path));
        let write_result = fs::write(tmp_path.as_std_path(), &json)
            .and_then(|()| fs::rename(tmp_path.as_std_path(), self.path.as_std_path()));
        if let Err(source) = write_result {
            // Leave no stray temporary behind on a failed rename.
            if let Err(cleanup) = fs::remove_file(tmp_path.as_std_path()) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    log::debug!("failed to remove temporary skip file {tmp_path}: {cleanup}");
                }
            }
            return Err(FileSkipStoreError::Write {
                path: self.path.clone(),
                source,
            });
        }
        Ok(())
    }
}

/// Create the parent directory for `path` when it is missing.
fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => {
            fs::create_dir_all(parent.as_std_path())
        }
        _ => Ok(()),
    }
}

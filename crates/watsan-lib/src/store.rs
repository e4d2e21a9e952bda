//! Generic in-memory collection store backed by one JSON file.
//!
//! Holds an ordered sequence of records of one kind, assigns monotonic
//! ids, and rewrites the backing file eagerly after every mutation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, WatsanError};
use crate::jsonfile;
use crate::model::{Record, RecordId};

/// In-memory store for one record kind.
///
/// All data lives in memory; the backing file mirrors it after the most
/// recent successful persist. Ids are unique within the collection and
/// never reused, even after deletion: the counter only increases.
pub struct CollectionStore<R: Record> {
    records: Vec<R>,
    next_id: RecordId,
    path: PathBuf,
}

impl<R: Record> CollectionStore<R> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Open a store over the given backing file.
    ///
    /// Reads and parses the file on success; the id counter resumes at
    /// `1 + max(existing ids)`. An absent, unreadable, or malformed file
    /// degrades to an empty collection with counter 0. Never fails:
    /// load problems are logged and recovered.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let records: Vec<R> = match jsonfile::load(&path) {
            Ok(records) => {
                info!(
                    "Loaded {} {} record(s) from {}",
                    records.len(),
                    R::kind(),
                    path.display()
                );
                records
            }
            Err(WatsanError::FileNotFound(_)) => {
                debug!(
                    "No {} file at {}, starting empty",
                    R::kind(),
                    path.display()
                );
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Failed to load {} records from {}: {e}; starting empty",
                    R::kind(),
                    path.display()
                );
                Vec::new()
            }
        };

        let next_id = records.iter().map(Record::id).max().map_or(0, |max| max + 1);

        Self {
            records,
            next_id,
            path,
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create a new record from pre-validated fields.
    ///
    /// The `build` closure receives the assigned id and returns the
    /// finished record, which is appended in arrival order and persisted.
    /// Returned ids are strictly increasing per store instance, starting
    /// at 0.
    pub fn create<F>(&mut self, build: F) -> R
    where
        F: FnOnce(RecordId) -> R,
    {
        let id = self.next_id;
        self.next_id += 1;

        let record = build(id);
        debug_assert_eq!(record.id(), id);

        self.records.push(record.clone());
        self.persist();
        record
    }

    /// Remove the record with the given id and return it.
    ///
    /// The counter is untouched: a later create never reuses the id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has the id; nothing is persisted
    /// in that case.
    pub fn delete_by_id(&mut self, id: RecordId) -> Result<R> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| WatsanError::NotFound { kind: R::kind(), id })?;

        let removed = self.records.remove(index);
        self.persist();
        Ok(removed)
    }

    /// The full ordered sequence.
    #[must_use]
    pub fn all(&self) -> &[R] {
        &self.records
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next create will assign.
    #[must_use]
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Rewrite the whole backing file from memory.
    ///
    /// A failure is logged and swallowed; in-memory state stays
    /// authoritative and the file catches up on the next successful
    /// persist.
    fn persist(&self) {
        match jsonfile::save(&self.path, &self.records) {
            Ok(()) => debug!("{} collection saved to {}", R::kind(), self.path.display()),
            Err(e) => warn!(
                "Failed to save {} collection to {}: {e}",
                R::kind(),
                self.path.display()
            ),
        }
    }
}

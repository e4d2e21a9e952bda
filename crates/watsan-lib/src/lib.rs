//! `watsan-lib` — In-process water & sanitation record store.
//!
//! Two independent collections (water-usage surveys and issue reports),
//! each held in memory and mirrored to a flat JSON array file after
//! every mutation. Records are immutable once created; create and
//! delete are the only mutations.
//!
//! # Quick Start
//!
//! ```no_run
//! use watsan_lib::{SurveySubmission, Tracker};
//!
//! // Load existing files (missing or corrupt files degrade to empty)
//! let mut tracker = Tracker::open(".watsan/surveys.json", ".watsan/issues.json");
//!
//! // Create
//! let record = tracker.submit_survey(SurveySubmission {
//!     name: "Alice".into(),
//!     usage: 120,
//!     timestamp: None,
//! }).unwrap();
//!
//! // List
//! let snapshot = tracker.list_all_data();
//!
//! // Delete
//! tracker.delete_survey(record.id).unwrap();
//! ```

pub mod error;
pub mod jsonfile;
pub mod model;
pub mod service;
pub mod store;
pub mod util;

pub use error::{Result, WatsanError};
pub use model::{IssueRecord, Record, RecordId, SurveyRecord};
pub use service::{DataSnapshot, IssueReport, SurveySubmission, Tracker};
pub use store::CollectionStore;

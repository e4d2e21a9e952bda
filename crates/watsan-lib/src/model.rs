//! Core record types for watsan-lib.
//!
//! Serde field names are kept stable (`id`, `name`, `usage`, `timestamp`,
//! `location`, `problem`) so backing files written by older deployments
//! remain loadable.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Identifier assigned by a collection store. Unique within one
/// collection, never reused, starts at 0.
pub type RecordId = u64;

/// A storable record kind. The generic store is parameterized over this.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// The store-assigned identifier.
    fn id(&self) -> RecordId;

    /// Collection label for this record kind, used in logs and errors
    /// (e.g. "survey", "issue").
    fn kind() -> &'static str;
}

/// One household water-usage survey entry. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub id: RecordId,
    /// Respondent name, trimmed, never empty.
    pub name: String,
    /// Reported daily usage in liters. No enforced lower bound.
    pub usage: i64,
    /// Submission time as free-form text; caller-supplied or
    /// server-generated locale string.
    pub timestamp: String,
}

impl Record for SurveyRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn kind() -> &'static str {
        "survey"
    }
}

/// One water/sanitation problem report. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub id: RecordId,
    /// Where the problem was observed, trimmed, never empty.
    pub location: String,
    /// Problem description, trimmed, never empty.
    pub problem: String,
    /// Same contract as `SurveyRecord::timestamp`.
    pub timestamp: String,
}

impl Record for IssueRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn kind() -> &'static str {
        "issue"
    }
}

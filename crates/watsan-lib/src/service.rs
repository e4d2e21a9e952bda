//! The `Tracker` facade: both collection stores behind the five
//! boundary operations.
//!
//! Field-presence validation happens here, before any store access.
//! Stores only ever see pre-validated fields.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::error::{Result, WatsanError};
use crate::model::{IssueRecord, RecordId, SurveyRecord};
use crate::store::CollectionStore;
use crate::util;

/// Fields of a survey submission, before validation.
#[derive(Debug, Clone)]
pub struct SurveySubmission {
    pub name: String,
    pub usage: i64,
    /// Caller-supplied submission time; `None` or empty means the
    /// tracker stamps the record itself.
    pub timestamp: Option<String>,
}

/// Fields of an issue report, before validation.
#[derive(Debug, Clone)]
pub struct IssueReport {
    pub location: String,
    pub problem: String,
    /// Same fallback rule as `SurveySubmission::timestamp`.
    pub timestamp: Option<String>,
}

/// Full dual-collection listing with counts and a response timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct DataSnapshot {
    pub surveys: Vec<SurveyRecord>,
    pub issues: Vec<IssueRecord>,
    #[serde(rename = "totalSurveys")]
    pub total_surveys: usize,
    #[serde(rename = "totalIssues")]
    pub total_issues: usize,
    pub timestamp: String,
}

/// Owns the survey and issue stores. The two collections are fully
/// independent: separate counters, separate backing files, no
/// cross-references.
pub struct Tracker {
    surveys: CollectionStore<SurveyRecord>,
    issues: CollectionStore<IssueRecord>,
}

impl Tracker {
    /// Open both stores. Load problems degrade to empty collections,
    /// isolated per store; this never fails.
    #[must_use]
    pub fn open(surveys_path: impl Into<PathBuf>, issues_path: impl Into<PathBuf>) -> Self {
        Self {
            surveys: CollectionStore::open(surveys_path),
            issues: CollectionStore::open(issues_path),
        }
    }

    /// Record a validated survey submission.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if `name` is empty after trimming; nothing
    /// is created in that case.
    pub fn submit_survey(&mut self, submission: SurveySubmission) -> Result<SurveyRecord> {
        let name = submission.name.trim().to_string();
        if name.is_empty() {
            return Err(WatsanError::MissingField { field: "name" });
        }
        let timestamp = effective_timestamp(submission.timestamp);
        let usage = submission.usage;

        let record = self.surveys.create(|id| SurveyRecord {
            id,
            name,
            usage,
            timestamp,
        });
        info!("Survey submitted: #{} {}", record.id, record.name);
        Ok(record)
    }

    /// Delete a survey by id, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no survey has the id.
    pub fn delete_survey(&mut self, id: RecordId) -> Result<SurveyRecord> {
        let record = self.surveys.delete_by_id(id)?;
        info!("Survey deleted: #{}", record.id);
        Ok(record)
    }

    /// Record a validated issue report.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if `location` or `problem` is empty after
    /// trimming; nothing is created in that case.
    pub fn submit_issue(&mut self, report: IssueReport) -> Result<IssueRecord> {
        let location = report.location.trim().to_string();
        if location.is_empty() {
            return Err(WatsanError::MissingField { field: "location" });
        }
        let problem = report.problem.trim().to_string();
        if problem.is_empty() {
            return Err(WatsanError::MissingField { field: "problem" });
        }
        let timestamp = effective_timestamp(report.timestamp);

        let record = self.issues.create(|id| IssueRecord {
            id,
            location,
            problem,
            timestamp,
        });
        info!("Issue reported: #{} at {}", record.id, record.location);
        Ok(record)
    }

    /// Delete an issue by id, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no issue has the id.
    pub fn delete_issue(&mut self, id: RecordId) -> Result<IssueRecord> {
        let record = self.issues.delete_by_id(id)?;
        info!("Issue deleted: #{}", record.id);
        Ok(record)
    }

    /// Both collections in insertion order, with counts and a response
    /// timestamp.
    #[must_use]
    pub fn list_all_data(&self) -> DataSnapshot {
        DataSnapshot {
            surveys: self.surveys.all().to_vec(),
            issues: self.issues.all().to_vec(),
            total_surveys: self.surveys.len(),
            total_issues: self.issues.len(),
            timestamp: util::locale_timestamp(),
        }
    }

    /// Number of surveys currently held.
    #[must_use]
    pub fn survey_count(&self) -> usize {
        self.surveys.len()
    }

    /// Number of issues currently held.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Caller timestamp wins when present and non-empty; otherwise the
/// tracker generates a locale string.
fn effective_timestamp(supplied: Option<String>) -> String {
    match supplied {
        Some(ts) if !ts.is_empty() => ts,
        _ => util::locale_timestamp(),
    }
}

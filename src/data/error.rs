//! Error types for loading the fight table and weight-class lookup.

/// Failures that prevent a whole table from loading.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
	/// The host page has no element with the given id.
	#[error("element #{0} not found in host page")]
	MissingElement(&'static str),
	/// The CSV header row could not be read.
	#[error("failed to read CSV header: {0}")]
	Header(#[source] csv::Error),
	/// A column the loader cannot do without is absent from the header.
	#[error("missing required column `{0}`")]
	MissingColumn(&'static str),
}

/// Reasons a single fight row is skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
	/// A required column is blank.
	#[error("missing {0}")]
	MissingField(&'static str),
	/// The date is not `YYYY-MM-DD`.
	#[error("invalid date `{0}`")]
	InvalidDate(String),
	/// The CSV reader or a numeric column rejected the row.
	#[error("unreadable row: {0}")]
	Malformed(String),
}

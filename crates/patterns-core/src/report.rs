//! Data Model: Outcome, RunResult, RunReport
use crate::error::HarnessError;
use serde::Serialize;
use std::fmt;

/// How one example finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure(String),
    NotFound,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<HarnessError> for Outcome {
    fn from(error: HarnessError) -> Self {
        match error {
            HarnessError::NotFound(_) => Self::NotFound,
            HarnessError::ExampleFailure { reason, .. } | HarnessError::InvalidArgument(reason) => {
                Self::Failure(reason)
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "OK"),
            Self::Failure(reason) => write!(f, "FAILED ({})", reason),
            Self::NotFound => write!(f, "NOT FOUND"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub name: String,
    pub outcome: Outcome,
    /// Lines the example wrote before finishing
    pub output: Vec<String>,
    pub elapsed_ms: u64,
}

impl RunResult {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::NotFound,
            output: Vec::new(),
            elapsed_ms: 0,
        }
    }
}

/// Results of one batch, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub results: Vec<RunResult>,
}

impl RunReport {
    pub fn new(results: Vec<RunResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_failure()).count()
    }

    pub fn not_found(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_not_found()).count()
    }

    /// Process exit code for this batch: 2 if any name was unknown,
    /// otherwise 1 if any example failed, otherwise 0.
    pub fn exit_code(&self) -> i32 {
        if self.not_found() > 0 {
            2
        } else if self.failed() > 0 {
            1
        } else {
            0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} run: {} ok, {} failed, {} not found",
            self.len(),
            self.succeeded(),
            self.failed(),
            self.not_found()
        )
    }
}

impl IntoIterator for RunReport {
    type Item = RunResult;
    type IntoIter = std::vec::IntoIter<RunResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

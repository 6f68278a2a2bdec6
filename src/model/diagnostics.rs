//! Bounded record of reported guide issues.
//!
//! Every non-fatal [`GuideIssue`] goes through [`Diagnostics::report`], which logs it via
//! `tracing` and keeps the most recent ones for display in the status bar.

use super::error::GuideIssue;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::{debug, error};

/// Default number of issues retained.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// A reported issue with the time it was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// When the issue was reported.
    pub timestamp: DateTime<Utc>,
    /// What went wrong.
    pub issue: GuideIssue,
}

/// Ring buffer of reported issues. Oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    entries: VecDeque<Diagnostic>,
    capacity: usize,
    total_reported: usize,
}

impl Diagnostics {
    /// Buffer keeping the latest `capacity` issues.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_DIAGNOSTICS_CAPACITY)),
            capacity: capacity.max(1),
            total_reported: 0,
        }
    }

    /// Log and record an issue.
    pub fn report(&mut self, issue: GuideIssue) {
        if issue.is_silent() {
            debug!(id = %issue.id(), "{}", issue);
        } else {
            error!(id = %issue.id(), "{}", issue);
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Diagnostic {
            timestamp: Utc::now(),
            issue,
        });
        self.total_reported += 1;
    }

    /// Record several issues in order.
    pub fn report_all(&mut self, issues: impl IntoIterator<Item = GuideIssue>) {
        for issue in issues {
            self.report(issue);
        }
    }

    /// Issues the user should know about (excludes silent ones).
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|d| !d.issue.is_silent()).count()
    }

    /// Issues reported since creation, including ones the buffer dropped.
    pub fn total_reported(&self) -> usize {
        self.total_reported
    }

    /// Most recent issue.
    pub fn latest(&self) -> Option<&Diagnostic> {
        self.entries.back()
    }

    /// Kept issues, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Number of kept issues.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is kept.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

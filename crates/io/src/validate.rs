//! Row and configuration problems gathered into one error.
//!
//! A malformed CSV file usually has more than one bad row. The reader, the
//! vocabulary and the writers record every problem they see and fail once,
//! so a user can fix a whole file in one pass.

use std::fmt::Display;

use crate::error::IoError;

/// Most messages spelled out in [`IoError::Validation`] details.
const MAX_DETAILS: usize = 20;

/// Collects problems, then turns them into a single [`IoError::Validation`].
///
/// `count` in the error always covers every recorded problem. `details`
/// lists the first [`MAX_DETAILS`] and says how many were left out.
#[derive(Debug, Default)]
pub(crate) struct ValidationCollector {
    problems: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a problem that is not tied to a row.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.problems.push(msg.into());
    }

    /// Records a problem on 1-based file line `line`.
    pub(crate) fn push_line(&mut self, line: u64, msg: impl Display) {
        self.problems.push(format!("line {line}: {msg}"));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.problems.len()
    }

    /// `Ok(())` if nothing was recorded.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        let count = self.problems.len();
        if count == 0 {
            return Ok(());
        }
        let mut details = self.problems[..count.min(MAX_DETAILS)].join("; ");
        if count > MAX_DETAILS {
            details.push_str(&format!("; ... and {} more", count - MAX_DETAILS));
        }
        Err(IoError::Validation { count, details })
    }
}

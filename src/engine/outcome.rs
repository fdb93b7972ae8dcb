use super::error::{EngineError, ItemFailure};
use crate::domain::{Item, ItemId, SkipReason};

/// Resolved result of one item's unit of work
#[derive(Debug)]
pub enum ItemOutcome {
    /// Transitioned and persisted; carries the saved item
    Processed(Item),
    /// Left untouched
    Skipped { id: ItemId, reason: SkipReason },
    /// Fetch or save failed, or the task died
    Failed(ItemFailure),
}

/// Outcomes of one processing run, collected after every task resolved
#[derive(Debug, Default)]
pub struct RunReport {
    processed: Vec<Item>,
    skipped: Vec<(ItemId, SkipReason)>,
    failures: Vec<ItemFailure>,
}

impl RunReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one item outcome
    pub fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Processed(item) => self.processed.push(item),
            ItemOutcome::Skipped { id, reason } => self.skipped.push((id, reason)),
            ItemOutcome::Failed(failure) => self.failures.push(failure),
        }
    }

    /// Items this run transitioned to `PROCESSED`
    pub fn processed(&self) -> &[Item] {
        &self.processed
    }

    pub fn skipped(&self) -> &[(ItemId, SkipReason)] {
        &self.skipped
    }

    pub fn failures(&self) -> &[ItemFailure] {
        &self.failures
    }

    /// Number of transitions performed
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Total outcomes recorded
    pub fn total(&self) -> usize {
        self.processed.len() + self.skipped.len() + self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Apply the failure policy: any failed item fails the whole run
    ///
    /// Items saved before the failure stay saved; only the caller-visible
    /// result reports the failure.
    pub fn into_result(self) -> Result<Vec<Item>, EngineError> {
        if self.failures.is_empty() {
            Ok(self.processed)
        } else {
            Err(EngineError::ItemProcessingFailed(self.failures))
        }
    }
}

impl FromIterator<ItemOutcome> for RunReport {
    fn from_iter<I: IntoIterator<Item = ItemOutcome>>(iter: I) -> Self {
        let mut report = Self::new();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}

use serde::Serialize;

use crate::common::money::Money;
use crate::domain::visit::ClientVisit;

/// Owned copy of the ledger state handed to the rendering layer.
///
/// A snapshot never borrows the aggregate; a stale one simply describes an
/// earlier state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSnapshot {
    pub scheduled: Vec<ClientVisit>,
    pub walk_ins: Vec<ClientVisit>,
    pub total_today: Money,
    pub total_month: Money,
}

impl LedgerSnapshot {
    /// Cuts on the books for the day, scheduled and walk-in alike.
    pub fn visit_count(&self) -> usize {
        self.scheduled.len() + self.walk_ins.len()
    }
}

use crate::watch::snapshot::LedgerSnapshot;

/// Receives the new ledger state after every mutation.
///
/// Invoked synchronously from the mutating call, on the same thread. A
/// subscriber that retains state across calls uses interior mutability.
pub trait LedgerSubscriber {
    fn on_change(&self, snapshot: &LedgerSnapshot);
}

/// Subscriber that ignores every update, for callers that poll the ledger
/// through `snapshot()` instead.
#[derive(Debug, Default)]
pub struct NoOpSubscriber;

impl NoOpSubscriber {
    pub fn new() -> Self {
        Self
    }
}

impl LedgerSubscriber for NoOpSubscriber {
    fn on_change(&self, _snapshot: &LedgerSnapshot) {}
}

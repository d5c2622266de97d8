use tracing::debug;

use crate::common::money::Money;
use crate::domain::seed;
use crate::domain::totals::Totals;
use crate::domain::visit::ClientVisit;
use crate::watch::snapshot::LedgerSnapshot;
use crate::watch::subscriber::LedgerSubscriber;

/// Aggregate root for one working day of visits.
///
/// The rendering layer owns one instance for the lifetime of its screen and
/// drives it from UI callbacks only, so all access is single-threaded and
/// subscribers live in a plain list. State resets when the process exits;
/// nothing is persisted.
pub struct ClientLedger {
    scheduled: Vec<ClientVisit>,
    walk_ins: Vec<ClientVisit>,
    totals: Totals,
    subscribers: Vec<Box<dyn LedgerSubscriber>>,
}

impl ClientLedger {
    /// Ledger for today: the predefined schedule, no walk-ins yet.
    pub fn new() -> Self {
        Self::with_scheduled(seed::scheduled_today())
    }

    /// Ledger over a custom schedule.
    pub fn with_scheduled(scheduled: Vec<ClientVisit>) -> Self {
        let totals = Totals::over(&scheduled, &[]);
        debug!(appointments = scheduled.len(), total = %totals.today, "ledger seeded");
        Self {
            scheduled,
            walk_ins: Vec::new(),
            totals,
            subscribers: Vec::new(),
        }
    }

    /// Records a cut for a client who showed up without an appointment.
    ///
    /// Appends the fixed placeholder visit, recomputes both totals and
    /// notifies subscribers with the new state. Always succeeds; every call
    /// appends a fresh record.
    pub fn add_walk_in(&mut self) {
        let visit = ClientVisit::walk_in();
        debug!(amount = %visit.amount, "walk-in recorded");
        self.walk_ins.push(visit);
        self.totals = Totals::over(&self.scheduled, &self.walk_ins);
        self.notify();
    }

    pub fn scheduled(&self) -> &[ClientVisit] {
        &self.scheduled
    }

    pub fn walk_ins(&self) -> &[ClientVisit] {
        &self.walk_ins
    }

    pub fn total_today(&self) -> Money {
        self.totals.today
    }

    pub fn total_month(&self) -> Money {
        self.totals.month
    }

    /// Cuts on the books for the day, scheduled and walk-in alike.
    pub fn visit_count(&self) -> usize {
        self.scheduled.len() + self.walk_ins.len()
    }

    /// Immutable copy of the current state for the rendering layer.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            scheduled: self.scheduled.clone(),
            walk_ins: self.walk_ins.clone(),
            total_today: self.totals.today,
            total_month: self.totals.month,
        }
    }

    /// Registers a subscriber. It is invoked synchronously after every
    /// mutation; reads between mutations go through [`Self::snapshot`].
    pub fn subscribe(&mut self, subscriber: Box<dyn LedgerSubscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for subscriber in &self.subscribers {
            subscriber.on_change(&snapshot);
        }
    }
}

impl Default for ClientLedger {
    fn default() -> Self {
        Self::new()
    }
}

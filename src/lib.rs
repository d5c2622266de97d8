//! In-memory visit ledger for a barbershop's working day.
//!
//! Tracks the day's scheduled appointments and ad-hoc walk-ins, and keeps the
//! derived revenue totals consistent with them. The rendering layer owns one
//! [`ClientLedger`] per screen, reads state through [`LedgerSnapshot`] or the
//! accessors, and registers a [`LedgerSubscriber`] to hear about changes.
//!
//! All state is process-lifetime only; nothing is persisted.

pub mod common;
pub mod domain;
pub mod watch;

pub use common::error::LedgerError;
pub use common::money::Money;
pub use domain::ledger::ClientLedger;
pub use domain::visit::ClientVisit;
pub use watch::snapshot::LedgerSnapshot;
pub use watch::subscriber::{LedgerSubscriber, NoOpSubscriber};

use serde::Serialize;

use crate::common::money::Money;

/// Name recorded for a client taken without an appointment.
pub const WALK_IN_NAME: &str = "Cliente não marcado";

/// Price of a standard cut, in centavos.
pub const STANDARD_CUT_CENTAVOS: i64 = 3000;

/// One client's visit for the day.
///
/// Immutable once created: visits are only ever appended to the ledger,
/// never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientVisit {
    pub name: String,
    pub amount: Money,
    /// Time of day as shown on the schedule ("09:00"). Empty for walk-ins.
    pub time: String,
}

impl ClientVisit {
    /// A pre-booked appointment at a known time.
    pub fn scheduled(name: &str, amount: Money, time: &str) -> Self {
        Self {
            name: name.to_string(),
            amount,
            time: time.to_string(),
        }
    }

    /// The record appended for every walk-in: fixed placeholder name,
    /// standard cut price, no scheduled time.
    pub fn walk_in() -> Self {
        Self {
            name: WALK_IN_NAME.to_string(),
            amount: Money::new(STANDARD_CUT_CENTAVOS),
            time: String::new(),
        }
    }

    pub fn has_time(&self) -> bool {
        !self.time.is_empty()
    }
}

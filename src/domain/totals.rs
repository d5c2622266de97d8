use serde::Serialize;

use crate::common::money::Money;
use crate::domain::visit::ClientVisit;

/// Revenue totals derived from the visit lists.
///
/// Always recomputed from the lists as a whole, never adjusted in place.
/// Both fields are currently the same unfiltered sum: the monthly figure
/// does not yet accumulate across days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub today: Money,
    pub month: Money,
}

impl Totals {
    /// Recompute both totals over `scheduled ++ walk_ins`.
    pub fn over(scheduled: &[ClientVisit], walk_ins: &[ClientVisit]) -> Self {
        let sum: Money = scheduled
            .iter()
            .chain(walk_ins.iter())
            .map(|v| v.amount)
            .sum();
        Self {
            today: sum,
            month: sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(amount: i64) -> ClientVisit {
        ClientVisit::scheduled("x", Money::new(amount), "09:00")
    }

    #[test]
    fn empty_lists_total_zero() {
        let totals = Totals::over(&[], &[]);
        assert_eq!(totals.today, Money::zero());
        assert_eq!(totals.month, Money::zero());
    }

    #[test]
    fn sums_across_both_lists() {
        let scheduled = vec![visit(3000), visit(2500)];
        let walk_ins = vec![visit(3000)];

        let totals = Totals::over(&scheduled, &walk_ins);
        assert_eq!(totals.today, Money::new(8500));
    }

    #[test]
    fn today_and_month_are_the_same_sum() {
        let scheduled = vec![visit(3000)];
        let walk_ins = vec![visit(3000), visit(3000)];

        let totals = Totals::over(&scheduled, &walk_ins);
        assert_eq!(totals.today, totals.month);
    }
}

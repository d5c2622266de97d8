pub mod ledger;
pub mod seed;
pub mod totals;
pub mod visit;

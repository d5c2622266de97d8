#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

pub mod snapshot;
pub mod subscriber;

use thiserror::Error;
use crate::draw_engine::models::{MAX_POOL_SIZE, MIN_POOL_SIZE};

/// Errors that may be returned by the raffle engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// Requested pool size is outside the allowed range.
    #[error("pool size {0} is out of range ({min}..={max})", min = MIN_POOL_SIZE, max = MAX_POOL_SIZE)]
    InvalidSize(u32),

    /// A draw was attempted with no numbers remaining.
    #[error("no numbers remain in the pool")]
    EmptyPool,

    /// A draw was requested while a previous draw's reveal is still in flight.
    #[error("a draw is already in progress")]
    DrawPending,
}

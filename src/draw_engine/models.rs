use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pool bounds
// ---------------------------------------------------------------------------

/// Smallest configurable pool size.
pub const MIN_POOL_SIZE: u32 = 2;

/// Largest configurable pool size.
pub const MAX_POOL_SIZE: u32 = 1000;

// ---------------------------------------------------------------------------
// Pool status
// ---------------------------------------------------------------------------

/// The two domain states of a pool: numbers left to draw, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolStatus {
    Open,
    Exhausted,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolStatus::Open      => write!(f, "Open"),
            PoolStatus::Exhausted => write!(f, "Exhausted"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session request / response types
// ---------------------------------------------------------------------------

/// Configuration for one raffle session.
///
/// `rng_seed: Some(u64)` makes every draw and every spin frame reproducible;
/// `None` seeds from OS entropy. The seed is the only optional knob — there is
/// no global RNG state anywhere in the crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionRequest {
    pub pool_size: u32,
    pub rng_seed: Option<u64>,
}

impl SessionRequest {
    /// Minimal constructor: just a pool size, entropy seeding.
    pub fn new(pool_size: u32) -> Self {
        SessionRequest { pool_size, rng_seed: None }
    }
}

/// One committed draw together with its reveal plan.
///
/// `value` is fixed before any frame is generated and is never re-rolled;
/// `frames` is the decoy sequence a presentation layer flips through before
/// landing on `value` (the final frame always equals `value`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDraw {
    pub value: u32,
    pub frames: Vec<u32>,
}

/// Full query surface for a presentation layer, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub pool_size: u32,
    pub status: PoolStatus,
    /// Most recently drawn value, if any draws have happened.
    pub last_drawn: Option<u32>,
    /// Chronological draw history.
    pub drawn: Vec<u32>,
    /// Numbers still in the pool, ascending.
    pub remaining: Vec<u32>,
}

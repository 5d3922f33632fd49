//! Core raffle engine — pool state, sampling, and the draw lifecycle.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | Shared types: session request, snapshot, status, pool bounds |
//! | `error`   | `DrawError` — every way an operation can be refused |
//! | `pool`    | `DrawPool` — uniform sampling without replacement over 1..=N |
//! | `reveal`  | Decoy spin frames for the animated reveal (decide-then-reveal) |
//! | `session` | `RaffleSession` — pool + RNG + at-most-one-in-flight-draw guard |

pub mod error;
pub mod models;
pub mod pool;
pub mod reveal;
pub mod session;

// Re-export the public API surface so callers can use
// `draw_engine::RaffleSession` without reaching into sub-modules.
pub use error::DrawError;
pub use models::{
    PendingDraw, PoolSnapshot, PoolStatus, SessionRequest,
    MAX_POOL_SIZE, MIN_POOL_SIZE,
};
pub use pool::DrawPool;
pub use reveal::{spin_frames, DEFAULT_FRAME_MILLIS, DEFAULT_SPIN_FRAMES};
pub use session::RaffleSession;

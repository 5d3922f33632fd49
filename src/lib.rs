//! # number_raffle
//!
//! A fully offline raffle-number picker: configure a pool size N (2–1000),
//! draw distinct numbers one at a time uniformly at random, and keep the
//! drawn/remaining split until the pool is exhausted or the session is reset.
//!
//! ## How it works
//!
//! 1. Create a [`SessionRequest`] with a pool size and an optional RNG seed.
//! 2. Call [`RaffleSession::start`] — the engine builds the pool `1..=N`.
//! 3. Call [`RaffleSession::begin_draw`] — one number is committed uniformly
//!    at random from the remaining set and returned as a [`PendingDraw`]
//!    together with decoy spin frames for an animated reveal. The committed
//!    value is decided before any frame exists and is never re-rolled.
//! 4. Call [`RaffleSession::finish_reveal`] once the animation is done; until
//!    then, further draws are rejected — at most one draw is in flight.
//! 5. [`RaffleSession::reset`] restores `1..=N` with the same N; dropping the
//!    session and starting a new one is a "new raffle".
//!
//! ## Key features
//!
//! - **Sampling without replacement**: a number can never be drawn twice in a
//!   session; a fully exhausted session yields a permutation of `1..=N`.
//! - **Deterministic when asked**: pass `rng_seed: Some(u64)` to reproduce the
//!   exact draw order and spin frames — useful for tests. Default is entropy.
//! - **Decide-then-reveal**: the spin animation is cosmetic; the outcome is
//!   fixed before it starts.
//! - **View adapter**: [`to_view_state`] turns a [`PoolSnapshot`] into the
//!   JSON a display client renders.
//!
//! ## Quick start
//!
//! ```rust
//! use number_raffle::{RaffleSession, SessionRequest};
//!
//! // Minimal — only a pool size is required (entropy seeding):
//! let mut session = RaffleSession::start(SessionRequest::new(50)).unwrap();
//!
//! let pending = session.begin_draw().unwrap();
//! println!("spin through {:?}", pending.frames);
//! let value = session.finish_reveal().unwrap();
//! assert_eq!(value, pending.value);
//!
//! // Full control — seeded for reproducibility:
//! let mut session = RaffleSession::start(SessionRequest {
//!     pool_size: 10,
//!     rng_seed: Some(42),
//! }).unwrap();
//!
//! while session.pool().remaining_count() > 0 {
//!     let pending = session.begin_draw().unwrap();
//!     session.finish_reveal();
//!     println!("drew {}", pending.value);
//! }
//! assert_eq!(session.pool().drawn_count(), 10);
//! ```

pub mod draw_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `number_raffle::RaffleSession`
// directly without reaching into `draw_engine::`.
pub use draw_engine::{
    DrawError, DrawPool, PendingDraw, PoolSnapshot, PoolStatus, RaffleSession,
    SessionRequest, DEFAULT_FRAME_MILLIS, DEFAULT_SPIN_FRAMES,
    MAX_POOL_SIZE, MIN_POOL_SIZE,
};
pub use view_adapter::to_view_state;

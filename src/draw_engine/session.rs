use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::draw_engine::{
    error::DrawError,
    models::{PendingDraw, PoolSnapshot, SessionRequest},
    pool::DrawPool,
    reveal::{spin_frames, DEFAULT_SPIN_FRAMES},
};

/// One raffle session: a pool, its RNG, and the in-flight draw guard.
///
/// A session is an independently owned value — "new raffle" in a UI is just
/// dropping one session and calling [`RaffleSession::start`] again with a new
/// pool size. Nothing is shared between sessions.
///
/// At most one draw is in flight at a time: [`begin_draw`] commits a value
/// and hands back its reveal plan, and further calls are rejected with
/// [`DrawError::DrawPending`] until [`finish_reveal`] is called. A draw, once
/// begun, is already committed — only its reveal is pending.
///
/// [`begin_draw`]: RaffleSession::begin_draw
/// [`finish_reveal`]: RaffleSession::finish_reveal
#[derive(Debug)]
pub struct RaffleSession {
    pool: DrawPool,
    rng: StdRng,
    pending: Option<PendingDraw>,
}

impl RaffleSession {
    /// Start a session from a [`SessionRequest`].
    ///
    /// Fails with [`DrawError::InvalidSize`] for a pool size outside
    /// `2..=1000`, before any state is created.
    pub fn start(request: SessionRequest) -> Result<Self, DrawError> {
        let pool = DrawPool::new(request.pool_size)?;
        let rng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(RaffleSession { pool, rng, pending: None })
    }

    /// Draw the next number and build its reveal plan.
    ///
    /// The value is committed on the pool *before* any spin frame is
    /// generated and is never re-rolled. Fails with
    /// [`DrawError::DrawPending`] while a previous reveal is still in flight
    /// and [`DrawError::EmptyPool`] when nothing remains; neither error
    /// mutates anything.
    pub fn begin_draw(&mut self) -> Result<PendingDraw, DrawError> {
        if self.pending.is_some() {
            return Err(DrawError::DrawPending);
        }
        let value = self.pool.draw_next(&mut self.rng)?;
        let frames = spin_frames(
            &mut self.rng,
            self.pool.remaining(),
            value,
            DEFAULT_SPIN_FRAMES,
        );
        let pending = PendingDraw { value, frames };
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    /// Mark the in-flight reveal as shown, unblocking the next draw.
    ///
    /// Returns the committed value, or `None` if no draw was pending.
    pub fn finish_reveal(&mut self) -> Option<u32> {
        self.pending.take().map(|p| p.value)
    }

    /// Restore the pool to `1..=N` and clear the draw history.
    ///
    /// Any pending reveal is discarded: its committed value goes back into
    /// the pool with everything else, so the invariant holds either way.
    pub fn reset(&mut self) {
        self.pending = None;
        self.pool.reset();
    }

    /// Is a draw's reveal currently in flight?
    pub fn is_drawing(&self) -> bool {
        self.pending.is_some()
    }

    /// The underlying pool, for direct queries.
    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    /// Capture the full query surface at this instant.
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            pool_size: self.pool.pool_size(),
            status: self.pool.status(),
            last_drawn: self.pool.last_drawn(),
            drawn: self.pool.drawn().to_vec(),
            remaining: self.pool.remaining().to_vec(),
        }
    }
}

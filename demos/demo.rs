//! End-to-end walkthrough of a raffle session.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `number_raffle` works end to end:
//!
//! 1. **A seeded session** — pool of 10, fixed seed, drained to exhaustion so
//!    the output is deterministic and reproducible.
//! 2. **The reveal contract** — each draw prints its decoy spin frames; the
//!    last frame always equals the committed value.
//! 3. **Error surface** — a draw on the exhausted pool, a re-entrant draw,
//!    and an out-of-range pool size, each printing its error.
//! 4. **Reset** — the same session restored to a full pool.
//! 5. **View state** — the JSON a display client would render.
//!
//! ## Key concepts demonstrated
//!
//! - `SessionRequest::new(n)` — minimal constructor; entropy seeding.
//! - `rng_seed: Some(u64)` makes draws and spin frames fully deterministic.
//! - `begin_draw()` commits the value up front; `finish_reveal()` unblocks
//!   the next draw.

use number_raffle::{
    to_view_state, DrawError, RaffleSession, SessionRequest,
};

fn print_state(session: &RaffleSession) {
    let pool = session.pool();
    println!(
        "  remaining: {:?}  drawn: {:?}",
        pool.remaining(),
        pool.drawn()
    );
}

fn main() -> Result<(), DrawError> {
    println!("══ Seeded session: pool of 10, seed 42 ══");
    println!();

    let mut session = RaffleSession::start(SessionRequest {
        pool_size: 10,
        rng_seed: Some(42),
    })?;
    print_state(&session);
    println!();

    // ── Drain the pool ──────────────────────────────────────────────────────
    while session.pool().remaining_count() > 0 {
        let pending = session.begin_draw()?;
        println!("  spin:  {:?}", pending.frames);
        let value = session.finish_reveal().unwrap_or(pending.value);
        println!("  drew:  {value}");
    }
    println!();
    print_state(&session);
    println!("  status: {}", session.pool().status());
    println!();

    // ── Error surface ───────────────────────────────────────────────────────
    println!("══ Error surface ══");
    println!();
    if let Err(e) = session.begin_draw() {
        println!("  draw on exhausted pool: {e}");
    }
    if let Err(e) = RaffleSession::start(SessionRequest::new(1001)) {
        println!("  pool of 1001:           {e}");
    }
    let mut other = RaffleSession::start(SessionRequest::new(5))?;
    other.begin_draw()?;
    if let Err(e) = other.begin_draw() {
        println!("  draw while revealing:   {e}");
    }
    println!();

    // ── Reset ───────────────────────────────────────────────────────────────
    println!("══ Reset: same session, full pool again ══");
    println!();
    session.reset();
    print_state(&session);
    println!();

    // ── View state ──────────────────────────────────────────────────────────
    println!("══ View state after two draws ══");
    println!();
    session.begin_draw()?;
    session.finish_reveal();
    session.begin_draw()?;
    session.finish_reveal();

    let snapshot = session.snapshot();
    let view = to_view_state(&snapshot, false, snapshot.last_drawn);
    println!("{}", serde_json::to_string_pretty(&view).expect("view state serializes"));

    Ok(())
}

//! Interactive raffle at the terminal.
//!
//! Run with: `cargo run --example interactive`
//!
//! Configure a pool size, then press enter to draw. Each draw flips through
//! decoy numbers before landing on the real one; the outcome is committed
//! before the animation starts. Commands at the prompt:
//!
//! - enter / `d` — draw the next number
//! - `r`         — reset the current raffle (same pool size)
//! - `n`         — new raffle (pick a new pool size)
//! - `q`         — quit

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use number_raffle::{
    DrawError, RaffleSession, SessionRequest, DEFAULT_FRAME_MILLIS,
    MAX_POOL_SIZE, MIN_POOL_SIZE,
};

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok()?;
    Some(buf.trim().to_string())
}

fn prompt_pool_size() -> Option<u32> {
    loop {
        let line = read_line(&format!(
            "Pool size [{MIN_POOL_SIZE}..{MAX_POOL_SIZE}] (or q to quit): "
        ))?;
        if line.eq_ignore_ascii_case("q") {
            return None;
        }
        match line.parse::<u32>() {
            Ok(n) if (MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&n) => return Some(n),
            Ok(n) => println!("{}", DrawError::InvalidSize(n)),
            Err(_) => println!("Not a whole number. Try again."),
        }
    }
}

fn animate_draw(session: &mut RaffleSession) -> Result<(), DrawError> {
    let pending = session.begin_draw()?;
    for frame in &pending.frames {
        print!("\r  >> {frame:>4}  ");
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(DEFAULT_FRAME_MILLIS));
    }
    let value = session.finish_reveal().unwrap_or(pending.value);
    println!("\r  Drawn: {value}!      ");
    Ok(())
}

fn print_state(session: &RaffleSession) {
    let pool = session.pool();
    println!(
        "  drawn {} / {}  |  history: {:?}",
        pool.drawn_count(),
        pool.pool_size(),
        pool.drawn()
    );
    if pool.remaining_count() > 0 {
        println!("  available: {:?}", pool.remaining());
    } else {
        println!("  Pool exhausted — reset (r) or start a new raffle (n).");
    }
}

/// Returns `true` to go back to configuration, `false` to quit.
fn run_session(pool_size: u32) -> bool {
    // entropy seeding for a real raffle; seeds are for tests
    let mut session = match RaffleSession::start(SessionRequest::new(pool_size)) {
        Ok(s) => s,
        Err(e) => {
            println!("{e}");
            return true;
        }
    };
    println!("Raffle of 1..={pool_size} started.");

    loop {
        let Some(cmd) = read_line("\n[enter=draw, r=reset, n=new, q=quit] > ") else {
            return false;
        };
        match cmd.as_str() {
            "" | "d" => match animate_draw(&mut session) {
                Ok(())                        => print_state(&session),
                Err(DrawError::EmptyPool)     => print_state(&session),
                Err(e)                        => println!("{e}"),
            },
            "r" => {
                session.reset();
                println!("Raffle reset.");
                print_state(&session);
            }
            "n" => return true,
            "q" => return false,
            _   => println!("Unknown command."),
        }
    }
}

fn main() {
    println!("Number Raffle (CLI)");

    while let Some(pool_size) = prompt_pool_size() {
        if !run_session(pool_size) {
            break;
        }
    }
}

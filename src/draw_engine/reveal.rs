//! Decoy spin frames shown while a draw is "spinning".
//!
//! The contract is decide-then-reveal: the drawn value is committed on the
//! pool before this module is ever called, and nothing here can change it.
//! The frames exist purely so a presentation layer has plausible numbers to
//! flip through before landing on the real one.

use rand::Rng;

/// Number of decoy frames in a standard spin.
pub const DEFAULT_SPIN_FRAMES: usize = 20;

/// Suggested display time per frame, in milliseconds. Timing is owned by the
/// presentation layer; the engine never sleeps.
pub const DEFAULT_FRAME_MILLIS: u64 = 80;

/// Build the spin-frame sequence for a committed draw.
///
/// Decoys are sampled uniformly from the pre-draw candidate set — `remaining`
/// as it stands *after* the draw, plus `committed` itself — so the spin only
/// ever shows numbers that were actually in the pool when the draw started.
/// The final frame is always `committed`.
///
/// With one candidate left (the last draw of a session) every frame is the
/// committed value.
pub fn spin_frames<R: Rng>(
    rng: &mut R,
    remaining: &[u32],
    committed: u32,
    frames: usize,
) -> Vec<u32> {
    let mut out = Vec::with_capacity(frames);
    // candidate index == remaining.len() stands for the committed value
    let candidates = remaining.len() + 1;
    for _ in 0..frames.saturating_sub(1) {
        let idx = rng.gen_range(0..candidates);
        out.push(if idx == remaining.len() { committed } else { remaining[idx] });
    }
    out.push(committed);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn last_frame_is_the_committed_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let remaining: Vec<u32> = (1..=9).collect();
        let frames = spin_frames(&mut rng, &remaining, 10, DEFAULT_SPIN_FRAMES);
        assert_eq!(frames.len(), DEFAULT_SPIN_FRAMES);
        assert_eq!(*frames.last().unwrap(), 10);
    }

    #[test]
    fn frames_only_show_pre_draw_candidates() {
        let mut rng = StdRng::seed_from_u64(2);
        let remaining = vec![3, 5, 8];
        let frames = spin_frames(&mut rng, &remaining, 6, 50);
        for f in frames {
            assert!(
                f == 6 || remaining.contains(&f),
                "frame {f} was never in the pool"
            );
        }
    }

    #[test]
    fn exhausting_draw_spins_on_the_committed_value_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let frames = spin_frames(&mut rng, &[], 4, 5);
        assert_eq!(frames, vec![4, 4, 4, 4, 4]);
    }

    #[test]
    fn zero_frames_still_ends_on_the_committed_value() {
        let mut rng = StdRng::seed_from_u64(4);
        let frames = spin_frames(&mut rng, &[1, 2], 3, 0);
        assert_eq!(frames, vec![3]);
    }
}

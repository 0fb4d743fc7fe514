//! Tick count planning for each selection mode.
//!
//! The cursor starts on candidate 0 and the last tick highlights candidate
//! `(ticks - 1) % candidates`, so the tick count alone decides the result.

use rand::Rng;

use seatdraw_core::config::SelectionMode;

use super::tuning::DrawTuning;

/// Candidate index highlighted on the last of `ticks` ticks.
pub fn landing_index(ticks: u32, candidates: usize) -> usize {
    debug_assert!(ticks > 0 && candidates > 0);
    (ticks as usize - 1) % candidates
}

/// Choose how many ticks a draw over `candidates` free seats will run.
///
/// `CursorWalk` keeps the sampled count as is, so the result follows
/// whatever distribution the cursor arithmetic produces. `Uniform` samples
/// the target seat directly and extends the sampled count by fewer than
/// `candidates` ticks so the cursor lands on it.
pub fn plan_ticks<R: Rng + ?Sized>(
    tuning: &DrawTuning,
    candidates: usize,
    rng: &mut R,
) -> u32 {
    let sampled = tuning.sample_ticks(rng);
    match tuning.selection {
        SelectionMode::CursorWalk => sampled,
        SelectionMode::Uniform => {
            let target = rng.random_range(0..candidates);
            let landing = landing_index(sampled, candidates);
            let extra = (target + candidates - landing) % candidates;
            sampled.saturating_add(extra as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn uniform() -> DrawTuning {
        DrawTuning {
            selection: SelectionMode::Uniform,
            ..DrawTuning::default()
        }
    }

    #[test]
    fn test_landing_index_wraps() {
        assert_eq!(landing_index(1, 3), 0);
        assert_eq!(landing_index(3, 3), 2);
        assert_eq!(landing_index(4, 3), 0);
        assert_eq!(landing_index(26, 1), 0);
    }

    #[test]
    fn test_cursor_walk_uses_sampled_count() {
        let tuning = DrawTuning::default();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let ticks = plan_ticks(&tuning, 5, &mut rng);
            assert!((tuning.min_ticks..=tuning.max_ticks()).contains(&ticks));
        }
    }

    #[test]
    fn test_uniform_extends_by_less_than_candidates() {
        let tuning = uniform();
        let mut rng = StdRng::seed_from_u64(3);
        for candidates in [1usize, 2, 7, 60] {
            for _ in 0..100 {
                let ticks = plan_ticks(&tuning, candidates, &mut rng);
                assert!(ticks >= tuning.min_ticks);
                assert!(ticks < tuning.max_ticks() + candidates as u32);
            }
        }
    }

    #[test]
    fn test_uniform_reaches_every_candidate() {
        let tuning = uniform();
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = 60;
        let mut hits = vec![0u32; candidates];
        for _ in 0..6000 {
            let ticks = plan_ticks(&tuning, candidates, &mut rng);
            hits[landing_index(ticks, candidates)] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0), "every seat should be reachable");
    }
}

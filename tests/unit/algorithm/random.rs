//! Tests for the seeded random source

#[cfg(test)]
mod tests {
    use streetmap::algorithm::random::{RandomSource, SeededRandom};

    // Tests the same seed replays the same decisions
    // Verified by seeding from entropy in new()
    #[test]
    fn test_seed_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);

        let draws_a: Vec<(bool, usize)> = (0..32).map(|_| (a.next_bool(), a.pick_index(4))).collect();
        let draws_b: Vec<(bool, usize)> = (0..32).map(|_| (b.next_bool(), b.pick_index(4))).collect();

        assert_eq!(draws_a, draws_b);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_pick_index_stays_in_range() {
        let mut rng = SeededRandom::new(3);

        for len in 1..6 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
        assert_eq!(rng.pick_index(0), 0);
    }

    // Tests both coin sides and every pick show up over many draws
    // Verified by returning a constant from next_bool
    #[test]
    fn test_draws_cover_all_outcomes() {
        let mut rng = SeededRandom::new(5);
        let mut seen_bools = [false; 2];
        let mut seen_picks = [false; 4];

        for _ in 0..200 {
            if let Some(seen) = seen_bools.get_mut(usize::from(rng.next_bool())) {
                *seen = true;
            }
            if let Some(seen) = seen_picks.get_mut(rng.pick_index(4)) {
                *seen = true;
            }
        }

        assert!(seen_bools.iter().all(|&seen| seen));
        assert!(seen_picks.iter().all(|&seen| seen));
    }

    #[test]
    fn test_pick_from_slice() {
        let mut rng = SeededRandom::new(8);
        let empty: [u8; 0] = [];

        assert_eq!(rng.pick(&empty), None);
        assert_eq!(rng.pick(&[7]), Some(7));

        let picked = rng.pick(&['a', 'b', 'c']).expect("non-empty slice");
        assert!(['a', 'b', 'c'].contains(&picked));
    }

    // Tests a borrowed source advances the underlying stream
    // Verified by cloning the source inside the reference impl
    #[test]
    fn test_mutable_reference_shares_stream() {
        fn draw<R: RandomSource>(mut rng: R) -> usize {
            rng.pick_index(1000)
        }

        let mut direct = SeededRandom::new(21);
        let mut shared = SeededRandom::new(21);

        assert_eq!(draw(&mut shared), direct.pick_index(1000));
        assert_eq!(shared.pick_index(1000), direct.pick_index(1000));
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = SeededRandom::from_entropy();
        let mut replay = SeededRandom::new(rng.seed());
        let mut drawn = rng.clone();

        assert_eq!(drawn.pick_index(1000), replay.pick_index(1000));
    }
}

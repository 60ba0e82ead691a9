#[cfg(test)]
mod tests {
    use crate::chance::{roll5, EventKey};

    fn key(seed: u64, round: u8, roll: u8) -> EventKey {
        EventKey {
            episode_seed: seed,
            round_idx: round,
            roll_idx: roll,
        }
    }

    #[test]
    fn same_key_same_draws() {
        let a = roll5(key(99, 4, 1));
        let b = roll5(key(99, 4, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn draws_are_in_range() {
        for seed in [0u64, 1, 0xDEAD_BEEF] {
            for round in 0..13 {
                for roll in 0..3 {
                    let d = roll5(key(seed, round, roll));
                    assert!(d.iter().all(|v| (1..=6).contains(v)), "{:?}", d);
                }
            }
        }
    }

    #[test]
    fn distinct_events_decorrelate() {
        // Not a randomness test; just ensure the key fields actually matter.
        let base = roll5(key(7, 0, 0));
        let mut differs = 0;
        for round in 0..13 {
            for roll in 0..3 {
                if (round, roll) == (0, 0) {
                    continue;
                }
                if roll5(key(7, round, roll)) != base {
                    differs += 1;
                }
            }
        }
        assert!(differs > 30, "only {} events differed", differs);

        // Different seeds give (almost everywhere) different streams.
        let mut seed_differs = 0;
        for round in 0..13 {
            for roll in 0..3 {
                if roll5(key(7, round, roll)) != roll5(key(8, round, roll)) {
                    seed_differs += 1;
                }
            }
        }
        assert!(seed_differs > 30, "only {} events differed", seed_differs);
    }
}

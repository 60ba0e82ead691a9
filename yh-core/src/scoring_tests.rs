#[cfg(test)]
mod tests {
    use crate::category::{Category, NUM_CATS};
    use crate::scoring::candidate_scores;

    fn cand(sorted: [u8; 5], c: Category) -> Option<i32> {
        candidate_scores(sorted)[c.index()]
    }

    #[test]
    fn upper_and_chance_are_always_some() {
        // Totality: conditions failing score 0 where defined, never "missing".
        for hand in all_hands() {
            let scores = candidate_scores(hand);
            for face in 1u8..=6 {
                let count = hand.iter().filter(|&&d| d == face).count() as i32;
                assert_eq!(
                    scores[(face - 1) as usize],
                    Some(count * face as i32),
                    "upper {} for {:?}",
                    face,
                    hand
                );
            }
            let sum: i32 = hand.iter().map(|&d| d as i32).sum();
            assert_eq!(scores[Category::Chance.index()], Some(sum));
            assert_eq!(scores.len(), NUM_CATS);
        }
    }

    #[test]
    fn three_of_a_kind_hand() {
        let h = [2, 2, 2, 5, 6];
        assert_eq!(cand(h, Category::ThreeKind), Some(17));
        // Not a 3+2 split: 5 != 6.
        assert_eq!(cand(h, Category::FullHouse), None);
        assert_eq!(cand(h, Category::Chance), Some(17));
        assert_eq!(cand(h, Category::Twos), Some(6));
        assert_eq!(cand(h, Category::FourKind), None);
        assert_eq!(cand(h, Category::Yahtzee), None);
    }

    #[test]
    fn yahtzee_cascades_into_lesser_kinds() {
        let h = [3, 3, 3, 3, 3];
        assert_eq!(cand(h, Category::Yahtzee), Some(50));
        assert_eq!(cand(h, Category::FourKind), Some(15));
        assert_eq!(cand(h, Category::ThreeKind), Some(15));
        assert_eq!(cand(h, Category::Threes), Some(15));
        for c in [
            Category::Ones,
            Category::Twos,
            Category::Fours,
            Category::Fives,
            Category::Sixes,
        ] {
            assert_eq!(cand(h, c), Some(0));
        }
        assert_eq!(cand(h, Category::FullHouse), None);
        assert_eq!(cand(h, Category::SmallStraight), None);
        assert_eq!(cand(h, Category::LargeStraight), None);
    }

    #[test]
    fn large_straight_is_also_small() {
        let h = [1, 2, 3, 4, 5];
        assert_eq!(cand(h, Category::LargeStraight), Some(40));
        assert_eq!(cand(h, Category::SmallStraight), Some(30));
        assert_eq!(cand(h, Category::Chance), Some(15));
    }

    #[test]
    fn full_house_variants() {
        // Pair below the triple.
        assert_eq!(cand([2, 2, 5, 5, 5], Category::FullHouse), Some(25));
        // Pair above the triple.
        assert_eq!(cand([5, 5, 5, 6, 6], Category::FullHouse), Some(25));
        // Four of a kind is not a full house.
        assert_eq!(cand([2, 2, 2, 2, 3], Category::FullHouse), None);
    }

    #[test]
    fn straight_with_internal_duplicate() {
        // Duplicate inside a valid 4-run must not break detection.
        let h = [2, 3, 3, 4, 5];
        assert_eq!(cand(h, Category::SmallStraight), Some(30));
        assert_eq!(cand(h, Category::LargeStraight), None);
    }

    #[test]
    fn straight_detection_matches_set_model_exhaustively() {
        // Independent set-membership model over all 6^5 hands: a small
        // straight is any run of 4 consecutive distinct faces, a large
        // straight is 5 distinct consecutive faces.
        for hand in all_hands() {
            let scores = candidate_scores(hand);
            let present = |f: u8| hand.contains(&f);
            let run4 = (1..=3).any(|lo| (lo..lo + 4).all(|f| present(f as u8)));
            let distinct = {
                let mut faces = [false; 7];
                for &d in &hand {
                    faces[d as usize] = true;
                }
                faces.iter().filter(|&&b| b).count()
            };
            let run5 = distinct == 5 && hand[4] - hand[0] == 4;

            let expect_small = if run4 { Some(30) } else { None };
            let expect_large = if run5 { Some(40) } else { None };
            assert_eq!(
                scores[Category::SmallStraight.index()],
                expect_small,
                "small straight mismatch for {:?}",
                hand
            );
            assert_eq!(
                scores[Category::LargeStraight.index()],
                expect_large,
                "large straight mismatch for {:?}",
                hand
            );
        }
    }

    #[test]
    fn kind_categories_match_count_model_exhaustively() {
        for hand in all_hands() {
            let scores = candidate_scores(hand);
            let sum: i32 = hand.iter().map(|&d| d as i32).sum();
            let max_count = (1u8..=6)
                .map(|f| hand.iter().filter(|&&d| d == f).count())
                .max()
                .unwrap();

            let expect = |met: bool, v: i32| if met { Some(v) } else { None };
            assert_eq!(scores[Category::ThreeKind.index()], expect(max_count >= 3, sum));
            assert_eq!(scores[Category::FourKind.index()], expect(max_count >= 4, sum));
            assert_eq!(scores[Category::Yahtzee.index()], expect(max_count == 5, 50));
        }
    }

    /// All 6^5 hands, sorted non-decreasing.
    fn all_hands() -> impl Iterator<Item = [u8; 5]> {
        (0u32..6u32.pow(5)).map(|mut n| {
            let mut hand = [0u8; 5];
            for d in &mut hand {
                *d = (n % 6) as u8 + 1;
                n /= 6;
            }
            hand.sort_unstable();
            hand
        })
    }
}

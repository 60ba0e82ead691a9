//! Pure dice-to-category scoring.
//!
//! The evaluator is stateless and total: every category gets a candidate for
//! every well-formed hand. `None` means the pattern is absent; committing such
//! a category scratches it for 0 points.

use crate::category::NUM_CATS;

/// Points for a full house.
pub const FULL_HOUSE_POINTS: i32 = 25;
/// Points for a small straight (4 sequential faces).
pub const SMALL_STRAIGHT_POINTS: i32 = 30;
/// Points for a large straight (5 sequential faces).
pub const LARGE_STRAIGHT_POINTS: i32 = 40;
/// Points for a yahtzee (five of a kind).
pub const YAHTZEE_POINTS: i32 = 50;

/// Compute the candidate score for every category, indexed by
/// [`Category::index`](crate::Category::index).
///
/// - `sorted` must be non-decreasing with faces in 1..=6. The engine validates
///   hands before calling; this function only `debug_assert!`s the contract.
/// - Upper categories and chance are always `Some` (0 is a scoreable result).
/// - Pattern categories are `Some(points)` when the pattern is present and
///   `None` otherwise.
pub fn candidate_scores(sorted: [u8; 5]) -> [Option<i32>; NUM_CATS] {
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    debug_assert!(sorted.iter().all(|d| (1..=6).contains(d)));

    let mut counts = [0u8; 6];
    for &d in &sorted {
        counts[(d - 1) as usize] += 1;
    }
    let sum: i32 = sorted.iter().map(|&d| d as i32).sum();

    // Largest multiplicity and the face achieving it. Ties resolve to the
    // smallest face (ascending scan with strict `>`); the full-house exclusion
    // below relies on this.
    let mut same_count = 0u8;
    let mut same_val = 0u8;
    for (i, &n) in counts.iter().enumerate() {
        if n > same_count {
            same_count = n;
            same_val = i as u8 + 1;
        }
    }

    let mut out = [None; NUM_CATS];

    // Upper section: count of matching dice times the face value.
    for face in 1u8..=6 {
        out[(face - 1) as usize] = Some(counts[(face - 1) as usize] as i32 * face as i32);
    }

    // Of-a-kind categories cascade on the multiplicity: a yahtzee is also a
    // valid four- and three-of-a-kind.
    if same_count >= 3 {
        out[6] = Some(sum);
    }
    if same_count >= 4 {
        out[7] = Some(sum);
    }
    if same_count == 5 {
        out[11] = Some(YAHTZEE_POINTS);
    }

    // Full house: a triple plus a pair of a different face. In a sorted hand
    // the pair sits at one end, outside the triple.
    if same_count == 3 {
        let pair_low = sorted[0] == sorted[1] && sorted[0] != same_val;
        let pair_high = sorted[3] == sorted[4] && sorted[4] != same_val;
        if pair_low || pair_high {
            out[8] = Some(FULL_HOUSE_POINTS);
        }
    }

    // Straights. Every 4-run of faces contains {3,4}; the remaining two run
    // members are {1,2}, {2,5}, or {5,6}.
    if same_count <= 2 {
        let has = |f: u8| counts[(f - 1) as usize] > 0;
        if has(3)
            && has(4)
            && ((has(1) && has(2)) || (has(2) && has(5)) || (has(5) && has(6)))
        {
            out[9] = Some(SMALL_STRAIGHT_POINTS);
        }
        if sorted.windows(2).all(|w| w[1] - w[0] == 1) {
            out[10] = Some(LARGE_STRAIGHT_POINTS);
        }
    }

    // Chance: always the sum.
    out[12] = Some(sum);

    out
}

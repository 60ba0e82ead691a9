//! Baseline automatic play used by `yh sim`: hold the most common face,
//! commit the highest-value open category.

use yh_core::{Category, Game, GameError};

/// Pick the open category with the highest candidate value. Pattern
/// categories with no pattern count as 0 (a scratch).
pub fn greedy_pick(candidates: &[(Category, Option<i32>)]) -> Option<Category> {
    candidates
        .iter()
        .max_by_key(|(_, v)| v.unwrap_or(0))
        .map(|(c, _)| *c)
}

/// Hold exactly the dice showing the hand's most common face (ties resolve to
/// the higher face). Only valid between rolls.
pub fn hold_most_common_face(game: &mut Game) -> Result<(), GameError> {
    let view = game.hand_view();
    let mut counts = [0u8; 6];
    for v in view.values {
        counts[(v - 1) as usize] += 1;
    }
    let mut target = 6u8;
    for face in (1u8..=6).rev() {
        if counts[(face - 1) as usize] > counts[(target - 1) as usize] {
            target = face;
        }
    }
    for (i, v) in view.values.iter().enumerate() {
        let want_held = *v == target;
        if view.holds[i] != want_held {
            game.toggle_hold(i)?;
        }
    }
    Ok(())
}

/// Play one full game with the baseline policy; returns the grand total.
pub fn play_greedy_game(game: &mut Game) -> Result<i32, GameError> {
    while !game.is_game_over() {
        let rolls = game.config().rolls_per_round;
        for roll in 1..=rolls {
            game.roll()?;
            if roll < rolls {
                hold_most_common_face(game)?;
            }
        }
        let pick = greedy_pick(&game.candidates()).ok_or(GameError::InvalidArgument {
            msg: "no open category",
        })?;
        game.select_category(pick)?;
    }
    Ok(game.totals().grand_total)
}

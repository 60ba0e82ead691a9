//! The score sheet: 13 one-shot category slots plus derived totals.

use serde::{Deserialize, Serialize};

use crate::category::{self, Category, Section, NUM_CATS};
use crate::engine::GameError;
use crate::scoring::candidate_scores;

/// One category slot. Created unused and valueless, mutated exactly once when
/// the player commits the category, never reset afterward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub value: Option<i32>,
    pub used: bool,
}

/// Derived totals. Accumulated incrementally on each commit; never committable
/// by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub upper_sum: i32,
    pub upper_bonus: i32,
    pub upper_total: i32,
    pub lower_total: i32,
    pub grand_total: i32,
}

/// The 13 category entries plus running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    entries: [ScoreEntry; NUM_CATS],
    totals: Totals,
    bonus_threshold: i32,
    bonus_points: i32,
}

impl ScoreSheet {
    pub fn new(bonus_threshold: i32, bonus_points: i32) -> Self {
        Self {
            entries: [ScoreEntry::default(); NUM_CATS],
            totals: Totals::default(),
            bonus_threshold,
            bonus_points,
        }
    }

    pub fn entry(&self, category: Category) -> ScoreEntry {
        self.entries[category.index()]
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn is_used(&self, category: Category) -> bool {
        self.entries[category.index()].used
    }

    /// All 13 entries committed; terminal state for the sheet.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.used)
    }

    /// Categories still open for commitment, in sheet order.
    pub fn unused_categories(&self) -> impl Iterator<Item = Category> + '_ {
        category::ALL
            .iter()
            .copied()
            .filter(move |c| !self.entries[c.index()].used)
    }

    /// Evaluator candidate for `category` given the current sorted hand, or
    /// `CategoryAlreadyUsed`. Read-only; repeated calls never change the sheet.
    pub fn candidate_for(
        &self,
        category: Category,
        sorted: [u8; 5],
    ) -> Result<Option<i32>, GameError> {
        if self.is_used(category) {
            return Err(GameError::CategoryAlreadyUsed(category));
        }
        Ok(candidate_scores(sorted)[category.index()])
    }

    /// Commit `value` to `category` and fold it into the derived totals.
    ///
    /// Fails with `CategoryAlreadyUsed` before touching anything; on success
    /// all total updates apply together. The upper bonus is added exactly
    /// once, the first time `upper_sum` reaches the threshold, and never
    /// retracted.
    pub fn commit(&mut self, category: Category, value: i32) -> Result<(), GameError> {
        let entry = &mut self.entries[category.index()];
        if entry.used {
            return Err(GameError::CategoryAlreadyUsed(category));
        }
        entry.value = Some(value);
        entry.used = true;

        match category.section() {
            Section::Upper => {
                self.totals.upper_sum += value;
                self.totals.upper_total += value;
                if self.totals.upper_bonus == 0 && self.totals.upper_sum >= self.bonus_threshold {
                    self.totals.upper_bonus = self.bonus_points;
                    self.totals.upper_total += self.bonus_points;
                    self.totals.grand_total += self.bonus_points;
                }
            }
            Section::Lower => {
                self.totals.lower_total += value;
            }
        }
        self.totals.grand_total += value;
        Ok(())
    }
}

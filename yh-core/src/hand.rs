//! The 5-die hand: values, hold flags, and rolling.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of dice in a hand.
pub const NUM_DICE: usize = 5;

/// A single die. Held dice are excluded from re-rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub value: u8,
    pub held: bool,
}

/// Read-only snapshot of the hand handed to the display shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub values: [u8; NUM_DICE],
    pub holds: [bool; NUM_DICE],
    pub rolls_remaining: u8,
}

/// Exactly 5 dice, values always in 1..=6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceHand {
    dice: [Die; NUM_DICE],
}

impl Default for DiceHand {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceHand {
    /// A fresh hand: all dice at 1, nothing held.
    pub fn new() -> Self {
        Self {
            dice: [Die {
                value: 1,
                held: false,
            }; NUM_DICE],
        }
    }

    /// Rebuild a hand from snapshot arrays. Values must be in 1..=6.
    pub fn from_parts(values: [u8; NUM_DICE], holds: [bool; NUM_DICE]) -> Option<Self> {
        if !values.iter().all(|v| (1..=6).contains(v)) {
            return None;
        }
        let mut dice = [Die {
            value: 1,
            held: false,
        }; NUM_DICE];
        for i in 0..NUM_DICE {
            dice[i] = Die {
                value: values[i],
                held: holds[i],
            };
        }
        Some(Self { dice })
    }

    /// Roll every unheld die with uniform values in 1..=6.
    ///
    /// The first roll of a round (`roll_number == 1`) clears all holds first.
    /// Precondition: `1 <= roll_number <= max_rolls`. Violating it is a caller
    /// error; debug builds assert, release builds leave the hand untouched.
    pub fn roll<R: Rng>(&mut self, rng: &mut R, roll_number: u8, max_rolls: u8) {
        debug_assert!(roll_number >= 1 && roll_number <= max_rolls);
        if roll_number < 1 || roll_number > max_rolls {
            return;
        }
        if roll_number == 1 {
            self.clear_holds();
        }
        for die in &mut self.dice {
            if !die.held {
                die.value = rng.gen_range(1..=6);
            }
        }
    }

    /// Deterministic counterpart of [`DiceHand::roll`]: feed pre-drawn values
    /// into the unheld dice, in position order. With k unheld dice only the
    /// first k draws are consumed (event-keyed chance stream convention).
    pub fn apply_draws(&mut self, roll_number: u8, draws: [u8; NUM_DICE]) {
        debug_assert!(draws.iter().all(|d| (1..=6).contains(d)));
        if roll_number == 1 {
            self.clear_holds();
        }
        let mut next = 0usize;
        for die in &mut self.dice {
            if !die.held {
                die.value = draws[next];
                next += 1;
            }
        }
    }

    /// Flip the hold flag of one die. Values are unaffected.
    pub fn toggle_hold(&mut self, index: usize) -> bool {
        match self.dice.get_mut(index) {
            Some(die) => {
                die.held = !die.held;
                true
            }
            None => false,
        }
    }

    pub fn clear_holds(&mut self) {
        for die in &mut self.dice {
            die.held = false;
        }
    }

    /// The 5 values in non-decreasing order; canonical evaluator input.
    pub fn sorted_values(&self) -> [u8; NUM_DICE] {
        let mut vals = self.values();
        vals.sort_unstable();
        vals
    }

    /// Multiplicity of each face, indexed by `face - 1`.
    pub fn face_counts(&self) -> [u8; 6] {
        let mut counts = [0u8; 6];
        for die in &self.dice {
            counts[(die.value - 1) as usize] += 1;
        }
        counts
    }

    pub fn values(&self) -> [u8; NUM_DICE] {
        let mut out = [0u8; NUM_DICE];
        for (o, die) in out.iter_mut().zip(&self.dice) {
            *o = die.value;
        }
        out
    }

    pub fn holds(&self) -> [bool; NUM_DICE] {
        let mut out = [false; NUM_DICE];
        for (o, die) in out.iter_mut().zip(&self.dice) {
            *o = die.held;
        }
        out
    }
}

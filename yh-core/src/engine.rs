//! Turn state machine: rolls, holds, category commits, round advancement.
//!
//! This module is the single place that mutates game state via rules. The
//! display shell only ever sees snapshots ([`HandView`], [`Totals`],
//! [`CommitOutcome`]) and recoverable [`GameError`] rejections.

use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;
use crate::chance::{self, EventKey};
use crate::config::{ConfigError, GameConfig};
use crate::hand::{DiceHand, HandView, NUM_DICE};
use crate::sheet::{ScoreSheet, Totals};

/// Recoverable rule violations. None is fatal to the process; the shell
/// reports them and carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid argument: {msg}")]
    InvalidArgument { msg: &'static str },
    #[error("category {0:?} already used")]
    CategoryAlreadyUsed(Category),
    #[error("no rolls left this round")]
    RollLimitExceeded,
    #[error("game is over")]
    GameOver,
}

/// How dice values are generated.
pub enum ChanceMode {
    /// Deterministic, event-keyed dice stream. Same seed + same actions
    /// reproduce the same game.
    DeterministicEventKeyed { episode_seed: u64 },
    /// Pseudorandom dice backed by a small seedable PRNG.
    Rng { rng: Box<ChaCha8Rng> },
}

impl ChanceMode {
    pub fn new_deterministic(episode_seed: u64) -> Self {
        ChanceMode::DeterministicEventKeyed { episode_seed }
    }

    pub fn new_rng(seed: u64) -> Self {
        ChanceMode::Rng {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

/// Round/roll counters, owned by [`Game`] and mutated only by roll and commit
/// transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Completed commits so far; 0..=rounds. Equal to `rounds` once terminal.
    pub round: u8,
    /// Rolls taken this round; 0..=rolls_per_round.
    pub roll_count: u8,
}

/// Published after every successful commit. Replaces the original listener
/// fan-out: whoever needs to react (clear display, log, refresh candidates)
/// consumes this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    pub category: Category,
    pub committed_value: i32,
    pub totals: Totals,
    /// Round index after advancing.
    pub round: u8,
    pub game_over: bool,
}

/// Serializable whole-game state for host save/resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub state: RoundState,
    pub dice_values: [u8; NUM_DICE],
    pub dice_holds: [bool; NUM_DICE],
    pub sheet: ScoreSheet,
}

/// A single game in flight: one hand, one sheet, one round counter.
pub struct Game {
    config: GameConfig,
    state: RoundState,
    hand: DiceHand,
    sheet: ScoreSheet,
    chance: ChanceMode,
}

impl Game {
    pub fn new(config: GameConfig, chance: ChanceMode) -> Result<Self, GameError> {
        validate_config(&config)?;
        Ok(Self {
            sheet: ScoreSheet::new(config.upper_bonus_threshold, config.upper_bonus_points),
            state: RoundState::default(),
            hand: DiceHand::new(),
            config,
            chance,
        })
    }

    /// Rebuild a game from a host-serialized snapshot.
    pub fn resume(snapshot: GameSnapshot, chance: ChanceMode) -> Result<Self, GameError> {
        validate_config(&snapshot.config)?;
        if snapshot.state.round > snapshot.config.rounds {
            return Err(GameError::InvalidArgument {
                msg: "snapshot round out of range",
            });
        }
        if snapshot.state.roll_count > snapshot.config.rolls_per_round {
            return Err(GameError::InvalidArgument {
                msg: "snapshot roll count out of range",
            });
        }
        let hand = DiceHand::from_parts(snapshot.dice_values, snapshot.dice_holds).ok_or(
            GameError::InvalidArgument {
                msg: "snapshot dice values out of range",
            },
        )?;
        Ok(Self {
            config: snapshot.config,
            state: snapshot.state,
            hand,
            sheet: snapshot.sheet,
            chance,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            state: self.state,
            dice_values: self.hand.values(),
            dice_holds: self.hand.holds(),
            sheet: self.sheet.clone(),
        }
    }

    /// Roll all unheld dice. The first roll of a round clears holds.
    pub fn roll(&mut self) -> Result<HandView, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.state.roll_count >= self.config.rolls_per_round {
            return Err(GameError::RollLimitExceeded);
        }
        self.state.roll_count += 1;
        let roll_number = self.state.roll_count;
        match &mut self.chance {
            ChanceMode::DeterministicEventKeyed { episode_seed } => {
                let key = EventKey {
                    episode_seed: *episode_seed,
                    round_idx: self.state.round,
                    roll_idx: roll_number - 1,
                };
                self.hand.apply_draws(roll_number, chance::roll5(key));
            }
            ChanceMode::Rng { rng } => {
                self.hand
                    .roll(rng.as_mut(), roll_number, self.config.rolls_per_round);
            }
        }
        Ok(self.hand_view())
    }

    /// Flip one die's hold flag. Only meaningful between rolls: rejected
    /// before the first roll of a round and once the roll limit is reached.
    pub fn toggle_hold(&mut self, index: usize) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.state.roll_count == 0 {
            return Err(GameError::InvalidArgument {
                msg: "no roll yet this round",
            });
        }
        if self.state.roll_count >= self.config.rolls_per_round {
            return Err(GameError::InvalidArgument {
                msg: "no rerolls remaining this round",
            });
        }
        if !self.hand.toggle_hold(index) {
            return Err(GameError::InvalidArgument {
                msg: "die index out of range",
            });
        }
        Ok(())
    }

    /// Candidate scores for every unused category, for live display.
    /// Empty before the first roll of a round. Never mutates state.
    pub fn candidates(&self) -> Vec<(Category, Option<i32>)> {
        if self.is_game_over() || self.state.roll_count == 0 {
            return Vec::new();
        }
        let sorted = self.hand.sorted_values();
        let all = crate::scoring::candidate_scores(sorted);
        self.sheet
            .unused_categories()
            .map(|c| (c, all[c.index()]))
            .collect()
    }

    /// Commit the current hand to `category` and advance to the next round.
    ///
    /// A pattern candidate of `None` scratches the category for 0. The commit
    /// either fully applies (entry + all totals) or not at all.
    pub fn select_category(&mut self, category: Category) -> Result<CommitOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.state.roll_count == 0 {
            return Err(GameError::InvalidArgument {
                msg: "cannot score before rolling",
            });
        }
        let sorted = self.hand.sorted_values();
        let value = self.sheet.candidate_for(category, sorted)?.unwrap_or(0);
        self.sheet.commit(category, value)?;
        self.next_round();
        Ok(CommitOutcome {
            category,
            committed_value: value,
            totals: self.sheet.totals(),
            round: self.state.round,
            game_over: self.is_game_over(),
        })
    }

    fn next_round(&mut self) {
        self.state.roll_count = 0;
        self.state.round += 1;
        self.hand.clear_holds();
    }

    pub fn is_game_over(&self) -> bool {
        self.state.round >= self.config.rounds || self.sheet.is_complete()
    }

    pub fn hand_view(&self) -> HandView {
        HandView {
            values: self.hand.values(),
            holds: self.hand.holds(),
            rolls_remaining: self.config.rolls_per_round - self.state.roll_count,
        }
    }

    pub fn totals(&self) -> Totals {
        self.sheet.totals()
    }

    pub fn round_state(&self) -> RoundState {
        self.state
    }

    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn validate_config(config: &GameConfig) -> Result<(), GameError> {
    match config.validate() {
        Ok(()) => Ok(()),
        Err(ConfigError::Invalid { msg }) => Err(GameError::InvalidArgument { msg }),
        Err(_) => Err(GameError::InvalidArgument {
            msg: "invalid game config",
        }),
    }
}

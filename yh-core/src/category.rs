//! The 13 scoring categories and their section split.

use serde::{Deserialize, Serialize};

/// Number of scoring categories on the sheet.
pub const NUM_CATS: usize = 13;

/// Which half of the score sheet a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Upper,
    Lower,
}

/// Scoring category, in sheet order (index 0..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeKind,
    FourKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

/// All categories in index order.
pub const ALL: [Category; NUM_CATS] = [
    Category::Ones,
    Category::Twos,
    Category::Threes,
    Category::Fours,
    Category::Fives,
    Category::Sixes,
    Category::ThreeKind,
    Category::FourKind,
    Category::FullHouse,
    Category::SmallStraight,
    Category::LargeStraight,
    Category::Yahtzee,
    Category::Chance,
];

impl Category {
    /// Stable sheet index (0..=12).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`].
    pub fn from_index(idx: usize) -> Option<Category> {
        ALL.get(idx).copied()
    }

    /// Short stable name, also used in logs and CLI input.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeKind => "three_kind",
            Category::FourKind => "four_kind",
            Category::FullHouse => "full_house",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::Yahtzee => "yahtzee",
            Category::Chance => "chance",
        }
    }

    /// Parse a name produced by [`Category::name`].
    pub fn from_name(name: &str) -> Option<Category> {
        ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn section(self) -> Section {
        if self.index() < 6 {
            Section::Upper
        } else {
            Section::Lower
        }
    }

    /// Face value an upper category counts (1..=6), `None` for lower ones.
    pub fn face_value(self) -> Option<u8> {
        match self.section() {
            Section::Upper => Some(self.index() as u8 + 1),
            Section::Lower => None,
        }
    }
}

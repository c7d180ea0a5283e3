//! # Catalog View
//!
//! Turns the catalog plus the user's search/filter/sort choices into the
//! ordered list the UI shows.
//!
//! ```text
//! Catalog + ViewState  →  derive()  →  Vec<&Plant>
//! ```
//!
//! `derive` is pure: same inputs, same output, catalog untouched. Shuffling
//! is a one-shot action. `request_shuffle` draws a permutation once and
//! stores it in the view state, so re-deriving keeps the shuffled order until
//! the user picks another sort key or shuffles again.

use clap::ValueEnum;
use clap::builder::PossibleValue;
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::core::catalog::{Catalog, Difficulty, Plant, PlantId};
use crate::core::error::InvalidViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Order of the filter chips.
    pub const CHIPS: [DifficultyFilter; 4] = [
        DifficultyFilter::All,
        DifficultyFilter::Only(Difficulty::Easy),
        DifficultyFilter::Only(Difficulty::Intermediate),
        DifficultyFilter::Only(Difficulty::Advanced),
    ];

    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => *wanted == difficulty,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyFilter::All => "All",
            DifficultyFilter::Only(d) => d.label(),
        }
    }

    /// Next chip, wrapping.
    pub fn next(&self) -> Self {
        let i = Self::CHIPS.iter().position(|c| c == self).unwrap_or(0);
        Self::CHIPS[(i + 1) % Self::CHIPS.len()]
    }
}

impl FromStr for DifficultyFilter {
    type Err = InvalidViewState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(DifficultyFilter::All);
        }
        s.parse().map(DifficultyFilter::Only)
    }
}

// Not derivable: `Only` carries data. The chips double as the CLI values.
impl ValueEnum for DifficultyFilter {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::CHIPS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let name = match self {
            DifficultyFilter::All => "all",
            DifficultyFilter::Only(Difficulty::Easy) => "easy",
            DifficultyFilter::Only(Difficulty::Intermediate) => "intermediate",
            DifficultyFilter::Only(Difficulty::Advanced) => "advanced",
        };
        Some(PossibleValue::new(name))
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    Difficulty,
    Rating,
    Random,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Difficulty => "Difficulty",
            SortKey::Rating => "Rating",
            SortKey::Random => "Random",
        }
    }

    /// Cycle through the field keys. Random is only reachable by shuffling.
    pub fn next_field(&self) -> Self {
        match self {
            SortKey::Name => SortKey::Difficulty,
            SortKey::Difficulty => SortKey::Rating,
            SortKey::Rating | SortKey::Random => SortKey::Name,
        }
    }
}

impl FromStr for SortKey {
    type Err = InvalidViewState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "difficulty" => Ok(SortKey::Difficulty),
            "rating" => Ok(SortKey::Rating),
            "random" => Ok(SortKey::Random),
            _ => Err(InvalidViewState::UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    #[default]
    #[value(name = "asc", alias = "ascending")]
    Ascending,
    #[value(name = "desc", alias = "descending")]
    Descending,
}

impl SortOrder {
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }

    fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = InvalidViewState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(InvalidViewState::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Everything the user controls about which plants show and in what order.
///
/// `shuffle` is `Some` exactly when `sort_key` is `Random`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    search_term: String,
    difficulty_filter: DifficultyFilter,
    sort_key: SortKey,
    sort_order: SortOrder,
    shuffle: Option<Vec<PlantId>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn difficulty_filter(&self) -> DifficultyFilter {
        self.difficulty_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_difficulty_filter(&mut self, filter: DifficultyFilter) {
        self.difficulty_filter = filter;
    }

    /// Switch to a field sort. Drops any captured shuffle.
    ///
    /// `SortKey::Random` is rejected: a random order only exists once
    /// [`ViewState::request_shuffle`] has drawn one.
    pub fn set_sort_key(&mut self, key: SortKey) -> Result<(), InvalidViewState> {
        if key == SortKey::Random {
            return Err(InvalidViewState::ShuffleNotRequested);
        }
        self.sort_key = key;
        self.shuffle = None;
        Ok(())
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Draw a fresh permutation of the whole catalog and sort by it.
    pub fn request_shuffle<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) {
        let mut order: Vec<PlantId> = catalog.plants().iter().map(|p| p.id).collect();
        order.shuffle(rng);
        self.shuffle = Some(order);
        self.sort_key = SortKey::Random;
    }

    fn admits(&self, plant: &Plant, needle: &str) -> bool {
        plant.name.to_lowercase().contains(needle)
            && self.difficulty_filter.matches(plant.difficulty)
    }
}

/// Filter and order `catalog` according to `view`.
///
/// Field sorts are stable: plants with equal keys keep their catalog order in
/// both directions. Names and difficulty labels compare as raw strings,
/// ratings numerically.
pub fn derive<'a>(catalog: &'a Catalog, view: &ViewState) -> Vec<&'a Plant> {
    let needle = view.search_term.to_lowercase();
    let mut plants: Vec<&Plant> = catalog
        .plants()
        .iter()
        .filter(|p| view.admits(p, &needle))
        .collect();

    let order = view.sort_order;
    match (view.sort_key, &view.shuffle) {
        (SortKey::Random, Some(permutation)) => {
            let rank: HashMap<PlantId, usize> = permutation
                .iter()
                .enumerate()
                .map(|(i, id)| (*id, i))
                .collect();
            let rank_of = |id: PlantId| rank.get(&id).copied().unwrap_or(usize::MAX);
            plants.sort_by(|a, b| order.apply(rank_of(a.id).cmp(&rank_of(b.id))));
        }
        // No captured permutation: catalog order, the same as a shuffle that changed nothing.
        (SortKey::Random, None) => {}
        (key, _) => plants.sort_by(|a, b| order.apply(compare_field(key, a, b))),
    }

    plants
}

fn compare_field(key: SortKey, a: &Plant, b: &Plant) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Difficulty => a.difficulty.label().cmp(b.difficulty.label()),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
        SortKey::Random => Ordering::Equal,
    }
}

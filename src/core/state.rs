//! # Application State
//!
//! Core state for Botanical Haven. Domain logic only, no TUI types.
//! Presentation state (cursor, input mode, animation clocks) lives in `tui`.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>        // fixed plant data, shared read-only
//! ├── view: ViewState              // search / filter / sort
//! ├── navigator: DetailNavigator   // detail modal selection + tab
//! ├── theme: Theme                 // light or dark palette
//! ├── status_message: String       // status bar text
//! ├── visible: Vec<PlantId>        // last derive() result
//! └── rng: StdRng                  // shuffle source
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use clap::ValueEnum;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::catalog::{Catalog, Plant, PlantId};
use crate::core::config::ResolvedConfig;
use crate::core::error::InvalidViewState;
use crate::core::navigator::DetailNavigator;
use crate::core::view::{self, SortKey, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Theme {
    type Err = InvalidViewState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(InvalidViewState::UnknownTheme(s.to_string())),
        }
    }
}

pub struct App {
    pub catalog: Arc<Catalog>,
    pub view: ViewState,
    pub navigator: DetailNavigator,
    pub theme: Theme,
    pub status_message: String,
    /// Ids of the plants `derive` produced last, in display order.
    visible: Vec<PlantId>,
    rng: StdRng,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Build with a caller-supplied RNG so shuffles are reproducible in tests.
    pub fn with_rng(catalog: Arc<Catalog>, rng: StdRng) -> Self {
        let mut app = Self {
            navigator: DetailNavigator::new(catalog.clone()),
            catalog,
            view: ViewState::new(),
            theme: Theme::default(),
            status_message: String::from("Welcome to Botanical Haven!"),
            visible: Vec::new(),
            rng,
        };
        app.refresh();
        app
    }

    /// Apply the startup view settings from the resolved config.
    pub fn from_config(catalog: Arc<Catalog>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.apply_config(config);
        app
    }

    pub(crate) fn apply_config(&mut self, config: &ResolvedConfig) {
        self.theme = config.theme;
        self.view.set_search_term(config.search.clone());
        self.view.set_difficulty_filter(config.difficulty);
        self.view.set_sort_order(config.order);
        match config.sort {
            SortKey::Random => self.shuffle(),
            key => {
                if let Err(e) = self.view.set_sort_key(key) {
                    warn!("Ignoring configured sort key: {}", e);
                }
            }
        }
        self.refresh();
    }

    /// Draw a new one-shot shuffle order.
    pub(crate) fn shuffle(&mut self) {
        self.view.request_shuffle(&self.catalog, &mut self.rng);
    }

    /// Re-run the view pipeline. Returns true if the displayed list changed.
    pub fn refresh(&mut self) -> bool {
        let ids: Vec<PlantId> = view::derive(&self.catalog, &self.view)
            .into_iter()
            .map(|p| p.id)
            .collect();
        if ids == self.visible {
            return false;
        }
        self.visible = ids;
        true
    }

    pub fn visible_ids(&self) -> &[PlantId] {
        &self.visible
    }

    pub fn visible_plants(&self) -> Vec<&Plant> {
        self.visible
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect()
    }
}

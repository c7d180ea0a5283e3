//! # Detail Navigator
//!
//! Tracks which plant is open in the detail modal and which tab is showing.
//!
//! ```text
//!            open(id)                 open(other) / next / previous
//!   Closed ───────────▶ Open(id, Info) ─────────────────────────────▶ Open(other, Info)
//!      ▲                    │  select_tab(t)
//!      └──── close() ───────┘  ─────────────▶ Open(id, t)
//! ```
//!
//! Previous/next walk the *whole* catalog in catalog order, wrapping at both
//! ends, whatever the current search or filter hides. Positions come from the
//! catalog's id index rather than from the displayed list.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::catalog::{Catalog, Plant, PlantId};
use crate::core::error::{InvalidSelection, InvalidViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Info,
    Care,
    Stats,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Info, DetailTab::Care, DetailTab::Stats];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Info => "Info",
            DetailTab::Care => "Care",
            DetailTab::Stats => "Stats",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DetailTab::Info => 0,
            DetailTab::Care => 1,
            DetailTab::Stats => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DetailTab {
    type Err = InvalidViewState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(DetailTab::Info),
            "care" => Ok(DetailTab::Care),
            "stats" => Ok(DetailTab::Stats),
            _ => Err(InvalidViewState::UnknownTab(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigatorState {
    #[default]
    Closed,
    Open { selected: PlantId, tab: DetailTab },
}

pub struct DetailNavigator {
    catalog: Arc<Catalog>,
    state: NavigatorState,
}

impl DetailNavigator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: NavigatorState::Closed,
        }
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, NavigatorState::Open { .. })
    }

    /// Open `id` on the Info tab, replacing any current selection.
    pub fn open(&mut self, id: PlantId) -> Result<(), InvalidSelection> {
        if !self.catalog.contains(id) {
            return Err(InvalidSelection::UnknownPlant(id));
        }
        self.state = NavigatorState::Open {
            selected: id,
            tab: DetailTab::Info,
        };
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = NavigatorState::Closed;
    }

    pub fn select_tab(&mut self, tab: DetailTab) -> Result<(), InvalidSelection> {
        match &mut self.state {
            NavigatorState::Open { tab: active, .. } => {
                *active = tab;
                Ok(())
            }
            NavigatorState::Closed => Err(InvalidSelection::Closed),
        }
    }

    pub fn next_tab(&mut self) -> Result<(), InvalidSelection> {
        let tab = self.current_tab().ok_or(InvalidSelection::Closed)?;
        self.select_tab(tab.next())
    }

    pub fn previous_tab(&mut self) -> Result<(), InvalidSelection> {
        let tab = self.current_tab().ok_or(InvalidSelection::Closed)?;
        self.select_tab(tab.previous())
    }

    pub fn next(&mut self) -> Result<(), InvalidSelection> {
        self.step(1)
    }

    pub fn previous(&mut self) -> Result<(), InvalidSelection> {
        let n = self.catalog.len();
        self.step(n.saturating_sub(1))
    }

    /// Move `offset` places forward through the catalog, wrapping.
    fn step(&mut self, offset: usize) -> Result<(), InvalidSelection> {
        let NavigatorState::Open { selected, .. } = self.state else {
            return Err(InvalidSelection::Closed);
        };
        let position = self
            .catalog
            .position(selected)
            .ok_or(InvalidSelection::UnknownPlant(selected))?;
        let n = self.catalog.len();
        let target = self.catalog.plants()[(position + offset) % n].id;
        self.open(target)
    }

    pub fn current_selection(&self) -> Option<&Plant> {
        match self.state {
            NavigatorState::Open { selected, .. } => self.catalog.get(selected),
            NavigatorState::Closed => None,
        }
    }

    /// Active tab, or `None` while closed.
    pub fn current_tab(&self) -> Option<DetailTab> {
        match self.state {
            NavigatorState::Open { tab, .. } => Some(tab),
            NavigatorState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> DetailNavigator {
        DetailNavigator::new(Arc::new(Catalog::builtin().unwrap()))
    }

    fn selected(nav: &DetailNavigator) -> Option<u32> {
        nav.current_selection().map(|p| p.id.0)
    }

    #[test]
    fn test_starts_closed() {
        let nav = navigator();
        assert_eq!(nav.state(), NavigatorState::Closed);
        assert!(nav.current_selection().is_none());
        assert!(nav.current_tab().is_none());
    }

    #[test]
    fn test_next_walks_catalog_order() {
        let mut nav = navigator();
        nav.open(PlantId(3)).unwrap();
        nav.next().unwrap();
        assert_eq!(selected(&nav), Some(4));
        nav.next().unwrap();
        assert_eq!(selected(&nav), Some(5));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut nav = navigator();
        nav.open(PlantId(6)).unwrap();
        nav.next().unwrap();
        assert_eq!(selected(&nav), Some(1));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut nav = navigator();
        nav.open(PlantId(1)).unwrap();
        nav.previous().unwrap();
        assert_eq!(selected(&nav), Some(6));
        nav.previous().unwrap();
        assert_eq!(selected(&nav), Some(5));
    }

    #[test]
    fn test_reopening_resets_tab() {
        let mut nav = navigator();
        nav.open(PlantId(1)).unwrap();
        nav.select_tab(DetailTab::Stats).unwrap();
        assert_eq!(nav.current_tab(), Some(DetailTab::Stats));

        nav.open(PlantId(2)).unwrap();
        assert_eq!(nav.current_tab(), Some(DetailTab::Info));
    }

    #[test]
    fn test_stepping_resets_tab() {
        let mut nav = navigator();
        nav.open(PlantId(2)).unwrap();
        nav.select_tab(DetailTab::Care).unwrap();
        nav.next().unwrap();
        assert_eq!(nav.current_tab(), Some(DetailTab::Info));
    }

    #[test]
    fn test_closed_rejects_navigation_without_mutation() {
        let mut nav = navigator();
        assert_eq!(nav.next(), Err(InvalidSelection::Closed));
        assert_eq!(nav.previous(), Err(InvalidSelection::Closed));
        assert_eq!(nav.select_tab(DetailTab::Care), Err(InvalidSelection::Closed));
        assert_eq!(nav.next_tab(), Err(InvalidSelection::Closed));
        assert_eq!(nav.state(), NavigatorState::Closed);
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let mut nav = navigator();
        nav.open(PlantId(2)).unwrap();
        assert_eq!(
            nav.open(PlantId(99)),
            Err(InvalidSelection::UnknownPlant(PlantId(99)))
        );
        assert_eq!(selected(&nav), Some(2));
    }

    #[test]
    fn test_close_from_any_state() {
        let mut nav = navigator();
        nav.close();
        assert!(!nav.is_open());
        nav.open(PlantId(4)).unwrap();
        nav.close();
        assert_eq!(nav.state(), NavigatorState::Closed);
    }

    #[test]
    fn test_tab_cycling() {
        let mut nav = navigator();
        nav.open(PlantId(1)).unwrap();
        nav.next_tab().unwrap();
        assert_eq!(nav.current_tab(), Some(DetailTab::Care));
        nav.next_tab().unwrap();
        nav.next_tab().unwrap();
        assert_eq!(nav.current_tab(), Some(DetailTab::Info));
        nav.previous_tab().unwrap();
        assert_eq!(nav.current_tab(), Some(DetailTab::Stats));
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("Stats".parse::<DetailTab>().unwrap(), DetailTab::Stats);
        assert!("history".parse::<DetailTab>().is_err());
    }
}

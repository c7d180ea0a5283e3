//! # Actions
//!
//! Everything that can happen in Botanical Haven becomes an `Action`.
//! User types in the search box? That's `Action::SetSearchTerm(text)`.
//! User presses → in the detail view? That's `Action::NextPlant`.
//!
//! ```text
//! State + Action  →  update()  →  Effect (or a contract error)
//! ```
//!
//! `update` never does I/O. The returned `Effect` tells the adapter what
//! changed so it can reset cursors or restart animations. A rejected action
//! leaves the state untouched and comes back as `Err`.

use log::debug;

use crate::core::catalog::PlantId;
use crate::core::error::CoreError;
use crate::core::navigator::DetailTab;
use crate::core::state::App;
use crate::core::view::{DifficultyFilter, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // View pipeline
    SetSearchTerm(String),
    SetDifficultyFilter(DifficultyFilter),
    CycleDifficultyFilter,
    SetSortKey(SortKey),
    CycleSortKey,
    ToggleSortOrder,
    Shuffle,

    // Detail modal
    OpenPlant(PlantId),
    ClosePlant,
    SelectTab(DetailTab),
    NextTab,
    PreviousTab,
    NextPlant,
    PreviousPlant,

    // Preferences
    ToggleTheme,
    Quit,
}

/// What the adapter should react to after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The displayed plant list changed (contents or order).
    ListChanged,
    /// The detail modal opened, closed, or moved to another plant or tab.
    SelectionChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Result<Effect, CoreError> {
    debug!("update: {:?}", action);
    match action {
        Action::SetSearchTerm(term) => {
            app.view.set_search_term(term);
            Ok(list_effect(app))
        }
        Action::SetDifficultyFilter(filter) => {
            app.view.set_difficulty_filter(filter);
            app.status_message = format!("Showing: {}", filter.label());
            Ok(list_effect(app))
        }
        Action::CycleDifficultyFilter => {
            let next = app.view.difficulty_filter().next();
            update(app, Action::SetDifficultyFilter(next))
        }
        Action::SetSortKey(SortKey::Random) => update(app, Action::Shuffle),
        Action::SetSortKey(key) => {
            app.view.set_sort_key(key)?;
            app.status_message = sort_status(app);
            Ok(list_effect(app))
        }
        Action::CycleSortKey => {
            let next = app.view.sort_key().next_field();
            update(app, Action::SetSortKey(next))
        }
        Action::ToggleSortOrder => {
            app.view.toggle_sort_order();
            app.status_message = sort_status(app);
            Ok(list_effect(app))
        }
        Action::Shuffle => {
            app.shuffle();
            app.status_message = String::from("Shuffled");
            Ok(list_effect(app))
        }
        Action::OpenPlant(id) => {
            app.navigator.open(id)?;
            Ok(Effect::SelectionChanged)
        }
        Action::ClosePlant => {
            if !app.navigator.is_open() {
                return Ok(Effect::None);
            }
            app.navigator.close();
            Ok(Effect::SelectionChanged)
        }
        Action::SelectTab(tab) => {
            app.navigator.select_tab(tab)?;
            Ok(Effect::SelectionChanged)
        }
        Action::NextTab => {
            app.navigator.next_tab()?;
            Ok(Effect::SelectionChanged)
        }
        Action::PreviousTab => {
            app.navigator.previous_tab()?;
            Ok(Effect::SelectionChanged)
        }
        Action::NextPlant => {
            app.navigator.next()?;
            Ok(Effect::SelectionChanged)
        }
        Action::PreviousPlant => {
            app.navigator.previous()?;
            Ok(Effect::SelectionChanged)
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            app.status_message = format!("Theme: {}", app.theme);
            Ok(Effect::None)
        }
        Action::Quit => Ok(Effect::Quit),
    }
}

fn list_effect(app: &mut App) -> Effect {
    if app.refresh() {
        Effect::ListChanged
    } else {
        Effect::None
    }
}

fn sort_status(app: &App) -> String {
    format!(
        "Sorted by {} {}",
        app.view.sort_key().label(),
        app.view.sort_order().arrow()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Difficulty;
    use crate::core::error::InvalidSelection;
    use crate::core::navigator::NavigatorState;
    use crate::core::state::Theme;
    use crate::test_support::test_app;

    fn visible(app: &App) -> Vec<u32> {
        app.visible_ids().iter().map(|id| id.0).collect()
    }

    #[test]
    fn test_search_changes_list() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SetSearchTerm("plant".into())).unwrap();
        assert_eq!(effect, Effect::ListChanged);
        assert_eq!(visible(&app), vec![2, 5]);

        // Same term again: nothing to redraw.
        let effect = update(&mut app, Action::SetSearchTerm("plant".into())).unwrap();
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_cycle_filter_sets_status() {
        let mut app = test_app();
        update(&mut app, Action::CycleDifficultyFilter).unwrap();
        assert_eq!(
            app.view.difficulty_filter(),
            DifficultyFilter::Only(Difficulty::Easy)
        );
        assert_eq!(app.status_message, "Showing: Easy");
        assert_eq!(visible(&app), vec![4, 2, 5]);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let mut app = test_app();
        update(&mut app, Action::SetSortKey(SortKey::Rating)).unwrap();
        update(&mut app, Action::ToggleSortOrder).unwrap();
        assert_eq!(visible(&app), vec![4, 2, 5, 6, 1, 3]);
        assert_eq!(app.status_message, "Sorted by Rating ↓");
    }

    #[test]
    fn test_random_sort_key_routes_to_shuffle() {
        let mut app = test_app();
        update(&mut app, Action::SetSortKey(SortKey::Random)).unwrap();
        assert_eq!(app.view.sort_key(), SortKey::Random);
        assert_eq!(app.status_message, "Shuffled");

        let mut ids = visible(&app);
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_shuffled_list_is_stable_across_other_actions() {
        let mut app = test_app();
        update(&mut app, Action::Shuffle).unwrap();
        let before = visible(&app);
        update(&mut app, Action::ToggleTheme).unwrap();
        update(&mut app, Action::OpenPlant(PlantId(1))).unwrap();
        assert_eq!(visible(&app), before);
    }

    #[test]
    fn test_navigation_ignores_filter() {
        let mut app = test_app();
        update(&mut app, Action::SetSearchTerm("snake".into())).unwrap();
        update(&mut app, Action::OpenPlant(PlantId(2))).unwrap();
        update(&mut app, Action::NextPlant).unwrap();

        // Fiddle Leaf Fig is filtered out of the list but still reachable.
        let selected = app.navigator.current_selection().unwrap();
        assert_eq!(selected.name, "Fiddle Leaf Fig");
        assert_eq!(visible(&app), vec![2]);
    }

    #[test]
    fn test_closed_navigation_is_an_error() {
        let mut app = test_app();
        let err = update(&mut app, Action::NextPlant).unwrap_err();
        assert_eq!(err, CoreError::Selection(InvalidSelection::Closed));
        let err = update(&mut app, Action::SelectTab(DetailTab::Care)).unwrap_err();
        assert_eq!(err, CoreError::Selection(InvalidSelection::Closed));
        assert_eq!(app.navigator.state(), NavigatorState::Closed);
    }

    #[test]
    fn test_open_unknown_plant_is_an_error() {
        let mut app = test_app();
        let err = update(&mut app, Action::OpenPlant(PlantId(42))).unwrap_err();
        assert_eq!(
            err,
            CoreError::Selection(InvalidSelection::UnknownPlant(PlantId(42)))
        );
    }

    #[test]
    fn test_close_when_closed_is_quiet() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::ClosePlant).unwrap(), Effect::None);
        update(&mut app, Action::OpenPlant(PlantId(3))).unwrap();
        assert_eq!(
            update(&mut app, Action::ClosePlant).unwrap(),
            Effect::SelectionChanged
        );
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTheme).unwrap();
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.status_message, "Theme: dark");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit).unwrap(), Effect::Quit);
    }
}

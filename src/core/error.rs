//! # Contract Errors
//!
//! The core does no I/O, so every error here is a caller bug: asking the
//! navigator to move while closed, naming a plant that isn't in the catalog,
//! or handing the view state a value outside its domain. They are returned
//! to the caller and never clamped into a valid state.

use thiserror::Error;

use crate::core::catalog::PlantId;

/// Navigation or tab selection that the current navigator state can't honour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelection {
    #[error("no plant is open in the detail view")]
    Closed,
    #[error("no plant with id {0} in the catalog")]
    UnknownPlant(PlantId),
}

/// A view-state value outside its enumerated domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidViewState {
    #[error("unknown sort key `{0}` (expected name, difficulty, rating or random)")]
    UnknownSortKey(String),
    #[error("unknown sort order `{0}` (expected asc or desc)")]
    UnknownSortOrder(String),
    #[error("unknown difficulty `{0}` (expected all, easy, intermediate or advanced)")]
    UnknownDifficulty(String),
    #[error("unknown theme `{0}` (expected light or dark)")]
    UnknownTheme(String),
    #[error("unknown detail tab `{0}` (expected info, care or stats)")]
    UnknownTab(String),
    #[error("random order has to be requested with a shuffle")]
    ShuffleNotRequested,
}

/// Rejected while building a catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("plant id must be positive (plant `{0}`)")]
    ZeroId(String),
    #[error("duplicate plant id {0}")]
    DuplicateId(PlantId),
    #[error("rating {rating} of plant {id} is outside 0..=5")]
    RatingOutOfRange { id: PlantId, rating: f32 },
    #[error("{field} level {value} of plant {id} is outside 1..=3")]
    NeedsOutOfRange {
        id: PlantId,
        field: &'static str,
        value: u8,
    },
    #[error("humidity {value}% of plant {id} is above 100")]
    HumidityOutOfRange { id: PlantId, value: u8 },
    #[error("temperature range of plant {0} is inverted")]
    InvertedTemperature(PlantId),
    #[error("last-watered date {year}-{month:02}-{day:02} of plant {id} does not exist")]
    InvalidDate {
        id: PlantId,
        year: i32,
        month: u32,
        day: u32,
    },
}

/// Error returned by the reducer. Catalog errors can't occur there: the
/// catalog is validated once, before an `App` exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Selection(#[from] InvalidSelection),
    #[error(transparent)]
    ViewState(#[from] InvalidViewState),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = InvalidSelection::UnknownPlant(PlantId(42));
        assert_eq!(err.to_string(), "no plant with id 42 in the catalog");

        let err = InvalidViewState::UnknownSortKey("colour".to_string());
        assert!(err.to_string().contains("`colour`"));
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: CoreError = InvalidSelection::Closed.into();
        assert_eq!(err.to_string(), "no plant is open in the detail view");
        assert_eq!(err, CoreError::Selection(InvalidSelection::Closed));
    }

    #[test]
    fn test_invalid_date_message() {
        let err = CatalogError::InvalidDate {
            id: PlantId(3),
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(
            err.to_string(),
            "last-watered date 2023-02-30 of plant 3 does not exist"
        );
    }
}

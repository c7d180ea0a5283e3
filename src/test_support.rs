//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

use crate::core::catalog::{Accent, Catalog, Difficulty, Plant, PlantId, TemperatureRange};
use crate::core::state::App;

/// Creates a test App over the built-in catalog with a fixed shuffle seed.
pub fn test_app() -> App {
    App::with_rng(Arc::new(Catalog::builtin().unwrap()), StdRng::seed_from_u64(42))
}

/// A valid plant with placeholder display data.
pub fn plant(id: u32, name: &str) -> Plant {
    Plant {
        id: PlantId(id),
        name: name.to_string(),
        care: "Water weekly".to_string(),
        description: "A test plant.".to_string(),
        difficulty: Difficulty::Easy,
        rating: 4.0,
        water_needs: 2,
        light_needs: 2,
        humidity: 50,
        temperature: TemperatureRange { min: 15, max: 25 },
        icon: "*".to_string(),
        accent: Accent::GreenBlue,
        last_watered: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

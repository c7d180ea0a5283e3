//! # Plant Catalog
//!
//! The fixed, read-only set of plants the app browses. A `Catalog` is built
//! once at startup, validated, and then shared (`Arc<Catalog>`) between the
//! view pipeline and the detail navigator. Nothing mutates it afterwards.
//!
//! ```text
//! Catalog
//! ├── plants: Vec<Plant>              // display order of the source data
//! └── index: HashMap<PlantId, usize>  // id → position, built once
//! ```

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::core::error::{CatalogError, InvalidViewState};

/// Stable identifier of a plant. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlantId(pub u32);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Easy,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = InvalidViewState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(InvalidViewState::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Two-stop color theme of a plant card. The TUI maps each to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    GreenBlue,
    YellowGreen,
    BluePurple,
    PurplePink,
    PinkRed,
    IndigoBlue,
}

/// Comfortable temperature band in °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureRange {
    pub min: i8,
    pub max: i8,
}

impl fmt::Display for TemperatureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}°C", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub care: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// 0.0..=5.0, one decimal.
    pub rating: f32,
    /// 1..=3
    pub water_needs: u8,
    /// 1..=3
    pub light_needs: u8,
    /// Percent.
    pub humidity: u8,
    pub temperature: TemperatureRange,
    pub icon: String,
    pub accent: Accent,
    pub last_watered: NaiveDate,
}

pub const MAX_RATING: f32 = 5.0;
pub const MAX_NEEDS: u8 = 3;

#[derive(Debug, Clone)]
pub struct Catalog {
    plants: Vec<Plant>,
    index: HashMap<PlantId, usize>,
}

impl Catalog {
    /// Validate `plants` and build the id index.
    pub fn new(plants: Vec<Plant>) -> Result<Self, CatalogError> {
        if plants.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(plants.len());
        for (position, plant) in plants.iter().enumerate() {
            validate(plant)?;
            if index.insert(plant.id, position).is_some() {
                return Err(CatalogError::DuplicateId(plant.id));
            }
        }

        Ok(Self { plants, index })
    }

    /// The six plants shipped with the app, validated like any other catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        let plants = SEEDS.iter().map(seed_plant).collect::<Result<Vec<_>, _>>()?;
        Self::new(plants)
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Position of `id` in catalog order.
    pub fn position(&self, id: PlantId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.position(id).map(|i| &self.plants[i])
    }

    pub fn contains(&self, id: PlantId) -> bool {
        self.index.contains_key(&id)
    }
}

fn validate(plant: &Plant) -> Result<(), CatalogError> {
    let id = plant.id;
    if id.0 == 0 {
        return Err(CatalogError::ZeroId(plant.name.clone()));
    }
    if !(0.0..=MAX_RATING).contains(&plant.rating) {
        return Err(CatalogError::RatingOutOfRange {
            id,
            rating: plant.rating,
        });
    }
    for (field, value) in [("water", plant.water_needs), ("light", plant.light_needs)] {
        if !(1..=MAX_NEEDS).contains(&value) {
            return Err(CatalogError::NeedsOutOfRange { id, field, value });
        }
    }
    if plant.humidity > 100 {
        return Err(CatalogError::HumidityOutOfRange {
            id,
            value: plant.humidity,
        });
    }
    if plant.temperature.min > plant.temperature.max {
        return Err(CatalogError::InvertedTemperature(id));
    }
    Ok(())
}

struct Seed {
    id: u32,
    name: &'static str,
    care: &'static str,
    accent: Accent,
    icon: &'static str,
    water: u8,
    light: u8,
    humidity: u8,
    temperature: (i8, i8),
    description: &'static str,
    difficulty: Difficulty,
    last_watered: (i32, u32, u32),
    rating: f32,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: 1,
        name: "Monstera Deliciosa",
        care: "Medium water, bright indirect light",
        accent: Accent::GreenBlue,
        icon: "🌿",
        water: 2,
        light: 3,
        humidity: 60,
        temperature: (18, 30),
        description: "Known for its large, glossy leaves with natural holes, the Monstera is a statement piece in any room.",
        difficulty: Difficulty::Intermediate,
        last_watered: (2023, 5, 10),
        rating: 4.5,
    },
    Seed {
        id: 2,
        name: "Snake Plant",
        care: "Low water, low to bright indirect light",
        accent: Accent::YellowGreen,
        icon: "🐍",
        water: 1,
        light: 2,
        humidity: 40,
        temperature: (15, 27),
        description: "A hardy plant that can survive in various light conditions and helps purify the air.",
        difficulty: Difficulty::Easy,
        last_watered: (2023, 5, 5),
        rating: 4.8,
    },
    Seed {
        id: 3,
        name: "Fiddle Leaf Fig",
        care: "Medium water, bright indirect light",
        accent: Accent::BluePurple,
        icon: "🌳",
        water: 2,
        light: 3,
        humidity: 50,
        temperature: (18, 24),
        description: "With its large, violin-shaped leaves, this plant adds a touch of drama to any space.",
        difficulty: Difficulty::Advanced,
        last_watered: (2023, 5, 8),
        rating: 4.2,
    },
    Seed {
        id: 4,
        name: "Pothos",
        care: "Low to medium water, low to bright indirect light",
        accent: Accent::PurplePink,
        icon: "🍃",
        water: 1,
        light: 2,
        humidity: 50,
        temperature: (18, 29),
        description: "A versatile trailing plant that's perfect for beginners and can thrive in various conditions.",
        difficulty: Difficulty::Easy,
        last_watered: (2023, 5, 7),
        rating: 4.9,
    },
    Seed {
        id: 5,
        name: "ZZ Plant",
        care: "Low water, low to bright indirect light",
        accent: Accent::PinkRed,
        icon: "🌱",
        water: 1,
        light: 1,
        humidity: 40,
        temperature: (18, 26),
        description: "Known for its ability to tolerate neglect, the ZZ plant is perfect for those who often forget to water.",
        difficulty: Difficulty::Easy,
        last_watered: (2023, 5, 1),
        rating: 4.7,
    },
    Seed {
        id: 6,
        name: "Peace Lily",
        care: "Medium water, low to medium light",
        accent: Accent::IndigoBlue,
        icon: "🕊",
        water: 2,
        light: 2,
        humidity: 50,
        temperature: (18, 30),
        description: "With its elegant white flowers, the Peace Lily is both beautiful and excellent at purifying air.",
        difficulty: Difficulty::Intermediate,
        last_watered: (2023, 5, 9),
        rating: 4.6,
    },
];

fn seed_plant(seed: &Seed) -> Result<Plant, CatalogError> {
    let id = PlantId(seed.id);
    let (year, month, day) = seed.last_watered;
    let last_watered = NaiveDate::from_ymd_opt(year, month, day).ok_or(
        CatalogError::InvalidDate {
            id,
            year,
            month,
            day,
        },
    )?;
    Ok(Plant {
        id,
        name: seed.name.to_string(),
        care: seed.care.to_string(),
        description: seed.description.to_string(),
        difficulty: seed.difficulty,
        rating: seed.rating,
        water_needs: seed.water,
        light_needs: seed.light,
        humidity: seed.humidity,
        temperature: TemperatureRange {
            min: seed.temperature.0,
            max: seed.temperature.1,
        },
        icon: seed.icon.to_string(),
        accent: seed.accent,
        last_watered,
    })
}

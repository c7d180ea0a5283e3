//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top line with app name, plant count and status
//! - `Toolbar`: Difficulty chips and sort indicator
//! - `StarRating`: Five-star rating with number
//! - `ProgressBar`: Animated water/light gauge
//! - `PlantDetail`: Detail overlay with Info / Care / Stats tabs
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBar`: Search text input
//! - `PlantList`: Cursor over the derived plant list
//!
//! Components never read `App` directly. The `ui` module pulls what each
//! one needs out of core state and passes it in as props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── search_bar.rs
//! ├── toolbar.rs
//! ├── plant_list.rs
//! ├── plant_detail.rs
//! ├── star_rating.rs
//! └── progress_bar.rs
//! ```

pub mod plant_detail;
pub mod plant_list;
pub mod progress_bar;
pub mod search_bar;
pub mod star_rating;
mod title_bar;
mod toolbar;

pub use plant_detail::PlantDetail;
pub use plant_list::{PlantList, PlantListState};
pub use progress_bar::ProgressBar;
pub use search_bar::{SearchBar, SearchEvent};
pub use star_rating::StarRating;
pub use title_bar::TitleBar;
pub use toolbar::Toolbar;

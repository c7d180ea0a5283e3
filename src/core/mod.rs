//! # Core Application Logic
//!
//! This module contains Botanical Haven's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (plant data) │
//!                    │  • View (derive list)   │
//!                    │  • Navigator (detail)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Plant` records and the validated, read-only `Catalog`
//! - [`view`]: `ViewState` and `derive()`, the search/filter/sort pipeline
//! - [`navigator`]: `DetailNavigator`, the detail modal state machine
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Layered startup configuration
//! - [`error`]: Contract errors

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod navigator;
pub mod state;
pub mod view;

//! Botanical Haven library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

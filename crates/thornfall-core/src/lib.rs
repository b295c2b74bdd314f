//! Thornfall Core - foundational types for the Thornfall combat engine
//!
//! This crate provides the primitives the game crates build on:
//! - Stable entity identifiers for combatants and items
//! - Polled countdown timers for tick-driven cooldowns

pub mod time;
pub mod types;

pub use time::Cooldown;
pub use types::EntityId;

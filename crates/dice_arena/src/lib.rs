//! Self-play arena for dice chess
//!
//! This crate provides infrastructure for:
//! - Running batches of seeded self-play games with random choosers
//! - Summarizing outcomes and turn statistics
//!
//! # Usage
//!
//! ```bash
//! # Ten games with default settings
//! cargo run -p dice_arena
//!
//! # A reproducible batch, reported as JSON
//! cargo run -p dice_arena -- --games 50 --seed 7 --json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;

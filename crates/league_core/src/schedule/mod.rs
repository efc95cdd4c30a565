//! Regular-season schedule settings

pub mod conf_div;

pub use conf_div::{conf_div_game_counts, GameCountOutcome};

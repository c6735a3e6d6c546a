//! Public API surface for the stats backend.
//!
//! This file consolidates the record types served over HTTP together with
//! their key types. All types derive Serialize/Deserialize for JSON.

pub use crate::models::Average;
pub use crate::models::DefensiveEfficiency;
pub use crate::models::Game;
pub use crate::models::Position;
pub use crate::models::TopUsagePlayer;
pub use crate::models::{format_game_date, parse_game_date, GameDateError, GAME_DATE_FORMAT};
pub use crate::models::{DEFENSIVE_EFFICIENCY_WIRE_NAMES, TOP_USAGE_SLOTS};

// Game identifier as issued by the league (e.g. "0022400061").
crate::define_string_id_type!(GameId);

// Team identifier (1..=30 after the loader's remapping).
crate::define_id_type!(i32, TeamId);

// Auto-increment key of the `averages` table.
crate::define_id_type!(i32, AverageId);

// Auto-increment key of the `positions` table.
crate::define_id_type!(i32, PositionId);

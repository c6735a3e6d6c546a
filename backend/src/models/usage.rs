use serde::{Deserialize, Serialize};

use crate::api::TeamId;

/// Number of player slots carried by [`TopUsagePlayer`].
pub const TOP_USAGE_SLOTS: usize = 5;

/// The highest-usage players of one team (`top_usage_players`).
///
/// This is a fixed-width projection: slot 1 is the highest usage. Slots the
/// loader could not fill are null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUsagePlayer {
    pub team_id: TeamId,
    pub player1_name: Option<String>,
    pub player1_usage: Option<f64>,
    pub player2_name: Option<String>,
    pub player2_usage: Option<f64>,
    pub player3_name: Option<String>,
    pub player3_usage: Option<f64>,
    pub player4_name: Option<String>,
    pub player4_usage: Option<f64>,
    pub player5_name: Option<String>,
    pub player5_usage: Option<f64>,
}

impl TopUsagePlayer {
    /// Slots in rank order as `(name, usage)` pairs.
    pub fn slots(&self) -> [(Option<&str>, Option<f64>); TOP_USAGE_SLOTS] {
        [
            (self.player1_name.as_deref(), self.player1_usage),
            (self.player2_name.as_deref(), self.player2_usage),
            (self.player3_name.as_deref(), self.player3_usage),
            (self.player4_name.as_deref(), self.player4_usage),
            (self.player5_name.as_deref(), self.player5_usage),
        ]
    }
}
